//! Cleanup of raw table cells before numeric parsing.
//!
//! The three sources encode missing data and units differently: the radii
//! table writes `no data`, the density table mixes unit annotations into its
//! numbers, and the weight table gives uncertainty ranges and isotope masses
//! in brackets. Each helper returns the numeric text left after cleanup, with
//! `"0"` standing in for a cell that held no number at all.

use std::sync::OnceLock;

use regex::Regex;

use crate::constants::NO_DATA;

static PAREN_GROUP: OnceLock<Regex> = OnceLock::new();
static LETTERS_AND_PARENS: OnceLock<Regex> = OnceLock::new();

fn paren_group() -> &'static Regex {
    PAREN_GROUP.get_or_init(|| Regex::new(r"\([^)]*\)").expect("valid regex"))
}

fn letters_and_parens() -> &'static Regex {
    LETTERS_AND_PARENS.get_or_init(|| Regex::new(r"[A-Za-z()]+").expect("valid regex"))
}

/// Maps the `no data` marker to `"0"`.
pub fn radius_cell(cell: &str) -> String {
    let cell = cell.trim();
    if cell == NO_DATA {
        "0".to_string()
    } else {
        cell.to_string()
    }
}

/// Strips unit annotations and alphabetic notes from a density cell.
///
/// `"1.2(g/cm3)"` becomes `"1.2"`, `"(no data)"` becomes `"0"`.
pub fn density_cell(cell: &str) -> String {
    let without_groups = paren_group().replace_all(cell, "");
    let stripped = letters_and_parens().replace_all(&without_groups, "");
    or_zero(stripped.trim())
}

/// Reduces a weight cell to its leading value.
///
/// A leading `[` or `(` is dropped, the text is cut at the first `-` or `(`,
/// and letters, spaces and closing brackets are removed:
/// `"[1.00784-1.00811]"` becomes `"1.00784"`, `"(209)"` becomes `"209"`.
pub fn weight_cell(cell: &str) -> String {
    let cell = cell.trim();
    let body = cell.strip_prefix(['[', '(']).unwrap_or(cell);
    let body = match body.find(['-', '(']) {
        Some(end) => &body[..end],
        None => body,
    };
    let cleaned: String = body
        .chars()
        .filter(|c| !c.is_ascii_alphabetic() && !matches!(c, ' ' | ')' | ']'))
        .collect();
    or_zero(&cleaned)
}

fn or_zero(text: &str) -> String {
    if text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}
