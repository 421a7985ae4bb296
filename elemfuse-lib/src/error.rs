use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::element::RadiusKind;
use crate::tables::Table;

/// Invariant violations when building an [`Element`](crate::Element).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("atomic number must be positive, got {0}")]
    NonPositiveAtomicNumber(i64),

    #[error("atomic number {0} is out of range")]
    AtomicNumberOutOfRange(i64),

    #[error("{kind} radius must not be negative, got {value}")]
    NegativeRadius { kind: RadiusKind, value: i64 },

    #[error("{kind} radius {value} pm is out of range")]
    RadiusOutOfRange { kind: RadiusKind, value: i64 },
}

#[derive(Debug, Error)]
pub enum FuseError {
    #[error("cannot read {table} table at {path:?}")]
    Resource {
        table: Table,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{table} table, line {line}, column {column}: {reason} (cell '{cell}')")]
    Format {
        table: Table,
        line: usize,
        column: usize,
        cell: String,
        reason: String,
    },

    #[error("{table} table, line {line}: reference {reference} is outside 1..={len}")]
    Index {
        table: Table,
        line: usize,
        reference: i64,
        len: usize,
    },

    #[error("{table} table, line {line}: invalid element")]
    Validation {
        table: Table,
        line: usize,
        #[source]
        source: ValidationError,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("report serialization failed")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FuseError>;
