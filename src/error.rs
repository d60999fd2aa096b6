// error.rs
// Error kinds raised by the sheet generation pipeline

use thiserror::Error;

use crate::defs::Column;

/// Failures surfaced by sheet generation. None of these are recovered
/// locally: a failed generation attempt is discarded wholesale and the
/// caller restarts with fresh shuffles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// A selection was requested beyond what the range can supply, e.g.
    /// more unique samples than the range holds distinct values.
    #[error("requested selection of {requested} exceeds the {available} available values")]
    InvalidRange { requested: usize, available: usize },

    /// Column index outside the sheet grid.
    #[error("column index {0} is outside the sheet (0-8)")]
    InvalidColumn(Column),

    /// Row construction scanned the whole candidate pool without finding a
    /// number whose column is still free in the row under construction.
    #[error("no suitable number found to construct a new row")]
    RowConstruction,
}
