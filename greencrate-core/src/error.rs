//! Error types for greencrate

use thiserror::Error;

/// Main error type for greencrate operations
///
/// Only structural problems are reported here. Zero denominators and
/// constant color channels are carried through the output as NaN or
/// infinity and never surface as an `Error`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Shape error: {rows}x{columns} batch, at least {required} columns required")]
    Shape {
        rows: usize,
        columns: usize,
        required: usize,
    },

    #[error("Empty batch: {0} requires at least one row")]
    EmptyBatch(&'static str),

    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for greencrate operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_message() {
        let err = Error::Shape { rows: 4, columns: 3, required: 6 };
        assert_eq!(
            err.to_string(),
            "Shape error: 4x3 batch, at least 6 columns required"
        );
    }

    #[test]
    fn test_empty_batch_message() {
        let err = Error::EmptyBatch("color features");
        assert_eq!(err.to_string(), "Empty batch: color features requires at least one row");
    }
}
