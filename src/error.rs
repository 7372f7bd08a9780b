use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with partitions, offsets or distance tables.
#[derive(Debug, Clone, PartialEq)]
pub enum TreespaceError {
    IndexOutOfRange(String),
    MismatchedLengths(String),
    OverlappingPartitions(String),
    DuplicateLeaf(String),
    /// The edge count has no value in the table's float type. Every `i32` converts into `f32`
    /// and `f64`, so only custom `Float` implementations can produce this.
    UnrepresentableValue(String),
    TooManyLeaves(String),
}

impl Error for TreespaceError {}

impl Display for TreespaceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            TreespaceError::IndexOutOfRange(msg) => format!("Index out of range: {msg}"),
            TreespaceError::MismatchedLengths(msg) =>
                format!("Distance tables have mismatched lengths: {msg}"),
            TreespaceError::OverlappingPartitions(msg) =>
                format!("Partitions are not disjoint: {msg}"),
            TreespaceError::DuplicateLeaf(msg) => format!("Duplicate leaf: {msg}"),
            TreespaceError::UnrepresentableValue(msg) =>
                format!("Value cannot be represented: {msg}"),
            TreespaceError::TooManyLeaves(msg) => format!("Too many leaves: {msg}"),
        };
        write!(f, "{message}")
    }
}
