use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineageError {
    #[error("No common ancestor: {left} and {right} descend from different originals")]
    NoCommonAncestor {
        left: String,
        right: String,
    },
}

pub type LineageResult<T> = Result<T, LineageError>;
