use crate::objects::object_id::ObjectId;
use thiserror::Error;

/// Failures surfaced by the ancestry engine and its accessors.
///
/// No variant carries partial results; the first error aborts the
/// running traversal and all per-traversal state is discarded.
#[derive(Debug, Error)]
pub enum AncestryError {
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("operation cancelled")]
    Cancelled,
}
