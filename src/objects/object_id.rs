//! Commit object identifier
//!
//! Identifiers are 40-character hexadecimal strings, the textual form of
//! a content hash. The engine treats them as opaque: equality and hashing
//! drive every traversal, and the derived ordering exists only to break
//! timestamp ties deterministically and to sort test output.

use crate::error::AncestryError;
use crate::objects::OBJECT_ID_LENGTH;

/// Commit identifier (hex form of a content hash)
///
/// A validated 40-character hexadecimal string, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated ObjectId or error if invalid length/characters
    pub fn try_parse(id: String) -> Result<Self, AncestryError> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(AncestryError::InvalidObjectId(id));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AncestryError::InvalidObjectId(id));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (the usual short display form)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
