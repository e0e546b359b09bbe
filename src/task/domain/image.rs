//! Image attachments and storage-key derivation.

use super::TaskDomainError;
use mockable::Clock;
use std::fmt;

/// An image selected for upload alongside a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    /// Creates an upload payload from the original file name, its content
    /// type, and its bytes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyImageFileName`] when the file name
    /// is empty after trimming.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, TaskDomainError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(TaskDomainError::EmptyImageFileName);
        }
        Ok(Self {
            file_name,
            content_type: content_type.into(),
            bytes,
        })
    }

    /// Returns the original file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the content type of the image bytes.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Consumes the upload, returning the content type and the bytes.
    #[must_use]
    pub fn into_payload(self) -> (String, Vec<u8>) {
        (self.content_type, self.bytes)
    }
}

/// Storage key for an uploaded object.
///
/// Keys combine the upload instant in milliseconds with the original file
/// name. Uniqueness is best-effort: two uploads of the same file name
/// within the same millisecond tick collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Derives the storage key for an upload happening now.
    #[must_use]
    pub fn derive(file_name: &str, clock: &impl Clock) -> Self {
        Self(format!("{}_{}", clock.utc().timestamp_millis(), file_name))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
