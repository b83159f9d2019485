//! Attachment upload policy.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::error::UploadError;

/// Limits applied to uploaded attachments.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    folder: PathBuf,
    max_size: u64,
    allowed_extensions: BTreeSet<String>,
}

impl UploadPolicy {
    pub fn new(
        folder: impl Into<PathBuf>,
        max_size: u64,
        allowed_extensions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            folder: folder.into(),
            max_size,
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.into().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Lowercased extension after the last `.`, if any.
    fn extension(filename: &str) -> Option<String> {
        filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
            .map(|ext| ext.to_ascii_lowercase())
    }

    /// Whether the filename carries an allowed extension.
    pub fn is_allowed(&self, filename: &str) -> bool {
        Self::extension(filename)
            .map(|ext| self.allowed_extensions.contains(&ext))
            .unwrap_or(false)
    }

    /// Check a candidate upload against the extension list and size limit.
    pub fn check(&self, filename: &str, size: u64) -> Result<(), UploadError> {
        let extension = Self::extension(filename)
            .ok_or_else(|| UploadError::MissingExtension(filename.to_string()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(UploadError::DisallowedExtension { extension });
        }

        if size > self.max_size {
            return Err(UploadError::TooLarge {
                size,
                limit: self.max_size,
            });
        }

        Ok(())
    }

    /// Storage path for an upload. Only the final path component of
    /// `filename` is kept so a client cannot escape the upload folder.
    pub fn destination(&self, filename: &str) -> Option<PathBuf> {
        let name = filename.rsplit(['/', '\\']).next()?;
        if name.is_empty() || name == "." || name == ".." {
            return None;
        }
        Some(self.folder.join(Path::new(name)))
    }
}

impl From<&Config> for UploadPolicy {
    fn from(config: &Config) -> Self {
        Self::new(
            config.upload_folder.clone(),
            config.max_content_length,
            config.allowed_extensions.iter().cloned(),
        )
    }
}
