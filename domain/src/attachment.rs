//! Receipt file validation.
//!
//! Only the file name suffix is inspected; the declared MIME type is not
//! trusted and file size is not limited.

use shared::NewBillConfig;

/// Outcome of validating a selected file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentVerdict {
    Accepted,
    Rejected,
}

/// Allow-list predicate over lower-case file extensions
#[derive(Debug, Clone)]
pub struct AttachmentValidator {
    accepted_extensions: Vec<String>,
}

impl AttachmentValidator {
    pub fn new(accepted_extensions: &[String]) -> Self {
        Self {
            accepted_extensions: accepted_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn from_config(config: &NewBillConfig) -> Self {
        Self::new(&config.accepted_extensions)
    }

    /// Validate a file by name. Works on bare names and on input values
    /// such as `C:\fakepath\test.jpg`.
    pub fn validate(&self, file_name: &str) -> AttachmentVerdict {
        match file_extension(file_name) {
            Some(ext) if self.accepted_extensions.iter().any(|accepted| *accepted == ext) => {
                AttachmentVerdict::Accepted
            }
            _ => AttachmentVerdict::Rejected,
        }
    }

    pub fn is_accepted(&self, file_name: &str) -> bool {
        self.validate(file_name) == AttachmentVerdict::Accepted
    }
}

impl Default for AttachmentValidator {
    fn default() -> Self {
        Self::from_config(&NewBillConfig::default())
    }
}

/// Strip any directory part (either separator) from a path-like file name
pub fn base_name(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Lower-cased extension of a file name, without the dot.
///
/// Returns `None` when there is no dot, when the name ends with a dot, or
/// when the only dot starts the name (`.png`).
pub fn file_extension(file_name: &str) -> Option<String> {
    let name = base_name(file_name.trim());
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
