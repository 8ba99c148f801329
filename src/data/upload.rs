//! Acceptance rules for the ECG image upload widget.

use std::path::{Path, PathBuf};

use crate::data::error::UploadError;

/// Extensions the upload widget accepts, lower-case, without the dot.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Whether the path names a supported ECG image, judged by extension alone.
/// The file contents are never inspected.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.iter().any(|a| *a == ext)
        })
        .unwrap_or(false)
}

/// Pick the single file accepted from a drop.
///
/// A drop hands over everything the user dragged; the widget accepts exactly
/// one file per interaction, so the first supported path wins. Unsupported
/// drops are reported, never silently swallowed.
pub fn first_accepted(paths: &[PathBuf]) -> Result<PathBuf, UploadError> {
    if paths.is_empty() {
        return Err(UploadError::Empty);
    }
    for p in paths {
        if is_supported_image(p) {
            return Ok(p.clone());
        }
    }
    Err(UploadError::UnsupportedType {
        path: paths[0].clone(),
    })
}
