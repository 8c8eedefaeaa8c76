//! Per-image error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, transforming or writing one image.
///
/// Every variant carries the file it concerns so the orchestrator can report
/// it without extra bookkeeping.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode `{0}`")]
    Decode(PathBuf, #[source] image::ImageError),

    #[error("failed to encode `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` has no pixels ({1}x{2})")]
    Empty(PathBuf, u32, u32),
}

impl AssetError {
    /// Message including every `source()` in the chain, `: `-separated.
    pub fn detail(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}
