use std::path::PathBuf;

use thiserror::Error;

use crate::post::TYPE_CHOICES;

/// Everything that can stop a post from being scaffolded.
#[derive(Debug, Error)]
pub enum ScaffoldError {
  #[error("unidentified post type: {0} is not one of {TYPE_CHOICES:?}")]
  InvalidType(String),
  /// The dated post file is already there; it is never overwritten.
  #[error("post already exists: {}", .0.display())]
  FileAlreadyExists(PathBuf),
  #[error(transparent)]
  Argument(#[from] clap::Error),
  #[error(transparent)]
  Io(#[from] std::io::Error),
  #[error(transparent)]
  Json(#[from] serde_json::Error),
  #[error(transparent)]
  Other(#[from] anyhow::Error),
}
