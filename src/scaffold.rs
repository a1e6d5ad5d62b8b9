use std::{
  fs::{self, OpenOptions},
  io::{ErrorKind, Write},
  path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::NaiveDate;
use log::{debug, info, trace};

use crate::{error::ScaffoldError, post::PostRequest, render::render};

/// Create the post directory under `site` and write the stub post for `date` into it.
///
/// Returns the path of the new file. An existing post at that path is left untouched and reported
/// as [`ScaffoldError::FileAlreadyExists`].
pub fn scaffold(
  request: &PostRequest,
  site: &Path,
  date: NaiveDate,
) -> Result<PathBuf, ScaffoldError> {
  debug!("request: {request:?}");
  let dir = request.output_dir(site);
  println!("makedirs: creating {}", dir.display());
  fs::create_dir_all(&dir).with_context(|| format!("could not create directory {dir:?}"))?;

  let path = request.output_path(site, date);
  trace!("metadata: {:?}", request.metadata_lines());
  let content = render(request)?;

  // open scope to close the file before reporting success
  {
    let mut file = OpenOptions::new().write(true).create_new(true).open(&path).map_err(|e| {
      match e.kind() {
        ErrorKind::AlreadyExists => ScaffoldError::FileAlreadyExists(path.clone()),
        _ => ScaffoldError::Io(e),
      }
    })?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
  }
  println!("write: {}\n{content}", path.display());
  info!("created {} post: {path:?}", request.post_type);

  Ok(path)
}
