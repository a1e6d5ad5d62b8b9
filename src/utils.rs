use clap::Parser;
use log::trace;

use crate::{cli::Cli, error::ScaffoldError};

/// Set up crate logging and environment variables, then parse the arguments.
pub(crate) fn setup() -> Result<Cli, ScaffoldError> {
  // a .env is optional, it only ever carries RUST_LOG
  let dotenv = dotenv::dotenv().ok();
  env_logger::init();
  if let Some(path) = dotenv {
    trace!("loaded dotenv from {path:?}");
  }

  let args = Cli::try_parse()?;
  trace!("args: {args:?}");
  Ok(args)
}
