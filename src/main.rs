use std::process::ExitCode;

use chrono::Local;
use error::ScaffoldError;
use log::{debug, error};

mod cli;
mod error;
mod post;
mod render;
mod scaffold;
mod utils;

const DATE_FORMAT: &str = "%Y-%m-%d";

// usage: new-post jupyter "COMP6771 Week 1 Notes" "Introduction to C++ and setting up details" -c comp6771 week01
fn main() -> ExitCode {
  match run() {
    Ok(()) => ExitCode::SUCCESS,
    // clap prints its own usage and picks the exit code, 0 for --help and --version
    Err(ScaffoldError::Argument(e)) => e.exit(),
    Err(e) => {
      error!("{e:?}");
      eprintln!("error: {e}");
      ExitCode::FAILURE
    },
  }
}

fn run() -> Result<(), ScaffoldError> {
  let (request, site) = utils::setup()?.into_request();
  let today = Local::now().date_naive();
  debug!("slug: {}, date: {today}", request.slug());

  scaffold::scaffold(&request, &site, today)?;
  Ok(())
}
