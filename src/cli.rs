use std::{path::PathBuf, str::FromStr};

use clap::{builder::BoolishValueParser, ArgAction, Parser};
use slug::slugify;

use crate::post::{PostRequest, PostType};

/// Scaffold a new blog post
#[derive(Parser, Debug)]
#[clap(version = "1.0", author = "Thor Kamphefner")]
#[command(name = "new-post")]
#[command(bin_name = "new-post")]
#[command(about = "create a dated markdown post or jupyter notebook stub with front matter")]
pub struct Cli {
  /// The type of post: `markdown` or `jupyter`
  #[arg(index = 1, value_name = "TYPE", value_parser = PostType::from_str)]
  pub post_type:   PostType,
  /// The title of your blog post
  #[arg(index = 2, value_parser = parse_title)]
  pub title:       String,
  /// The description of your blog post
  #[arg(index = 3)]
  pub desc:        String,
  /// A space delimited list of categories for this post
  #[arg(short, long, num_args = 1..)]
  pub categories:  Vec<String>,
  /// Hide this page from search and display; `--hide` alone means `--hide true`
  #[arg(
    long,
    action = ArgAction::Set,
    num_args = 0..=1,
    value_name = "BOOL",
    default_value = "false",
    default_missing_value = "true",
    value_parser = BoolishValueParser::new()
  )]
  pub hide:        bool,
  /// Root of the blog checkout holding `_posts` and `_notebooks`
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub site:        PathBuf,
}

impl Cli {
  /// Split into the post to create and the site to create it in.
  pub fn into_request(self) -> (PostRequest, PathBuf) {
    let request = PostRequest {
      post_type:   self.post_type,
      title:       self.title,
      description: self.desc,
      categories:  self.categories,
      hide:        self.hide,
    };
    (request, self.site)
  }
}

/// titles must leave something behind once slugified, or there is no path to write to
fn parse_title(s: &str) -> Result<String, String> {
  if slugify(s).is_empty() {
    return Err(format!("title {s:?} has no letters or digits to name the post after"));
  }
  Ok(s.to_string())
}
