use std::{
  fmt,
  path::{Path, PathBuf},
  str::FromStr,
};

use chrono::NaiveDate;

use crate::{error::ScaffoldError, DATE_FORMAT};

/// Post types accepted on the command line.
pub const TYPE_CHOICES: [&str; 2] = ["jupyter", "markdown"];

/// The two kinds of post the blog knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
  /// a markdown post under `_posts`
  Text,
  /// a jupyter notebook under `_notebooks`
  Notebook,
}

impl PostType {
  /// directory under the site root holding posts of this type
  pub fn root(self) -> &'static str {
    match self {
      PostType::Text => "_posts",
      PostType::Notebook => "_notebooks",
    }
  }

  pub fn extension(self) -> &'static str {
    match self {
      PostType::Text => "md",
      PostType::Notebook => "ipynb",
    }
  }

  /// category appended to every post of this type
  pub fn tag(self) -> &'static str {
    match self {
      PostType::Text => "markdown",
      PostType::Notebook => "jupyter",
    }
  }
}

impl FromStr for PostType {
  type Err = ScaffoldError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "markdown" => Ok(PostType::Text),
      "jupyter" => Ok(PostType::Notebook),
      other => Err(ScaffoldError::InvalidType(other.to_string())),
    }
  }
}

impl fmt::Display for PostType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.tag()) }
}

/// Everything needed to scaffold one post, fixed once the arguments are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRequest {
  pub post_type:   PostType,
  pub title:       String,
  pub description: String,
  pub categories:  Vec<String>,
  pub hide:        bool,
}

impl PostRequest {
  /// Lowercase, dash-separated name for the post's directory and file, transliterated to ascii.
  pub fn slug(&self) -> String { slug::slugify(&self.title) }

  /// The caller's categories followed by the type tag.
  pub fn categories(&self) -> Vec<String> {
    self
      .categories
      .iter()
      .cloned()
      .chain(std::iter::once(self.post_type.tag().to_string()))
      .collect()
  }

  /// Front matter fields, one `key: value` per line, in the order the blog theme expects.
  ///
  /// Hidden posts get `hide: true` and `search_exclude: false` appended.
  pub fn metadata_lines(&self) -> Vec<String> {
    let mut lines = vec![
      "toc: true".to_string(),
      "layout: post".to_string(),
      format!("description: {}", self.description),
      format!("categories: [{}]", self.categories().join(",")),
      format!("title: {}", self.title),
    ];
    if self.hide {
      lines.push("hide: true".to_string());
      lines.push("search_exclude: false".to_string());
    }
    lines
  }

  /// `<site>/<root>/<slug>`
  pub fn output_dir(&self, site: &Path) -> PathBuf {
    site.join(self.post_type.root()).join(self.slug())
  }

  /// `<date>-<slug>.<ext>`
  pub fn file_name(&self, date: NaiveDate) -> String {
    format!("{}-{}.{}", date.format(DATE_FORMAT), self.slug(), self.post_type.extension())
  }

  pub fn output_path(&self, site: &Path, date: NaiveDate) -> PathBuf {
    self.output_dir(site).join(self.file_name(date))
  }
}
