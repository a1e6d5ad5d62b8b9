//! Serialization of a post's stub content.
use serde::Serialize;

use crate::{
  error::ScaffoldError,
  post::{PostRequest, PostType},
};

/// A notebook document holding a single markdown cell.
#[derive(Serialize, Debug)]
struct Notebook {
  cells:    Vec<Cell>,
  metadata: Metadata,
}

#[derive(Serialize, Debug)]
struct Cell {
  cell_type: &'static str,
  metadata:  Metadata,
  source:    Vec<String>,
}

/// always serialized as `{}`
#[derive(Serialize, Debug, Default)]
struct Metadata {}

/// Render the full file contents for `request`.
pub fn render(request: &PostRequest) -> Result<String, ScaffoldError> {
  let lines = request.metadata_lines();
  match request.post_type {
    PostType::Text => Ok(front_matter(&lines)),
    PostType::Notebook => notebook(request, &lines),
  }
}

/// `---` delimited front matter, one metadata line per line.
pub fn front_matter(lines: &[String]) -> String {
  let mut out = String::from("---\n");
  for line in lines {
    out.push_str(line);
    out.push('\n');
  }
  out.push_str("---\n");
  out
}

/// A notebook whose only cell shows the title, the description, and the metadata as bullets.
pub fn notebook(request: &PostRequest, lines: &[String]) -> Result<String, ScaffoldError> {
  let mut source =
    vec![format!("# {} \n", request.title), format!("> {} \n", request.description), "\n".into()];
  source.extend(lines.iter().map(|line| format!("- {line} \n")));

  let notebook = Notebook {
    cells:    vec![Cell { cell_type: "markdown", metadata: Metadata::default(), source }],
    metadata: Metadata::default(),
  };
  let mut out = serde_json::to_string_pretty(&notebook)?;
  out.push('\n');
  Ok(out)
}
