//! End to end runs of the `new-post` binary against a scratch site

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn new_post(site: &Path) -> Command {
  let mut cmd = Command::cargo_bin("new-post").unwrap();
  cmd.current_dir(site).env_remove("RUST_LOG");
  cmd
}

/// the one file the tool wrote under `dir`
fn only_file(dir: &Path) -> std::path::PathBuf {
  let entries: Vec<_> = fs::read_dir(dir).unwrap().map(|e| e.unwrap().path()).collect();
  assert_eq!(entries.len(), 1, "expected a single post in {dir:?}, got {entries:?}");
  entries.into_iter().next().unwrap()
}

#[test]
fn creates_markdown_post() {
  let site = TempDir::new().unwrap();
  new_post(site.path())
    .args(["markdown", "Hello World", "a first post", "-c", "a", "b"])
    .assert()
    .success()
    .stdout(predicate::str::contains("makedirs: creating ./_posts/hello-world"))
    .stdout(predicate::str::contains("write: ./_posts/hello-world/"));

  let path = only_file(&site.path().join("_posts/hello-world"));
  let name = path.file_name().unwrap().to_str().unwrap();
  assert!(name.ends_with("-hello-world.md"), "{name}");
  // YYYY-MM-DD prefix
  assert_eq!(name.len(), "YYYY-MM-DD-hello-world.md".len());
  assert_eq!(
    fs::read_to_string(path).unwrap(),
    "---\ntoc: true\nlayout: post\ndescription: a first post\ncategories: [a,b,markdown]\ntitle: \
     Hello World\n---\n"
  );
}

#[test]
fn creates_notebook_without_categories() {
  let site = TempDir::new().unwrap();
  new_post(site.path()).args(["jupyter", "Week 1 Notes", "setup", "--hide"]).assert().success();

  let path = only_file(&site.path().join("_notebooks/week-1-notes"));
  assert_eq!(path.extension().unwrap(), "ipynb");
  let content = fs::read_to_string(path).unwrap();
  assert!(content.contains("- categories: [jupyter] \\n"));
  assert!(content.contains("- hide: true \\n"));
}

#[test]
fn hide_accepts_a_value_and_accented_titles_are_transliterated() {
  let site = TempDir::new().unwrap();
  new_post(site.path()).args(["markdown", "Café Über", "desc", "--hide", "1"]).assert().success();

  let content = fs::read_to_string(only_file(&site.path().join("_posts/cafe-uber"))).unwrap();
  assert!(content.ends_with("hide: true\nsearch_exclude: false\n---\n"));
}

#[test]
fn site_flag_moves_the_output() {
  let cwd = TempDir::new().unwrap();
  let site = TempDir::new().unwrap();
  new_post(cwd.path())
    .args(["markdown", "Elsewhere", "desc", "--site"])
    .arg(site.path())
    .assert()
    .success();

  only_file(&site.path().join("_posts/elsewhere"));
  assert!(!cwd.path().join("_posts").exists());
}

#[test]
fn second_run_refuses_to_overwrite() {
  let site = TempDir::new().unwrap();
  new_post(site.path()).args(["markdown", "Hello World", "first"]).assert().success();
  new_post(site.path())
    .args(["markdown", "Hello World", "second"])
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("post already exists"))
    .stdout(predicate::str::contains("write:").not());

  let content = fs::read_to_string(only_file(&site.path().join("_posts/hello-world"))).unwrap();
  assert!(content.contains("description: first"));
}

#[test]
fn unknown_type_fails_before_touching_disk() {
  let site = TempDir::new().unwrap();
  new_post(site.path())
    .args(["html", "Hello World", "desc"])
    .assert()
    .failure()
    .code(2)
    .stderr(predicate::str::contains("unidentified post type: html"));

  assert!(fs::read_dir(site.path()).unwrap().next().is_none());
}

#[test]
fn missing_arguments_fail() {
  let site = TempDir::new().unwrap();
  new_post(site.path()).arg("markdown").assert().failure().code(2);
}

#[test]
fn help_lists_options() {
  let site = TempDir::new().unwrap();
  new_post(site.path())
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("--categories").and(predicate::str::contains("--hide")));
}
