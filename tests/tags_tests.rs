//! Integration tests for tags command

#![allow(deprecated)]

use predicates::prelude::*;

mod common;
use common::{init_wiki, stdout_lines, tagcombo_cmd, write_page};

#[test]
fn test_tags_no_tags_found() {
    let temp = init_wiki();

    tagcombo_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tags found"));
}

#[test]
fn test_tags_lists_unique_sorted_tags() {
    let temp = init_wiki();
    write_page(temp.path(), "a.md", "work ns:x");
    write_page(temp.path(), "sub/b.txt", "work alpha");
    write_page(temp.path(), "ignored.png", "hidden");

    let lines = stdout_lines(tagcombo_cmd().current_dir(temp.path()).arg("tags"));
    assert_eq!(lines, vec!["alpha", "ns:x", "work"]);
}
