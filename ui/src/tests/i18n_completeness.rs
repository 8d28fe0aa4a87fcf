use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "irene-ui.ftl";

/// Message ids defined in a Fluent file. Terms and comments are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of every `t!("...")` call under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn fallback_keys(crate_root: &Path) -> BTreeSet<String> {
    let path = crate_root.join("i18n").join("en-US").join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let defined = fallback_keys(&crate_root);
    assert!(!defined.is_empty(), "no message ids parsed from the fallback file");

    let missing: Vec<String> = referenced_keys(&crate_root.join("src"))
        .into_iter()
        .filter(|key| !defined.contains(key))
        .collect();
    assert!(
        missing.is_empty(),
        "keys used in sources but missing from en-US/{FTL_FILENAME}:\n{}",
        missing.join("\n")
    );
}

#[test]
fn fallback_has_no_unused_keys() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let used = referenced_keys(&crate_root.join("src"));

    let unused: Vec<String> = fallback_keys(&crate_root)
        .into_iter()
        .filter(|key| !used.contains(key))
        .collect();
    assert!(
        unused.is_empty(),
        "en-US/{FTL_FILENAME} defines keys no component uses:\n{}",
        unused.join("\n")
    );
}
