//! # sdvpack Ignore Patterns
//!
//! File: cli/src/core/ignore.rs
//!
//! ## Overview
//!
//! This module compiles the patterns from `IgnoreFiles.sdvextension` and uses
//! them to filter the workspace scan before packing or deploying.
//!
//! ## Pattern Grammar
//!
//! - Literal path segments separated by `/`, compared case-insensitively.
//! - `*` matches any run of characters, **including** `/`. There is no `**`.
//! - A trailing `/` makes the pattern directory-scoped: it matches the
//!   directory itself and everything beneath it.
//! - Without a trailing `/` the whole relative path must match.
//! - Empty or whitespace-only patterns never match.
//!
//! Matching is per entry. A bare `bin` pattern excludes only an entry whose
//! path is exactly `bin`; the scanner reports directories as `bin/`, so to drop
//! a folder and its contents write `bin/`.
//!
//! ## Examples
//!
//! ```rust
//! let list = IgnoreList::from_patterns(["bin/", "*.pdb", "manifest.json.bak"]);
//! let kept = filter_entries(&entries, &list);
//! ```
//!
use crate::common::fs::scan::Entry;
use crate::core::document::{self, IGNORE_DOCUMENT};
use crate::core::error::PackError;
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

/// One compiled exclusion pattern.
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    source: String,
    directory_scoped: bool,
    matcher: Option<Regex>,
}

impl IgnorePattern {
    /// Compiles a single pattern string.
    pub fn compile(pattern: &str) -> Self {
        let directory_scoped = pattern.ends_with('/');
        let body = pattern.strip_suffix('/').unwrap_or(pattern).trim();

        let matcher = if body.is_empty() {
            None
        } else {
            let expanded = body
                .split('*')
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(".*");
            let suffix = if directory_scoped { "(/.*)?" } else { "" };
            RegexBuilder::new(&format!("^{}{}$", expanded, suffix))
                .case_insensitive(true)
                .build()
                .map_err(|e| warn!("Ignoring pattern '{}': {}", pattern, e))
                .ok()
        };

        Self {
            source: pattern.to_string(),
            directory_scoped,
            matcher,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_directory_scoped(&self) -> bool {
        self.directory_scoped
    }

    /// Tests a relative path as reported by the scanner.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.matcher
            .as_ref()
            .is_some_and(|re| re.is_match(relative_path))
    }
}

/// Ordered list of compiled patterns from the ignore document.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    patterns: Vec<IgnorePattern>,
}

/// Result of loading the ignore document. `problem` is set when the document
/// was malformed and an empty list is used instead.
#[derive(Debug)]
pub struct IgnoreLoad {
    pub list: IgnoreList,
    pub problem: Option<PackError>,
}

impl IgnoreList {
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| IgnorePattern::compile(p.as_ref()))
                .collect(),
        }
    }

    /// Builds the list from the ignore document text (`None` when absent).
    pub fn from_document(document_text: Option<&str>) -> IgnoreLoad {
        let Some(text) = document_text else {
            debug!("{} not found, nothing is excluded", IGNORE_DOCUMENT);
            return IgnoreLoad {
                list: IgnoreList::default(),
                problem: None,
            };
        };
        match document::parse_string_list(IGNORE_DOCUMENT, text) {
            Ok(patterns) => {
                debug!("Loaded {} ignore patterns", patterns.len());
                IgnoreLoad {
                    list: IgnoreList::from_patterns(patterns),
                    problem: None,
                }
            }
            Err(e) => {
                warn!("{}", e);
                IgnoreLoad {
                    list: IgnoreList::default(),
                    problem: Some(e),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// First pattern matching the path, if any.
    pub fn first_match(&self, relative_path: &str) -> Option<&IgnorePattern> {
        self.patterns.iter().find(|p| p.matches(relative_path))
    }
}

/// Keeps the entries no pattern matches, in scan order.
pub fn filter_entries(entries: &[Entry], ignore: &IgnoreList) -> Vec<Entry> {
    if ignore.is_empty() {
        return entries.to_vec();
    }
    entries
        .iter()
        .filter(|entry| match ignore.first_match(&entry.relative_path) {
            Some(pattern) => {
                debug!(
                    "Excluding '{}' (matched {}'{}')",
                    entry.relative_path,
                    if pattern.is_directory_scoped() { "directory " } else { "" },
                    pattern.source()
                );
                false
            }
            None => true,
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(path: &str) -> Entry {
        Entry {
            relative_path: path.to_string(),
            is_directory: path.ends_with('/'),
        }
    }

    fn paths(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.relative_path.as_str()).collect()
    }

    #[test]
    fn test_file_pattern_is_exact_and_case_insensitive() {
        let p = IgnorePattern::compile("manifest.json");
        assert!(!p.is_directory_scoped());
        assert!(p.matches("manifest.json"));
        assert!(p.matches("MANIFEST.JSON"));
        assert!(!p.matches("assets/manifest.json"));
        assert!(!p.matches("manifest.json.bak"));
        assert!(!p.matches("manifestXjson"));
    }

    #[test]
    fn test_wildcard_crosses_directories() {
        let p = IgnorePattern::compile("*.pdb");
        assert!(p.matches("MyMod.pdb"));
        assert!(p.matches("bin/Debug/MyMod.PDB"));
        assert!(!p.matches("MyMod.pdb.txt"));
    }

    #[test]
    fn test_directory_scoped_pattern() {
        let p = IgnorePattern::compile("sub/");
        assert!(p.is_directory_scoped());
        assert!(p.matches("sub"));
        assert!(p.matches("sub/"));
        assert!(p.matches("sub/b.txt"));
        assert!(p.matches("SUB/deep/c.txt"));
        assert!(!p.matches("subx"));
        assert!(!p.matches("xsub"));
        assert!(!p.matches("other/sub/b.txt"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let p = IgnorePattern::compile("notes (old)+[1].txt");
        assert!(p.matches("notes (old)+[1].txt"));
        assert!(!p.matches("notes old1.txt"));
        let dot = IgnorePattern::compile("a.b");
        assert!(!dot.matches("axb"));
    }

    #[test]
    fn test_blank_patterns_never_match() {
        for raw in ["", "   ", "/", " /"] {
            let p = IgnorePattern::compile(raw);
            assert!(!p.matches(""));
            assert!(!p.matches("a.txt"));
            assert!(!p.matches("sub/"));
        }
    }

    #[test]
    fn test_bare_directory_name_does_not_propagate() {
        let entries = vec![entry("bin/"), entry("bin/a.dll"), entry("bin")];
        let list = IgnoreList::from_patterns(["bin"]);
        // Only an entry whose own path is exactly "bin" is removed.
        assert_eq!(paths(&filter_entries(&entries, &list)), vec!["bin/", "bin/a.dll"]);
    }

    #[test]
    fn test_empty_ignore_document_keeps_everything() {
        let entries = vec![entry("a.txt"), entry("sub/"), entry("sub/b.txt")];
        let load = IgnoreList::from_document(None);
        assert!(load.problem.is_none());
        assert_eq!(filter_entries(&entries, &load.list), entries);

        let load = IgnoreList::from_document(Some("[]"));
        assert!(load.list.is_empty());
        assert_eq!(filter_entries(&entries, &load.list), entries);
    }

    #[test]
    fn test_directory_pattern_removes_subtree() {
        let entries = vec![entry("a.txt"), entry("sub/"), entry("sub/b.txt")];
        let load = IgnoreList::from_document(Some("[\"sub/\"] // build output"));
        assert_eq!(paths(&filter_entries(&entries, &load.list)), vec!["a.txt"]);
    }

    #[test]
    fn test_filter_preserves_order_and_is_idempotent() {
        let entries = vec![
            entry("z.txt"),
            entry("a.pdb"),
            entry("m/"),
            entry("m/x.txt"),
            entry("b.txt"),
        ];
        let text = Some("[\"*.pdb\", /* keep m */ ]");
        let first = filter_entries(&entries, &IgnoreList::from_document(text).list);
        let second = filter_entries(&entries, &IgnoreList::from_document(text).list);
        assert_eq!(paths(&first), vec!["z.txt", "m/", "m/x.txt", "b.txt"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_ignore_document_excludes_nothing() {
        let load = IgnoreList::from_document(Some("[\"bin/\""));
        assert!(load.list.is_empty());
        assert!(load.problem.unwrap().is_recoverable());
    }
}
