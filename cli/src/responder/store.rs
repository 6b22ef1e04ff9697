//! # Deskbot Response Store
//!
//! File: cli/src/responder/store.rs
//!
//! ## Overview
//!
//! This module implements `ResponseStore`, the owner of the two data
//! structures the responder selects from: the keyword→response mapping and
//! the default-response pool. Both are parsed once from plain-text resources
//! at construction time and never mutated afterward.
//!
//! ## Architecture
//!
//! Two small line-oriented parsers share one grammar idea: a *block* is a run
//! of lines committed by an exactly-empty line, with the lines concatenated
//! directly (no separator inserted) into one response body.
//!
//! - **Mapping resource** (`mapped.txt`): the first line of each block is the
//!   keyword; the remaining lines accumulate into the response body; the
//!   blank line commits (keyword → body) into the map.
//! - **Default resource** (`default.txt`): every block is just a body; the
//!   blank line commits it as one pool entry.
//!
//! Construction never fails. A resource that cannot be opened or read is
//! reported on the warning channel and contributes nothing; an empty pool is
//! topped up with one synthetic fallback entry so the selector always has
//! something to draw from.
//!
//! ## End-of-resource handling
//!
//! The two parsers deliberately differ at end-of-resource, matching the
//! reference data format this store was built against:
//!
//! - A mapping block left unterminated at end-of-resource is **committed**
//!   with whatever body accumulated. The reference implementation crashed
//!   here (it read past end-of-file inside the inner loop); that was a
//!   defect, and this parser fixes it rather than reproducing it.
//! - A default block left unterminated at end-of-resource is **dropped**:
//!   only blank-line-terminated blocks become pool entries. This matches the
//!   reference exactly and is relied on by existing data files.
//!
use crate::core::error::DeskbotError;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use tracing::{debug, warn};

/// Synthetic pool entry inserted when the default resource yields nothing,
/// keeping the non-empty-pool invariant that `Responder::generate` relies on.
pub const FALLBACK_RESPONSE: &str = "Could you elaborate on that?";

/// Immutable-after-load container for the keyword mapping and default pool.
#[derive(Debug, Clone)]
pub struct ResponseStore {
    /// Maps key words to canned responses. Unordered; lookup, not iteration
    /// order, is load-bearing.
    response_map: HashMap<String, String>,
    /// Default responses to use when no input word is recognized.
    /// Invariant: never empty after construction.
    default_responses: Vec<String>,
}

impl ResponseStore {
    /// # Load Response Store (`load`)
    ///
    /// Builds a store by parsing the two backing files. Infallible by
    /// contract: open/read failures are reported via `tracing::warn!` and
    /// the affected resource simply contributes nothing (an unreadable
    /// mapping file means no keyword ever matches; an unreadable default
    /// file means the pool holds only the synthetic fallback).
    ///
    /// ## Arguments
    ///
    /// * `mapped_path` - Path of the keyword→response mapping resource.
    /// * `default_path` - Path of the default-response pool resource.
    pub fn load(mapped_path: &Path, default_path: &Path) -> Self {
        let response_map = match File::open(mapped_path) {
            Ok(file) => parse_mapping(BufReader::new(file)),
            Err(source) => {
                warn!(
                    "{}",
                    DeskbotError::ResourceUnavailable {
                        path: mapped_path.to_path_buf(),
                        source,
                    }
                );
                HashMap::new()
            }
        };
        let default_responses = match File::open(default_path) {
            Ok(file) => parse_defaults(BufReader::new(file)),
            Err(source) => {
                warn!(
                    "{}",
                    DeskbotError::ResourceUnavailable {
                        path: default_path.to_path_buf(),
                        source,
                    }
                );
                Vec::new()
            }
        };
        // Diagnostic dump of every parsed pair, once, after the build.
        for (keyword, response) in &response_map {
            debug!("mapped response: {}: {}", keyword, response);
        }
        Self::from_parts(response_map, default_responses)
    }

    /// Assembles a store from already-parsed parts, enforcing the
    /// non-empty-pool invariant. Used by `load` and directly by tests that
    /// want a store without touching the filesystem.
    pub fn from_parts(
        response_map: HashMap<String, String>,
        mut default_responses: Vec<String>,
    ) -> Self {
        // Make sure we have at least one response to fall back on.
        if default_responses.is_empty() {
            default_responses.push(FALLBACK_RESPONSE.to_string());
        }
        ResponseStore {
            response_map,
            default_responses,
        }
    }

    /// Looks up the canned response for a single input word. Matching is
    /// exact and case-sensitive; words are opaque tokens to the store.
    pub fn response_for(&self, word: &str) -> Option<&str> {
        self.response_map.get(word).map(String::as_str)
    }

    /// Number of mapped keywords (possibly zero on a degraded load).
    pub fn mapped_count(&self) -> usize {
        self.response_map.len()
    }

    /// The default-response pool. Guaranteed non-empty.
    pub fn default_responses(&self) -> &[String] {
        &self.default_responses
    }
}

/// Reads the next line, downgrading a mid-stream read failure (including
/// invalid-encoding data) to a warning plus end-of-resource. Everything the
/// parsers committed before the failure survives.
fn next_line<R: BufRead>(lines: &mut Lines<R>) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(e) => {
            warn!("Stopped reading response resource mid-stream: {}", e);
            None
        }
    }
}

/// # Parse Mapping Resource (`parse_mapping`)
///
/// Parses the keyword→response format: one keyword line, then response lines
/// concatenated directly until a blank line commits the block. A duplicate
/// keyword overwrites the earlier entry, last block wins.
///
/// An unterminated final block is committed at end-of-resource (see the
/// module docs — the reference crashed here; this is a deliberate fix).
pub fn parse_mapping(reader: impl BufRead) -> HashMap<String, String> {
    let mut response_map = HashMap::new();
    let mut lines = reader.lines();
    while let Some(keyword) = next_line(&mut lines) {
        let mut response = String::new();
        loop {
            match next_line(&mut lines) {
                Some(line) if line.is_empty() => {
                    // Blank line terminates the block and commits it.
                    response_map.insert(keyword, response);
                    break;
                }
                Some(line) => response.push_str(&line),
                None => {
                    // End-of-resource mid-block: commit what accumulated.
                    response_map.insert(keyword, response);
                    return response_map;
                }
            }
        }
    }
    response_map
}

/// # Parse Default Resource (`parse_defaults`)
///
/// Parses the default-pool format: consecutive non-blank lines concatenate
/// directly into one body, committed by a blank line. Two blank lines in a
/// row therefore commit an empty body — faithful to the reference format.
///
/// An unterminated final block is dropped, also faithful to the reference;
/// the caller inserts [`FALLBACK_RESPONSE`] when nothing parsed at all.
pub fn parse_defaults(reader: impl BufRead) -> Vec<String> {
    let mut entries = Vec::new();
    let mut response = String::new();
    let mut lines = reader.lines();
    while let Some(line) = next_line(&mut lines) {
        if line.is_empty() {
            entries.push(response);
            response = String::new();
        } else {
            response.push_str(&line);
        }
    }
    // Whatever is left in `response` never got its terminating blank line
    // and is intentionally not flushed.
    entries
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_parse_mapping_one_entry_per_block() {
        let input = "slow\nTry restarting.\n\ncrash\nTry\nagain\n\n";
        let map = parse_mapping(Cursor::new(input));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("slow").map(String::as_str), Some("Try restarting."));
        // Multi-line bodies are concatenated with no inserted separator.
        assert_eq!(map.get("crash").map(String::as_str), Some("Tryagain"));
    }

    #[test]
    fn test_parse_mapping_unterminated_final_block_is_committed() {
        // No trailing blank line: the reference implementation crashed on
        // this shape; the block must be committed instead.
        let input = "slow\nTry restarting.\n\ncrash\nTry\nagain";
        let map = parse_mapping(Cursor::new(input));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("crash").map(String::as_str), Some("Tryagain"));
    }

    #[test]
    fn test_parse_mapping_trailing_lone_keyword() {
        // A keyword line right at end-of-resource commits with an empty body
        // rather than crashing.
        let input = "slow\nTry restarting.\n\ncrash";
        let map = parse_mapping(Cursor::new(input));
        assert_eq!(map.get("crash").map(String::as_str), Some(""));
    }

    #[test]
    fn test_parse_mapping_empty_resource() {
        let map = parse_mapping(Cursor::new(""));
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_mapping_is_deterministic() {
        let input = "slow\nTry restarting.\n\ncrash\nTry\nagain\n\nbug\nFile a ticket.\n\n";
        let first = parse_mapping(Cursor::new(input));
        let second = parse_mapping(Cursor::new(input));
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_defaults_blank_line_commits() {
        let input = "That sounds odd.\n\nCould you say\nthat again?\n\n";
        let entries = parse_defaults(Cursor::new(input));
        assert_eq!(
            entries,
            vec![
                "That sounds odd.".to_string(),
                "Could you saythat again?".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_defaults_unterminated_final_block_is_dropped() {
        let input = "That sounds odd.\n\nNo terminating blank line here";
        let entries = parse_defaults(Cursor::new(input));
        assert_eq!(entries, vec!["That sounds odd.".to_string()]);
    }

    #[test]
    fn test_parse_defaults_consecutive_blank_lines_commit_empty_bodies() {
        let input = "\n\nReal entry.\n\n";
        let entries = parse_defaults(Cursor::new(input));
        assert_eq!(
            entries,
            vec!["".to_string(), "".to_string(), "Real entry.".to_string()]
        );
    }

    #[test]
    fn test_from_parts_inserts_fallback_when_pool_empty() {
        let store = ResponseStore::from_parts(HashMap::new(), Vec::new());
        assert_eq!(store.default_responses(), [FALLBACK_RESPONSE]);
    }

    #[test]
    fn test_from_parts_keeps_parsed_pool() {
        let store =
            ResponseStore::from_parts(HashMap::new(), vec!["Hmm.".to_string()]);
        assert_eq!(store.default_responses(), ["Hmm."]);
    }

    #[test]
    fn test_load_with_missing_files_degrades() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = ResponseStore::load(
            &dir.path().join("no-mapped.txt"),
            &dir.path().join("no-default.txt"),
        );
        // No mapping, and exactly one synthetic pool entry.
        assert_eq!(store.mapped_count(), 0);
        assert_eq!(store.default_responses(), [FALLBACK_RESPONSE]);
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mapped = dir.path().join("mapped.txt");
        let defaults = dir.path().join("default.txt");
        fs::write(&mapped, "crash\nTry\nagain\n\n").expect("write mapped");
        fs::write(&defaults, "That sounds odd.\n\n").expect("write defaults");
        let store = ResponseStore::load(&mapped, &defaults);
        assert_eq!(store.response_for("crash"), Some("Tryagain"));
        assert_eq!(store.response_for("Crash"), None); // case-sensitive
        assert_eq!(store.default_responses(), ["That sounds odd."]);
    }
}
