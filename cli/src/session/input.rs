//! # Deskbot Input Reader
//!
//! File: cli/src/session/input.rs
//!
//! ## Overview
//!
//! Reads one user utterance per turn from a line-oriented source and turns
//! it into the word set the responder consumes. The reader owns the
//! normalization policy: input is lowercased and split on whitespace, so the
//! mapping file can hold lowercase keywords and still match however the user
//! capitalizes. The responder itself never case-folds — words leave here as
//! opaque tokens and are matched exactly.
//!
use std::collections::HashSet;
use std::io::{self, BufRead};

/// Turns lines from a `BufRead` source into per-turn word sets.
pub struct InputReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(source: R) -> Self {
        InputReader { source }
    }

    /// # Get Input (`get_input`)
    ///
    /// Reads the next line and tokenizes it: lowercase, split on runs of
    /// whitespace, collect into a set (duplicates collapse by definition).
    ///
    /// ## Returns
    ///
    /// * `Ok(Some(words))` - One utterance's word set (possibly empty, if
    ///   the user just pressed enter).
    /// * `Ok(None)` - End of input; the session should wind down.
    /// * `Err(_)` - The source failed mid-read.
    pub fn get_input(&mut self) -> io::Result<Option<HashSet<String>>> {
        let mut line = String::new();
        if self.source.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let words = line
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Ok(Some(words))
    }
}
