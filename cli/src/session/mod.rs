//! # Deskbot Support Session
//!
//! File: cli/src/session/mod.rs
//!
//! ## Overview
//!
//! The top-level dialogue loop: print a welcome banner, then repeatedly read
//! a word set from the user and print either the responder's reply or, when
//! the exit word appears, a goodbye message. The loop owns termination — the
//! responder is only ever consulted for turns that are not the exit word,
//! and it can neither fail the turn nor end the session.
//!
//! ## Architecture
//!
//! `SupportSession` is generic over its input source (`BufRead`, via
//! `input::InputReader`) and its output sink (`Write`). Production wires it
//! to locked stdin and stdout; unit tests drive it with in-memory buffers
//! and assert on the captured transcript.
//!
use crate::core::error::Result;
use crate::responder::Responder;
use std::io::{BufRead, Write};

/// Contains the per-turn line reader and tokenizer.
pub mod input;

use input::InputReader;

/// Sentinel token that ends the session. Checked against the tokenized word
/// set *before* the responder sees the turn.
const EXIT_WORD: &str = "bye";

/// Interactive dialogue loop over a responder.
pub struct SupportSession<R: BufRead, W: Write> {
    reader: InputReader<R>,
    responder: Responder,
    output: W,
}

impl<R: BufRead, W: Write> SupportSession<R, W> {
    pub fn new(responder: Responder, source: R, output: W) -> Self {
        SupportSession {
            reader: InputReader::new(source),
            responder,
            output,
        }
    }

    /// # Run Session (`run`)
    ///
    /// Runs the dialogue until the user types the exit word or the input
    /// source is exhausted. Each turn: prompt, read a word set, either
    /// finish (exit word) or print `generate(words)`.
    ///
    /// ## Errors
    ///
    /// Only I/O failures on the input source or output sink propagate;
    /// response generation itself cannot fail.
    pub fn run(&mut self) -> Result<()> {
        self.print_welcome()?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let words = match self.reader.get_input()? {
                Some(words) => words,
                // Input source exhausted (e.g. piped stdin ran out).
                None => break,
            };
            if words.contains(EXIT_WORD) {
                break;
            }
            let response = self.responder.generate(&words);
            writeln!(self.output, "{}", response)?;
        }
        self.print_goodbye()?;
        Ok(())
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Deskbot technical support line.")?;
        writeln!(self.output)?;
        writeln!(self.output, "Please tell us about your problem.")?;
        writeln!(
            self.output,
            "We will assist you with any problem you might have."
        )?;
        writeln!(self.output, "Please type 'bye' to exit our system.")?;
        Ok(())
    }

    fn print_goodbye(&mut self) -> Result<()> {
        writeln!(self.output, "Nice talking to you. Bye...")?;
        Ok(())
    }
}
