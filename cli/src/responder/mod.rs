//! # Deskbot Responder
//!
//! File: cli/src/responder/mod.rs
//!
//! ## Overview
//!
//! This module contains the response-generation subsystem — the core of the
//! application. It is split into the two halves described by the design:
//! - `store`: parsing the two plain-text resources into the keyword→response
//!   mapping and the default-response pool (loaded once, immutable after).
//! - `selector`: the per-turn match/fallback decision and the uniform random
//!   draw from the pool.
//!
//! ## Usage
//!
//! ```rust
//! use crate::responder::{Responder, ResponseStore};
//!
//! let store = ResponseStore::load(Path::new("mapped.txt"), Path::new("default.txt"));
//! let mut responder = Responder::new(store);
//! let reply = responder.generate(&words); // always succeeds
//! ```
//!
pub mod selector;
pub mod store;

pub use selector::Responder;
pub use store::ResponseStore;
