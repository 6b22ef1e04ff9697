//! # Deskbot Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the Deskbot application: configuration
//! and error management.
//!
//! ## Architecture
//!
//! The core infrastructure consists of two key components:
//! - `config`: Configuration loading and merging (response-file locations)
//! - `error`: Error types and error handling utilities
//!
//! ## Usage
//!
//! Core infrastructure is imported by the responder and session modules:
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{DeskbotError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
