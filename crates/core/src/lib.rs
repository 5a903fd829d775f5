//! Vetaris Core - Shared types library.
//!
//! This crate provides common types used across all Vetaris components:
//! - `server` - The public API server
//! - `cli` - Command-line tools for schema setup and management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, session tokens,
//!   order statuses, and blog slugs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
