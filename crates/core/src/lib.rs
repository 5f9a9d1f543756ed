//! Shopdesk Core - Shared types library.
//!
//! This crate provides common types used across all Shopdesk components:
//! - `server` - HTTP API for users, products, and orders
//! - `cli` - Command-line tools for migrations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. Database encoding for ids is opt-in via the `sqlite`
//! feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe entity ids

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
