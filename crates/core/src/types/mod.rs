//! Core types for Shopdesk.

pub mod id;

pub use id::*;
