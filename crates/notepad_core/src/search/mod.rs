//! Note search.
//!
//! # Responsibility
//! - Narrow the note list to entries matching a free-text filter.

pub mod filter;
