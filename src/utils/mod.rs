//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `naming` - Identifier and name-case normalization
//! - `template` - String template rendering

pub mod io;
pub mod naming;
pub mod template;
