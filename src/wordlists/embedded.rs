//! Embedded word list
//!
//! The default categories compiled into the binary.

/// Default word source in the three-line record format
pub const DEFAULT_WORDS: &str = include_str!("../../data/words.txt");
