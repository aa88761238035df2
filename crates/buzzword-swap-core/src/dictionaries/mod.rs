//! Word lists backing the built-in syntax heuristics.
//!
//! Provides closed-class verb and function-word sets for root detection and
//! the abbreviation set used by sentence splitting.

pub mod abbreviations;
pub mod verbs;
