//! Shared utilities for the Kiwi engine.
//!
//! Every stage of the pipeline (tokenizer, tree builder, CSS parser, style
//! resolver) reports recoverable problems through [`warning::warn_once`], so
//! a malformed page produces one line per distinct issue instead of a flood.

pub mod warning;

pub use warning::{clear_warnings, has_warned, warn_once};
