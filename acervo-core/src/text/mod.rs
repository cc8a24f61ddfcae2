//! Text folding and matching primitives.
//!
//! This module provides the case-insensitive building blocks the engine is
//! made of:
//! - **Fold**: lowercases text (Unicode-aware) into reusable buffers
//! - **Matcher**: substring/prefix/equality checks over pre-folded text

pub mod fold;
pub mod matcher;

pub use fold::{fold, fold_into, fold_query, fold_query_into};
pub use matcher::{contains, starts_with};
