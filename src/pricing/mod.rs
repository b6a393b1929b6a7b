//! Cross-vendor price comparison.
//!
//! # Design Decisions
//! - Substring match, not exact: "Sem" matches "Semen Portland"
//! - Cheapest first; equal prices keep storage order (ascending id)
//! - No rating-weighted ranking; rating is carried for display only

pub mod comparison;

pub use comparison::{like_pattern, rank_offers};
