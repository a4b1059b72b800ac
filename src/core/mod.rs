//! Business logic
//!
//! The export pipeline and post-export verification.

pub mod export;
pub mod verification;
