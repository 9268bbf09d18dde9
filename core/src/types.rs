//! Shared primitive types used across the whole generator.

/// Numeric client identifier. Assigned contiguously starting at 1.
pub type ClientId = u32;

/// Master seed controlling an entire generation run.
pub type Seed = u64;
