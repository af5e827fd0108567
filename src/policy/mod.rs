//! Eviction policies.

pub mod lru;
