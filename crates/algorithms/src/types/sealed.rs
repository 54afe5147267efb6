//! Sealed marker for types whose trait impls must stay inside this crate

/// Implemented only by crate-owned types
pub trait Sealed {}
