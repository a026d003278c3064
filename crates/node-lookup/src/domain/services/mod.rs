//! Domain Services - Pure functions over the XOR metric
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).

mod distance;

pub use distance::xor_distance;

#[cfg(test)]
mod tests;
