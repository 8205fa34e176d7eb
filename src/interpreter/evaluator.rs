/// Arithmetic operator evaluation.
///
/// Implements the four operators on 32-bit signed integers, with wrapping
/// overflow and a checked division.
pub mod binary;

/// Core evaluation logic and binding-table management.
///
/// Contains the tree walk, the runtime context and error propagation.
pub mod core;
