//! Vec3 Core Library
//!
//! A small, layout-stable 3D vector value type for graphics and physics code.
//!
//! ## Features
//! - `#[repr(C)]` storage: named fields, indexing and raw pointers address the same memory
//! - Operator overloads for arithmetic, including commutative `scalar * vector`
//! - Chaining in-place operations (`set`, `zero`, `normalize`, `add_mut`, ...)
//! - Dot and cross products, magnitude and epsilon-guarded normalization
//! - Interop with `nalgebra::Vector3<f32>`, `bytemuck` and `approx`

// Core types
pub mod core_types;

// Re-export core types
pub use core_types::Vec3;
