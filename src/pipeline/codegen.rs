/// Core code generation logic and the per-run state.
///
/// Contains the `CodeGenerator` struct, statement execution, expression
/// dispatch and temporary-name allocation.
pub mod core;

/// Emission of three-address code and assembly lines.
///
/// Defines the `Emitter` trait the generator writes through and the default
/// `Listing` buffer.
pub mod emit;

/// Left-to-right folding of n-ary arithmetic operations.
pub mod fold;

/// Single-operand functions: `LOG`, `SIN`, `COS` and `TAN`.
pub mod function;

pub use self::{
    core::{CodeGenerator, EvalResult},
    emit::{Emitter, Listing},
};
