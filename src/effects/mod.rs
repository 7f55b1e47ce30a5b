//! The effect pipeline: compile free text once, execute typed ops.
//!
//! ## Structure
//!
//! - `op` - the typed operation vocabulary (`EffectOp`, `CompiledEffect`)
//! - `compiler` - text to ops, run at catalogue load
//! - `resolver` - ops to state mutation, run on every play

pub mod compiler;
pub mod op;
pub mod resolver;

pub use compiler::compile;
pub use op::{CompiledEffect, ConditionalKind, EffectOp};
pub use resolver::{resolve, Resolution};
