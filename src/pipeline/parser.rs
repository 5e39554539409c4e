/// Core parsing entry points.
///
/// Contains the program loop, expression dispatch and term parsing shared by
/// every statement form.
pub mod core;

/// Prefix operation parsing.
///
/// Collects the operands that follow an operator keyword and checks them
/// against the operator's arity.
pub mod operation;

/// Statement parsing.
///
/// Implements declarations (`VAR x = ...`), assignments (`x = ...`) and
/// print statements (`PRINT ...`).
pub mod statement;

/// Parse tree serialization.
///
/// Turns a parsed program into a labeled node/edge graph for external
/// visualizers, with a Graphviz DOT rendering.
pub mod tree;

pub use self::{
    core::{ParseResult, parse},
    tree::{ParseTree, parse_tree},
};
