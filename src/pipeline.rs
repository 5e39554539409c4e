/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it starts on. This is the first stage of the
/// pipeline.
///
/// # Responsibilities
/// - Recognizes numbers, keywords, `=` and identifiers.
/// - Skips whitespace while counting lines.
/// - Reports the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead turns the token
/// stream into an ordered list of statements. It also serializes parsed
/// programs into a parse tree for visualization.
///
/// # Responsibilities
/// - Converts tokens into declarations, assignments and print statements.
/// - Discovers operand lists greedily and checks operator arity.
/// - Exposes the parse tree as nodes, edges and DOT text.
pub mod parser;
/// The semantic module checks declarations before code generation.
///
/// # Responsibilities
/// - Rejects redeclaration of a variable.
/// - Rejects assignment to an undeclared variable.
pub mod semantic;
/// The codegen module evaluates programs and emits their listings.
///
/// The code generator walks the AST with a live variable environment,
/// computes every expression and writes a three-address code listing and a
/// parallel pseudo-assembly listing as it goes.
///
/// # Responsibilities
/// - Executes statements in order and collects printed output.
/// - Folds n-ary operations and applies single-operand functions.
/// - Reports runtime errors such as undefined variables or invalid operands.
pub mod codegen;
/// The value module defines the runtime numeric type.
///
/// # Responsibilities
/// - Defines `Number`, an integer or a real.
/// - Implements the arithmetic used by folding operations.
/// - Renders values for output and listings.
pub mod value;
