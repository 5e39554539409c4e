use numscript::{
    ast::{Arity, Expr, OpKind, Statement},
    error::{Error, LexError, RuntimeError, SemanticError, SyntaxError},
    pipeline::{
        codegen::{CodeGenerator, Emitter},
        lexer::{Token, tokenize},
        parser::{parse, parse_tree},
        semantic::SemanticAnalyzer,
        value::Number,
    },
    run,
};

fn program(src: &str) -> Vec<Statement> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("lexing failed: {e}"));
    parse(&tokens).unwrap_or_else(|e| panic!("parsing failed: {e}"))
}

fn syntax_error(src: &str) -> SyntaxError {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("lexing failed: {e}"));
    parse(&tokens).expect_err("parsing succeeded but was expected to fail")
}

fn number(value: i64) -> Expr {
    Expr::Number { value: Number::Integer(value),
                   line:  1, }
}

#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
}

impl Emitter for Recorder {
    fn emit_tac(&mut self, line: String) {
        self.lines.push(format!("tac {line}"));
    }

    fn emit_asm(&mut self, line: String) {
        self.lines.push(format!("asm {line}"));
    }
}

#[test]
fn lexer_reports_line_of_unexpected_character() {
    let err = tokenize("VAR x = 1\nPRINT x @").unwrap_err();

    assert_eq!(err,
               LexError::UnexpectedCharacter { character: "@".to_string(),
                                               line:      2, });
    assert_eq!(err.to_string(), "Error on line 2: Unexpected character: '@'.");
}

#[test]
fn lexing_fails_before_any_parsing() {
    // The statement is also a syntax error, but lexing fails first.
    assert!(matches!(run("= = @"), Err(Error::Lex(_))));
}

#[test]
fn lexer_distinguishes_integers_and_reals() {
    let tokens = tokenize("1 -2 3.25 -0.5").unwrap();
    let values: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();

    assert_eq!(values,
               vec![Token::Number(Number::Integer(1)),
                    Token::Number(Number::Integer(-2)),
                    Token::Number(Number::Real(3.25)),
                    Token::Number(Number::Real(-0.5)),]);
}

#[test]
fn lexer_reads_keywords_and_identifiers() {
    let tokens = tokenize("VAR SINE = SIN x_1").unwrap();
    let kinds: Vec<&str> = tokens.iter().map(|(token, _)| token.kind()).collect();

    assert_eq!(kinds, ["VAR", "ID", "ASSIGN", "SIN", "ID"]);
    assert_eq!(tokens[1].0.to_string(), "(ID, SINE)");
    assert_eq!(tokens[3].0.to_string(), "(SIN, SIN)");
}

#[test]
fn lexer_keeps_oversized_integers_as_reals() {
    let tokens = tokenize("99999999999999999999").unwrap();

    assert_eq!(tokens[0].0, Token::Number(Number::Real(1e20)));
}

#[test]
fn parser_builds_statements_in_order() {
    let ast = program("VAR x = 1\nx = ADD x 2 3\nPRINT x");

    assert_eq!(ast.len(), 3);
    assert!(matches!(&ast[0], Statement::Declare { name, line: 1, .. } if name == "x"));
    assert!(matches!(&ast[1],
                     Statement::Assign { expr: Expr::Operation { op: OpKind::Add, operands, .. }, .. }
                     if operands.len() == 3));
    assert!(matches!(&ast[2], Statement::Print { expr: Expr::Identifier { .. }, line: 3 }));
}

#[test]
fn parser_rejects_bad_statement_start() {
    assert!(matches!(syntax_error("5"), SyntaxError::UnexpectedToken { line: 1, .. }));
    assert!(matches!(syntax_error("= 5"), SyntaxError::UnexpectedToken { .. }));
}

#[test]
fn parser_requires_identifier_after_var() {
    assert!(matches!(syntax_error("VAR 5 = 1"), SyntaxError::ExpectedIdentifier { .. }));
}

#[test]
fn parser_requires_assign() {
    let err = syntax_error("VAR x 5");

    assert_eq!(err,
               SyntaxError::ExpectedAssign { name:  "x".to_string(),
                                             found: "(NUMBER, 5)".to_string(),
                                             line:  1, });
    assert!(matches!(syntax_error("x PRINT"), SyntaxError::ExpectedAssign { .. }));
}

#[test]
fn parser_rejects_non_term_operand() {
    assert!(matches!(syntax_error("PRINT VAR"), SyntaxError::UnexpectedTokenInTerm { .. }));
    assert!(matches!(syntax_error("VAR x = ="), SyntaxError::UnexpectedTokenInTerm { .. }));
}

#[test]
fn parser_reports_truncated_input() {
    assert!(matches!(syntax_error("VAR"), SyntaxError::UnexpectedEndOfInput { line: 1 }));
    assert!(matches!(syntax_error("VAR x ="), SyntaxError::UnexpectedEndOfInput { .. }));
    assert!(matches!(syntax_error("PRINT"), SyntaxError::UnexpectedEndOfInput { .. }));
}

#[test]
fn parser_checks_operator_arity() {
    assert_eq!(syntax_error("PRINT POW 2"),
               SyntaxError::ArityViolation { op:       OpKind::Pow,
                                             expected: Arity::Exact(2),
                                             found:    1,
                                             line:     1, });
    assert_eq!(syntax_error("PRINT MOD 2"),
               SyntaxError::ArityViolation { op:       OpKind::Mod,
                                             expected: Arity::AtLeast(2),
                                             found:    1,
                                             line:     1, });
    assert!(matches!(syntax_error("PRINT POW 2 3 4"), SyntaxError::ArityViolation { found: 3, .. }));
    assert!(matches!(syntax_error("PRINT COS"), SyntaxError::ArityViolation { found: 0, .. }));
    assert!(matches!(syntax_error("PRINT TAN 1 2"), SyntaxError::ArityViolation { found: 2, .. }));
}

#[test]
fn operations_consume_following_identifiers() {
    // `y` is taken as a third operand, leaving `=` to start a statement.
    assert!(matches!(syntax_error("VAR y = 0\nVAR x = ADD 1 2\ny = 3"),
                     SyntaxError::UnexpectedToken { line: 3, .. }));
}

#[test]
fn semantic_rejects_redeclaration_before_generation() {
    let err = run("VAR x = 1\nVAR x = 2\nPRINT undefined").unwrap_err();

    assert_eq!(err,
               Error::Semantic(SemanticError::AlreadyDeclared { name:       "x".to_string(),
                                                                line:       2,
                                                                first_line: 1, }));
}

#[test]
fn semantic_rejects_assignment_to_undeclared() {
    let err = run("x = 5").unwrap_err();

    assert_eq!(err,
               Error::Semantic(SemanticError::NotDeclared { name: "x".to_string(),
                                                            line: 1, }));
    assert_eq!(err.to_string(), "Error on line 1: Variable 'x' not declared.");
}

#[test]
fn semantic_does_not_inspect_expressions() {
    let ast = program("PRINT y\nVAR z = ADD y 1");
    let mut analyzer = SemanticAnalyzer::new();

    assert!(analyzer.analyze(&ast).is_ok());
    assert!(analyzer.is_declared("z"));
    assert!(!analyzer.is_declared("y"));

    let err = CodeGenerator::new().execute(&ast).unwrap_err();
    assert_eq!(err,
               RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                 line: 1, });
}

#[test]
fn log_of_non_positive_fails_at_generation() {
    let ast = program("PRINT LOG -1 10");

    assert!(SemanticAnalyzer::new().analyze(&ast).is_ok());
    assert!(matches!(CodeGenerator::new().execute(&ast),
                     Err(RuntimeError::InvalidOperand { op: OpKind::Log, .. })));
    assert!(matches!(run("PRINT LOG 0 10"), Err(Error::Runtime(_))));
}

#[test]
fn log_uses_only_its_first_operand() {
    // The second operand is never evaluated, so an undefined name is fine.
    assert_eq!(run("PRINT LOG 100 nothing").unwrap().output, "2.0");

    let ast = vec![Statement::Print { expr: Expr::Operation { op:       OpKind::Log,
                                                              operands: vec![number(100)],
                                                              line:     1, },
                                      line: 1, }];
    assert_eq!(CodeGenerator::new().execute(&ast).unwrap(), "2.0");
}

#[test]
fn sine_takes_degrees() {
    let mut generator = CodeGenerator::new();
    let value = generator.evaluate(&Expr::Operation { op:       OpKind::Sin,
                                                      operands: vec![number(90)],
                                                      line:     1, })
                         .unwrap();

    let Number::Real(sine) = value else {
        panic!("SIN produced {value:?}");
    };
    assert!((sine - 1.0).abs() < 1e-12);
    assert_eq!(generator.get_tac(), "T1 = SIN(90)");
    assert_eq!(generator.get_assembly(), "SIN T1, 90");
}

#[test]
fn groups_evaluate_transparently() {
    let mut generator = CodeGenerator::new();
    let grouped = Expr::Group { expr: Box::new(number(4)),
                                line: 1, };

    assert_eq!(generator.evaluate(&grouped).unwrap(), Number::Integer(4));
    assert_eq!(generator.get_tac(), "");
}

#[test]
fn empty_operand_lists_are_reported() {
    let mut generator = CodeGenerator::new();
    let empty = Expr::Operation { op:       OpKind::Add,
                                  operands: Vec::new(),
                                  line:     4, };

    assert_eq!(generator.evaluate(&empty).unwrap_err(),
               RuntimeError::MissingOperand { op:   OpKind::Add,
                                              line: 4, });
}

#[test]
fn mod_folds_like_other_operators() {
    let result = run("PRINT MOD 7 3").unwrap();

    assert_eq!(result.output, "1");
    assert_eq!(result.tac, "T1 = T1 % 3\nT2 = 1");
    assert_eq!(result.assembly, "MOD T1, T1, 3\nMOV T2, 1\nOUT T2");
}

#[test]
fn listings_follow_statement_order() {
    let result = run("VAR a = 2\nVAR b = POW a 3\nPRINT b\nb = 1\nPRINT COS 60").unwrap();

    assert_eq!(result.tac,
               ["a = 2", "T1 = T1 ^ 3", "b = 8", "T2 = 8", "b = 1", "T3 = COS(60)", "T4 = 0.5000000000000001"].join("\n"));
    assert_eq!(result.assembly,
               ["MOV a, 2",
                "POW T1, T1, 3",
                "MOV b, 8",
                "MOV T2, 8",
                "OUT T2",
                "MOV b, 1",
                "COS T3, 60",
                "MOV T4, 0.5000000000000001",
                "OUT T4"].join("\n"));
}

#[test]
fn assignments_overwrite_the_environment() {
    let ast = program("VAR a = 1\na = 2.5");
    let mut generator = CodeGenerator::new();

    generator.execute(&ast).unwrap();
    assert_eq!(generator.variable("a"), Some(Number::Real(2.5)));
    assert_eq!(generator.variable("b"), None);
}

#[test]
fn custom_emitter_sees_interleaved_lines() {
    let ast = program("PRINT ADD 1 2");
    let mut recorder = Recorder::default();

    let output = CodeGenerator::with_emitter(&mut recorder).execute(&ast).unwrap();

    assert_eq!(output, "3");
    assert_eq!(recorder.lines,
               ["tac T1 = T1 + 2", "asm ADD T1, T1, 2", "tac T2 = 3", "asm MOV T2, 3", "asm OUT T2"]);

    let mut generator = CodeGenerator::with_emitter(Recorder::default());
    generator.execute(&ast).unwrap();
    assert_eq!(generator.into_emitter().lines, recorder.lines);
}

#[test]
fn overflowing_fold_lists_the_real_result() {
    let result = run("PRINT MUL 10000000000 10000000000").unwrap();

    assert_eq!(result.output, "1e+20");
    assert_eq!(result.tac, "T1 = T1 * 10000000000\nT2 = 1e+20");
    assert_eq!(result.assembly, "MUL T1, T1, 10000000000\nMOV T2, 1e+20\nOUT T2");
}

#[test]
fn integer_arithmetic_falls_back_to_reals() {
    let max = Number::Integer(i64::MAX);

    assert_eq!(max.apply(OpKind::Mul, Number::Integer(2), 1).unwrap(),
               Number::Real(18_446_744_073_709_551_616.0));
    assert_eq!(Number::Integer(2).apply(OpKind::Pow, Number::Integer(-1), 1).unwrap(),
               Number::Real(0.5));
    assert_eq!(Number::Integer(-1).apply(OpKind::Pow, Number::Integer(5_000_000_001), 1)
                                  .unwrap(),
               Number::Integer(-1));
    assert_eq!(Number::Integer(0).apply(OpKind::Pow, Number::Integer(-1), 3).unwrap_err(),
               RuntimeError::DivisionByZero { line: 3 });
    assert_eq!(Number::Integer(9_007_199_254_740_993).as_real(), 9_007_199_254_740_992.0);
}

#[test]
fn apply_rejects_function_operators() {
    for op in [OpKind::Log, OpKind::Sin, OpKind::Cos, OpKind::Tan] {
        let err = Number::Integer(1).apply(op, Number::Integer(2), 4).unwrap_err();

        assert_eq!(err,
                   RuntimeError::InvalidOperand { op,
                                                  details: "not a folding operator".to_string(),
                                                  line: 4 });
    }
}

#[test]
fn separate_runs_share_no_state() {
    let first = run("VAR x = 1\nPRINT ADD x 1").unwrap();
    let second = run("VAR x = 1\nPRINT ADD x 1").unwrap();

    assert_eq!(first, second);
    assert!(second.tac.starts_with("x = 1\nT1 ="));
}

#[test]
fn parse_tree_flattens_operand_lists() {
    let ast = program("VAR x = 1\nPRINT SUB x 2");
    let tree = parse_tree(&ast);

    let labels: Vec<&str> = tree.nodes().iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels,
               ["root", "DECLARE", "x", "NUMBER", "1", "PRINT", "SUB", "ID", "x", "NUMBER", "2"]);

    let sub = tree.nodes().iter().find(|n| n.label == "SUB").unwrap();
    let operands: Vec<&str> = tree.children(sub.id).map(|n| n.label.as_str()).collect();
    assert_eq!(operands, ["ID", "NUMBER"]);

    let roots: Vec<usize> = tree.children(0).map(|n| n.id).collect();
    assert_eq!(roots, [1, 5]);
    assert_eq!(tree.edges().count(), tree.nodes().len() - 1);
}

#[test]
fn parse_tree_renders_dot() {
    let dot = parse_tree(&program("VAR name = 3.5")).to_dot();

    assert_eq!(dot,
               "digraph ParseTree {\n    n0 [label=\"root\"];\n    n1 [label=\"DECLARE\"];\n    \
                n2 [label=\"name\"];\n    n3 [label=\"NUMBER\"];\n    n4 [label=\"3.5\"];\n    \
                n0 -> n1;\n    n1 -> n2;\n    n1 -> n3;\n    n3 -> n4;\n}\n");
}

#[test]
fn values_render_as_integers_or_reals() {
    assert_eq!(Number::Integer(6).to_string(), "6");
    assert_eq!(Number::Real(6.0).to_string(), "6.0");
    assert_eq!(Number::Real(0.1).to_string(), "0.1");
    assert_eq!(Number::Real(1e20).to_string(), "1e+20");
    assert_eq!(Number::Real(1.5e-5).to_string(), "1.5e-05");
    assert_eq!(Number::Real(f64::INFINITY).to_string(), "inf");
}

#[test]
fn errors_expose_their_stage() {
    use std::error::Error as _;

    let err = run("PRINT DIV 1 0").unwrap_err();

    assert_eq!(err, Error::Runtime(RuntimeError::DivisionByZero { line: 1 }));
    assert!(err.source().is_some());
    assert_eq!(err.to_string(), "Error on line 1: Division by zero.");
}
