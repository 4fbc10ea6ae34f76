use pretty_assertions::assert_eq;
use rstest::rstest;
use simian::{
    ast::{Block, Expr, Identifier, InfixOperator, Literal, PrefixOperator, Program, Statement},
    interpreter::{
        lexer::{Scanner, Token, TokenKind},
        parser::core::Parser,
    },
    parse,
};

fn parse_ok(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected diagnostics for {source:?}: {errors:#?}");
    program
}

fn diagnostics(source: &str) -> Vec<String> {
    parse(source).1.iter().map(ToString::to_string).collect()
}

fn ident(name: &str) -> Expr {
    Expr::Identifier(Identifier::from(name))
}

fn int(value: i64) -> Expr {
    Expr::Literal(Literal::Integer(value))
}

#[rstest]
#[case("-a * b", "((-a) * b)")]
#[case("!-a", "(!(-a))")]
#[case("a + b + c", "((a + b) + c)")]
#[case("a + b - c", "((a + b) - c)")]
#[case("a * b * c", "((a * b) * c)")]
#[case("a * b / c", "((a * b) / c)")]
#[case("a + b / c", "(a + (b / c))")]
#[case("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)")]
#[case("3 + 4; -5 * 5", "(3 + 4)\n((-5) * 5)")]
#[case("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))")]
#[case("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))")]
#[case("a <= b == b >= a", "((a <= b) == (b >= a))")]
#[case("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))")]
#[case("3 > 5 == false", "((3 > 5) == false)")]
#[case("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)")]
#[case("(5 + 5) * 2", "((5 + 5) * 2)")]
#[case("-(5 + 5)", "(-(5 + 5))")]
#[case("!(true == true)", "(!(true == true))")]
#[case("a + add(b * c) + d", "((a + add((b * c))) + d)")]
#[case("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
       "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))")]
#[case("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))")]
#[case("f(1)(2)", "f(1)(2)")]
fn operator_precedence(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(parse_ok(source).to_string(), expected);
}

#[rstest]
#[case("let x = 5;", "let x = 5;")]
#[case("let y = x + 1", "let y = (x + 1);")]
#[case("return 2 * 3;", "return (2 * 3);")]
#[case(r#""hello world""#, r#""hello world""#)]
#[case("null", "null")]
#[case("if (x < y) { x }", "if (x < y) { x }")]
#[case("if (x < y) { x } else { y }", "if (x < y) { x } else { y }")]
#[case("fn() {}", "fn() {}")]
#[case("fn(x, y) { x + y; }", "fn(x, y) { (x + y) }")]
#[case("{ let a = 1; a }", "{ let a = 1; a }")]
#[case("{ 1 }; 2", "{ 1 }\n2")]
fn canonical_rendering(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(parse_ok(source).to_string(), expected);
}

#[test]
fn let_statements_carry_name_and_value() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");

    assert_eq!(program.statements,
               vec![Statement::Let { name:  Identifier::from("x"),
                                     value: int(5), },
                    Statement::Let { name:  Identifier::from("y"),
                                     value: Expr::Literal(Literal::Boolean(true)), },
                    Statement::Let { name:  Identifier::from("foobar"),
                                     value: ident("y"), },]);
}

#[test]
fn function_literal_structure() {
    let program = parse_ok("fn(x, y) { return x - y; }");

    let body = Block { statements: vec![Statement::Return { value: Expr::Infix { operator: InfixOperator::Sub,
                                                                                 left:     Box::new(ident("x")),
                                                                                 right:    Box::new(ident("y")), } }] };
    assert_eq!(program.statements,
               vec![Statement::Expression { expr: Expr::FunctionLiteral { parameters: vec![Identifier::from("x"),
                                                                                           Identifier::from("y")],
                                                                          body } }]);
}

#[test]
fn call_and_prefix_structure() {
    let program = parse_ok("add(-1, !x)");

    let expected = Expr::Call { callee:    Box::new(ident("add")),
                                arguments: vec![Expr::Prefix { operator: PrefixOperator::Negate,
                                                               operand:  Box::new(int(1)), },
                                                Expr::Prefix { operator: PrefixOperator::Not,
                                                               operand:  Box::new(ident("x")), },], };
    assert_eq!(program.statements, vec![Statement::Expression { expr: expected }]);
}

#[test]
fn semicolons_are_optional_after_expressions() {
    assert_eq!(parse_ok("1; 2 3").statements.len(), 3);
    assert_eq!(parse_ok("let a = 1 let b = 2").statements.len(), 2);
}

#[test]
fn comments_are_ignored() {
    let program = parse_ok("// leading\nlet x = 1; // trailing\n// last line");
    assert_eq!(program.to_string(), "let x = 1;");
}

#[rstest]
#[case("let x 5;",
       "Error on line 1, column 7: expected next token to be =, got INT instead.")]
#[case("let = 10;",
       "Error on line 1, column 5: expected next token to be IDENT, got = instead.")]
#[case("let 838383;",
       "Error on line 1, column 5: expected next token to be IDENT, got INT instead.")]
#[case("\n\n  @",
       "Error on line 3, column 3: no prefix parse function for ILLEGAL found.")]
#[case("1 + ;",
       "Error on line 1, column 5: no prefix parse function for ; found.")]
#[case("99999999999999999999",
       "Error on line 1, column 1: could not parse \"99999999999999999999\" as integer.")]
#[case("if (true) { 1",
       "Error on line 1, column 14: expected next token to be }, got EOF instead.")]
#[case("add(1, 2",
       "Error on line 1, column 9: expected next token to be ), got EOF instead.")]
#[case("if true { 1 }",
       "Error on line 1, column 4: expected next token to be (, got TRUE instead.")]
#[case("fn(1) { }",
       "Error on line 1, column 4: expected next token to be IDENT, got INT instead.")]
fn first_diagnostic(#[case] source: &str, #[case] expected: &str) {
    let errors = diagnostics(source);
    assert!(!errors.is_empty(), "no diagnostics for {source:?}");
    assert_eq!(errors[0], expected);
}

#[test]
fn diagnostics_report_the_right_line() {
    assert_eq!(diagnostics("let a = 1;\nlet b 2;"),
               vec!["Error on line 2, column 7: expected next token to be =, got INT instead."]);
}

#[test]
fn parsing_recovers_after_malformed_let() {
    let (program, errors) = parse("let x 5; let y = 10; let = 1; let z = 3;");

    assert_eq!(errors.len(), 2);
    assert_eq!(program.to_string(), "let y = 10;\nlet z = 3;");
}

#[test]
fn diagnostics_accumulate_in_source_order() {
    let (_, errors) = parse("let = 1;\nlet b 2;\nlet 3;");

    let lines: Vec<usize> = errors.iter().map(simian::error::ParseError::line).collect();
    assert_eq!(lines, vec![1, 2, 3]);
}

#[test]
fn unterminated_string_is_illegal() {
    let kinds: Vec<TokenKind> = Scanner::new("\"abc").map(|t| t.kind).collect();

    assert_eq!(kinds.first(), Some(&TokenKind::Illegal));
    assert_eq!(kinds.last(), Some(&TokenKind::Eof));
    assert!(!parse("\"abc").1.is_empty());
}

#[test]
fn scanner_tracks_positions() {
    let tokens: Vec<Token> = Scanner::new("let s = \"a\nb\";\n  s").collect();

    let positions: Vec<(TokenKind, usize, usize)> =
        tokens.iter().map(|t| (t.kind, t.line, t.column)).collect();
    assert_eq!(positions,
               vec![(TokenKind::Let, 1, 1),
                    (TokenKind::Identifier, 1, 5),
                    (TokenKind::Assign, 1, 7),
                    (TokenKind::String, 1, 9),
                    (TokenKind::Semicolon, 2, 3),
                    (TokenKind::Identifier, 3, 3),
                    (TokenKind::Eof, 3, 4),]);
    assert_eq!(tokens[3].literal, "a\nb");
}

#[test]
fn scanner_distinguishes_two_character_operators() {
    let kinds: Vec<TokenKind> = Scanner::new("= == ! != < <= > >=").map(|t| t.kind).collect();

    assert_eq!(kinds,
               vec![TokenKind::Assign,
                    TokenKind::EqualEqual,
                    TokenKind::Bang,
                    TokenKind::BangEqual,
                    TokenKind::Less,
                    TokenKind::LessEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterEqual,
                    TokenKind::Eof]);
}

#[test]
fn parser_accepts_streams_without_eof() {
    let tokens = vec![Token::new(TokenKind::Integer, "1", 1, 1),
                      Token::new(TokenKind::Plus, "+", 1, 3),
                      Token::new(TokenKind::Integer, "2", 1, 5)];

    let (program, errors) = Parser::new(tokens.into_iter()).parse_program();

    assert!(errors.is_empty());
    assert_eq!(program.to_string(), "(1 + 2)");
}

#[test]
fn empty_source_is_an_empty_program() {
    assert_eq!(parse_ok(""), Program::default());
    assert_eq!(parse_ok("   \n\t "), Program::default());
}
