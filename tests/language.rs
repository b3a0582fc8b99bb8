use bella::{
    Capture, Environment, Error,
    ast::Position,
    error::{ParseError, RuntimeError},
    run,
};
use pretty_assertions::assert_eq;

fn output_of(src: &str) -> Vec<f64> {
    let capture = Capture::default();
    let mut env = Environment::with_output(capture.clone());
    if let Err(e) = run(src, &mut env) {
        panic!("Script failed: {e}\n{src}");
    }
    capture.values()
}

fn assert_prints(src: &str, expected: &[f64]) {
    assert_eq!(output_of(src), expected, "output of {src}");
}

fn assert_success(src: &str) {
    output_of(src);
}

fn runtime_error(src: &str) -> RuntimeError {
    let mut env = Environment::with_output(Capture::default());
    match run(src, &mut env) {
        Ok(()) => panic!("Script succeeded but was expected to fail\n{src}"),
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match bella::parse(src) {
        Ok(program) => panic!("Parsed {program:?} but expected a syntax error"),
        Err(e) => e,
    }
}

fn assert_failure(src: &str) {
    let mut env = Environment::with_output(Capture::default());
    if run(src, &mut env).is_ok() {
        panic!("Script succeeded but was expected to fail\n{src}")
    }
}

#[test]
fn arithmetic_follows_precedence() {
    assert_prints("print 1 + 2 * 3;", &[7.0]);
    assert_prints("print (1 + 2) * 3;", &[9.0]);
    assert_prints("print 10 - 4 - 3;", &[3.0]);
    assert_prints("print 2 * 3 % 4;", &[2.0]);
    assert_prints("print 7 / 2;", &[3.5]);
}

#[test]
fn power_is_right_associative_and_binds_tighter_than_negation() {
    assert_prints("print 2 ** 3 ** 2;", &[512.0]);
    assert_prints("print -2 ** 2;", &[-4.0]);
    assert_prints("print 2 ** -1;", &[0.5]);
    assert_prints("print (-2) ** 2;", &[4.0]);
}

#[test]
fn arithmetic_follows_ieee() {
    assert_prints("print 1 / 0;", &[f64::INFINITY]);
    assert_prints("print -1 / 0;", &[f64::NEG_INFINITY]);
    assert_prints("print -7 % 3;", &[-1.0]);
    assert_prints("print 7.5 % 2;", &[1.5]);

    let values = output_of("print 0 / 0; print 5 % 0;");
    assert!(values.iter().all(|v| v.is_nan()));
}

#[test]
fn number_literals() {
    assert_prints("print 42;", &[42.0]);
    assert_prints("print 3.25;", &[3.25]);
    assert_prints("print 2.5e3;", &[2500.0]);
    assert_prints("print 1E-2;", &[0.01]);
}

#[test]
fn booleans_are_numbers() {
    assert_prints("print true; print false;", &[1.0, 0.0]);
    assert_prints("print true + true;", &[2.0]);
}

#[test]
fn relational_operators_yield_zero_or_one() {
    assert_prints("print 1 < 2; print 2 < 1;", &[1.0, 0.0]);
    assert_prints("print 2 <= 2; print 3 >= 4;", &[1.0, 0.0]);
    assert_prints("print 1 == 1; print 1 != 1;", &[1.0, 0.0]);
    assert_prints("print 3 > 2;", &[1.0]);
    assert_prints("print 0 / 0 == 0 / 0;", &[0.0]);
    assert_prints("print 0 / 0 != 0 / 0;", &[1.0]);
}

#[test]
fn relational_operators_do_not_chain() {
    assert!(matches!(parse_error("print 1 < 2 < 3;"),
                     ParseError::UnexpectedToken { .. }));
}

#[test]
fn logical_operators() {
    assert_prints("print 1 && 1; print 1 && 0;", &[1.0, 0.0]);
    assert_prints("print 0 || 1; print 0 || 0;", &[1.0, 0.0]);
    assert_prints("print 1 < 2 && 2 < 3;", &[1.0]);
    assert_prints("print !0; print !1;", &[1.0, 0.0]);
    assert_prints("print !!1;", &[1.0]);
}

#[test]
fn logical_operators_validate_both_operands() {
    assert!(matches!(runtime_error("print 0 && 5;"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 5.0));
    assert!(matches!(runtime_error("print 1 || 2;"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 2.0));
    assert!(matches!(runtime_error("print 2 || 1;"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 2.0));
}

#[test]
fn logical_operators_evaluate_both_operands() {
    assert_prints("print 1 || print(0);", &[0.0, 1.0]);
    assert_prints("print 0 && print(1);", &[1.0, 0.0]);
}

#[test]
fn not_rejects_non_boolean() {
    let error = runtime_error("print !5;");
    assert_eq!(error,
               RuntimeError::InvalidBooleanOperand { value: 5.0,
                                                     pos:   Position::new(1, 8), });
}

#[test]
fn conditional_selects_a_branch() {
    assert_prints("print 1 ? 10 : 20;", &[10.0]);
    assert_prints("print 0 ? 10 : 20;", &[20.0]);
    assert_prints("print 1 < 2 ? 3 : 4;", &[3.0]);
    assert_prints("print 0 ? 1 : 0 ? 2 : 3;", &[3.0]);
}

#[test]
fn conditional_only_evaluates_the_selected_branch() {
    assert_prints("print 1 ? print(10) : print(20);", &[10.0, 10.0]);
    assert_prints("print 1 ? 5 : undefined;", &[5.0]);
}

#[test]
fn conditional_rejects_non_boolean_selector() {
    assert!(matches!(runtime_error("print 2 ? 1 : 0;"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 2.0));
}

#[test]
fn builtins() {
    assert_prints("print hypot(3, 4);", &[5.0]);
    assert_prints("print sqrt(16);", &[4.0]);
    assert_prints("print sin(0); print cos(0);", &[0.0, 1.0]);
    assert_prints("print cos(π);", &[-1.0]);
    assert_prints("print π;", &[std::f64::consts::PI]);

    let root = output_of("print sqrt(2) ** 2;")[0];
    assert!((root - 2.0).abs() < 1e-12);
}

#[test]
fn print_builtin_returns_its_argument() {
    assert_prints("let x = print(3) + 1; print x;", &[3.0, 4.0]);
}

#[test]
fn hypot_checks_arity() {
    assert_eq!(runtime_error("print hypot(1);"),
               RuntimeError::ArityMismatch { name:     "hypot".to_string(),
                                             expected: 2,
                                             found:    1,
                                             pos:      Position::new(1, 7), });
}

#[test]
fn variables_and_assignment() {
    assert_prints("let x = 5; x = x * 2; print x;", &[10.0]);
    assert_prints("let x = 1; let y = x + 1; x = 10; print y;", &[2.0]);
}

#[test]
fn redeclaring_a_variable_is_rejected() {
    assert!(matches!(runtime_error("let x = 1; let x = 2;"),
                     RuntimeError::NotWritable { name, pos, .. }
                         if name == "x" && pos == Position::new(1, 16)));
}

#[test]
fn builtins_may_be_shadowed_by_declarations() {
    assert_prints("let sin = 1; print sin;", &[1.0]);
    assert_prints("let π = 3; print π;", &[3.0]);
    assert_prints("function hypot(a, b) = a + b; print hypot(3, 4);", &[7.0]);
}

#[test]
fn user_functions_cannot_be_redeclared() {
    assert!(matches!(runtime_error("function f(x) = x; function f(y) = y;"),
                     RuntimeError::NotWritable { .. }));
    assert!(matches!(runtime_error("let f = 1; function f(x) = x;"),
                     RuntimeError::NotWritable { .. }));
    assert!(matches!(runtime_error("function f(x) = x; let f = 1;"),
                     RuntimeError::NotWritable { .. }));
}

#[test]
fn assignment_requires_a_declared_variable() {
    assert!(matches!(runtime_error("x = 1;"), RuntimeError::NotWritable { name, .. } if name == "x"));
    assert!(matches!(runtime_error("π = 3;"), RuntimeError::NotWritable { .. }));
    assert!(matches!(runtime_error("sin = 3;"), RuntimeError::NotWritable { .. }));
    assert!(matches!(runtime_error("function f(x) = x; f = 3;"),
                     RuntimeError::NotWritable { .. }));
}

#[test]
fn unbound_names_are_reported() {
    assert_eq!(runtime_error("print y;"),
               RuntimeError::UnboundName { name: "y".to_string(),
                                           pos:  Position::new(1, 7), });
    assert!(matches!(runtime_error("print g(1);"), RuntimeError::UnboundName { .. }));
}

#[test]
fn numbers_are_not_callable() {
    assert!(matches!(runtime_error("let x = 1; print x(2);"),
                     RuntimeError::NotAFunction { name, .. } if name == "x"));
    assert!(matches!(runtime_error("print π(1);"), RuntimeError::NotAFunction { .. }));
}

#[test]
fn functions_are_not_numbers() {
    assert!(matches!(runtime_error("print sin + 1;"),
                     RuntimeError::NotANumber { name, .. } if name == "sin"));
}

#[test]
fn while_loop_prints_each_iteration() {
    assert_prints("let i = 0; while (i < 3) { print i; i = i + 1; }",
                  &[0.0, 1.0, 2.0]);
    assert_prints("let i = 0; while 0 { i = 1; } print i;", &[0.0]);
}

#[test]
fn nested_while_loops() {
    assert_prints("let i = 0; let j = 0; let total = 0;
                   while i < 3 {
                       j = 0;
                       while j < 2 { total = total + 1; j = j + 1; }
                       i = i + 1;
                   }
                   print total;",
                  &[6.0]);
}

#[test]
fn declarations_inside_loops_run_once_per_iteration() {
    assert!(matches!(runtime_error("let i = 0; while i < 2 { let k = i; i = i + 1; }"),
                     RuntimeError::NotWritable { name, .. } if name == "k"));
}

#[test]
fn while_guard_must_be_boolean() {
    assert!(matches!(runtime_error("let i = 0; while i + 2 { i = i + 1; }"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 2.0));
}

#[test]
fn errors_stop_the_program() {
    let capture = Capture::default();
    let mut env = Environment::with_output(capture.clone());

    assert!(run("print 1; print nope; print 2;", &mut env).is_err());
    assert_eq!(capture.values(), vec![1.0]);
}

#[test]
fn syntax_errors_run_nothing() {
    let capture = Capture::default();
    let mut env = Environment::with_output(capture.clone());

    assert!(matches!(run("print 1; print 2 +;", &mut env), Err(Error::Parse(_))));
    assert!(capture.values().is_empty());
}

#[test]
fn comments_and_unicode_identifiers() {
    assert_prints("// leading comment
                   let café = 2; // trailing comment
                   print café * π / π;",
                  &[2.0]);
}

#[test]
fn parse_errors_carry_positions() {
    assert!(matches!(parse_error("let x = 1;\nprint x $ 2;"),
                     ParseError::UnexpectedCharacter { found, pos }
                         if found == "$" && pos == Position::new(2, 9)));
    assert!(matches!(parse_error("let x = ;"),
                     ParseError::UnexpectedToken { pos, .. } if pos == Position::new(1, 9)));
    assert!(matches!(parse_error("print 1"), ParseError::UnexpectedEndOfInput { .. }));
    assert!(matches!(parse_error("function f(x, x) = x;"),
                     ParseError::DuplicateParameter { name, .. } if name == "x"));
    assert!(matches!(parse_error("1 + 2;"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn error_messages_name_the_position() {
    let error = runtime_error("let a = 1;\n  print b;");
    assert_eq!(error.to_string(),
               "Error on line 2, column 9: b is referenced, but has not been instantiated.");
}

#[test]
fn fresh_environments_are_deterministic() {
    let src = "let x = 3; function f(y) = y * x + 1; let i = 0;
               while i < 4 { print f(i); i = i + 1; }";
    assert_eq!(output_of(src), output_of(src));
    assert_success(src);
}

#[test]
fn environments_persist_across_runs() {
    let capture = Capture::default();
    let mut env = Environment::with_output(capture.clone());

    run("let x = 2; function double(n) = n * 2;", &mut env).unwrap();
    run("print double(x);", &mut env).unwrap();
    assert_failure("print double(x);");

    assert_eq!(capture.values(), vec![4.0]);
}
