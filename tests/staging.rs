use bella::{
    Capture, Environment, Error,
    ast::Position,
    error::RuntimeError,
    interpreter::{
        compiler::bytecode::Instruction,
        value::{callable::Callable, core::Binding},
    },
    run,
};
use pretty_assertions::assert_eq;

fn env_with_capture() -> (Environment, Capture) {
    let capture = Capture::default();
    (Environment::with_output(capture.clone()), capture)
}

fn output_of(src: &str) -> Vec<f64> {
    let (mut env, capture) = env_with_capture();
    if let Err(e) = run(src, &mut env) {
        panic!("Script failed: {e}\n{src}");
    }
    capture.values()
}

fn runtime_error(src: &str) -> RuntimeError {
    let (mut env, _) = env_with_capture();
    match run(src, &mut env) {
        Ok(()) => panic!("Script succeeded but was expected to fail\n{src}"),
        Err(Error::Runtime(e)) => e,
        Err(Error::Parse(e)) => panic!("Expected a runtime error, got: {e}"),
    }
}

fn compiled(src: &str, name: &str) -> String {
    let (mut env, _) = env_with_capture();
    run(src, &mut env).unwrap();
    match env.lookup(name) {
        Some(Binding::Callable { body: Callable::Specialized(function),
                                 .. }) => function.to_string(),
        other => panic!("{name} is not a user function: {other:?}"),
    }
}

#[test]
fn square_function() {
    assert_eq!(output_of("function sq(x) = x * x; print sq(7);"), vec![49.0]);
}

#[test]
fn function_with_several_parameters() {
    assert_eq!(output_of("function lerp(a, b, t) = a + (b - a) * t; print lerp(2, 4, 0.5);"),
               vec![3.0]);
}

#[test]
fn constant_parts_are_folded_at_declaration() {
    assert_eq!(compiled("function f(x) = x + 2 * 3;", "f"), "f(x) = (x + 6)");
    assert_eq!(compiled("function g(x) = x * sqrt(16);", "g"), "g(x) = (x * 4)");
    assert_eq!(compiled("function k() = hypot(3, 4);", "k"), "k() = 5");
}

#[test]
fn constant_functions_compile_to_a_single_push() {
    let (mut env, _) = env_with_capture();
    run("function answer() = 6 * 7;", &mut env).unwrap();

    let Some(Binding::Callable { body: Callable::Specialized(function),
                                 arity, .. }) = env.lookup("answer")
    else {
        panic!("answer is not a user function");
    };
    assert_eq!(*arity, 0);
    assert!(matches!(function.code(), [Instruction::Push(v)] if *v == 42.0));
}

#[test]
fn globals_are_captured_at_declaration() {
    assert_eq!(output_of("let k = 10;
                          function f(x) = x + k;
                          k = 100;
                          print f(1);
                          print k;"),
               vec![11.0, 100.0]);
}

#[test]
fn parameters_shadow_globals() {
    assert_eq!(output_of("let x = 100; function f(x) = x + 1; print f(1);"),
               vec![2.0]);
    assert_eq!(output_of("function f(sin) = sin * 2; print f(4);"), vec![8.0]);
}

#[test]
fn parameters_are_not_callable() {
    assert!(matches!(runtime_error("function f(g) = g(1);"),
                     RuntimeError::NotAFunction { name, .. } if name == "g"));
}

#[test]
fn unbound_names_fail_at_declaration() {
    assert!(matches!(runtime_error("function f(x) = x + y;"),
                     RuntimeError::UnboundName { name, .. } if name == "y"));
}

#[test]
fn failed_declarations_install_nothing() {
    let (mut env, capture) = env_with_capture();

    assert!(run("function f(x) = x + y;", &mut env).is_err());
    assert!(env.lookup("f").is_none());

    run("let y = 1; function f(x) = x + y; print f(1);", &mut env).unwrap();
    assert_eq!(capture.values(), vec![2.0]);
}

#[test]
fn specialized_functions_call_other_functions() {
    assert_eq!(output_of("function sq(x) = x * x;
                          function norm(a, b) = sqrt(sq(a) + sq(b));
                          print norm(3, 4);"),
               vec![5.0]);
    assert_eq!(compiled("function sq(x) = x * x; function h(x) = hypot(x, 4);", "h"),
               "h(x) = hypot(x, 4)");
}

#[test]
fn calls_to_user_functions_with_constants_are_folded() {
    assert_eq!(compiled("function sq(x) = x * x; function f(y) = y + sq(3);", "f"),
               "f(y) = (y + 9)");
}

#[test]
fn call_arity_is_checked_at_declaration() {
    assert!(matches!(runtime_error("function f(x) = hypot(x);"),
                     RuntimeError::ArityMismatch { expected: 2, found: 1, .. }));
}

#[test]
fn user_function_arity_is_checked() {
    assert_eq!(runtime_error("function f(a, b) = a - b;\nprint f(1);"),
               RuntimeError::ArityMismatch { name:     "f".to_string(),
                                             expected: 2,
                                             found:    1,
                                             pos:      Position::new(2, 7), });
}

#[test]
fn print_inside_a_function_runs_at_call_time() {
    assert_eq!(output_of("function shout(x) = print(x) * 2;
                          print 0;
                          print shout(5);
                          print shout(6);"),
               vec![0.0, 5.0, 10.0, 6.0, 12.0]);
}

#[test]
fn print_with_constant_arguments_is_not_folded() {
    assert_eq!(output_of("function hello() = print(1);
                          print 0;
                          print hello();
                          print hello();"),
               vec![0.0, 1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn functions_calling_impure_functions_are_impure() {
    assert_eq!(output_of("function noisy(x) = print(x);
                          function twice(x) = noisy(1) + x;
                          print twice(1);
                          print twice(2);"),
               vec![1.0, 2.0, 1.0, 3.0]);
}

#[test]
fn symbolic_conditionals_select_at_call_time() {
    let src = "function abs(x) = x < 0 ? -x : x;
               print abs(-3); print abs(4);";
    assert_eq!(output_of(src), vec![3.0, 4.0]);
    assert_eq!(compiled(src, "abs"), "abs(x) = ((x < 0) ? (-x) : x)");
}

#[test]
fn conditionals_only_run_the_selected_branch_at_call_time() {
    assert_eq!(output_of("function pick(c) = c ? print(1) : print(2);
                          print pick(1);
                          print pick(0);"),
               vec![1.0, 1.0, 2.0, 2.0]);
}

#[test]
fn concrete_conditionals_fold_at_declaration() {
    assert_eq!(compiled("function f(x) = 1 < 2 ? x : x * 10;", "f"), "f(x) = x");
}

#[test]
fn failing_branches_only_fail_when_taken() {
    let src = "function safe(c) = c ? 1 : missing;";
    let (mut env, capture) = env_with_capture();

    run(src, &mut env).unwrap();
    run("print safe(1);", &mut env).unwrap();
    assert_eq!(capture.values(), vec![1.0]);

    let Err(Error::Runtime(error)) = run("print safe(0);", &mut env) else {
        panic!("taking the failing branch should fail");
    };
    assert!(matches!(error, RuntimeError::UnboundName { name, .. } if name == "missing"));
}

#[test]
fn truthy_checks_are_deferred_to_call_time() {
    assert_eq!(output_of("function not(x) = !x; print not(0); print not(1);"),
               vec![1.0, 0.0]);

    assert_eq!(runtime_error("function not(x) = !x;\nprint not(2);"),
               RuntimeError::InvalidBooleanOperand { value: 2.0,
                                                     pos:   Position::new(1, 20), });
}

#[test]
fn symbolic_selectors_are_validated_at_call_time() {
    assert_eq!(runtime_error("function f(c) = c ? 1 : 0; print f(3);"),
               RuntimeError::InvalidBooleanOperand { value: 3.0,
                                                     pos:   Position::new(1, 17), });
}

#[test]
fn logical_operands_are_validated_at_call_time() {
    assert_eq!(output_of("function both(a, b) = a && b; print both(1, 1); print both(1, 0);"),
               vec![1.0, 0.0]);
    assert!(matches!(runtime_error("function both(a, b) = a && b; print both(0, 7);"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 7.0));
}

#[test]
fn concrete_logical_operands_beside_parameters_are_validated_at_call_time() {
    let (mut env, capture) = env_with_capture();

    run("function f(x) = x || 5; print 1;", &mut env).unwrap();
    assert_eq!(capture.values(), vec![1.0]);

    let Err(Error::Runtime(error)) = run("print f(1);", &mut env) else {
        panic!("calling f should fail");
    };
    assert_eq!(error,
               RuntimeError::InvalidBooleanOperand { value: 5.0,
                                                     pos:   Position::new(1, 22), });
    assert_eq!(error.position(), Position::new(1, 22));
    assert_eq!(capture.values(), vec![1.0]);
}

#[test]
fn concrete_logical_operands_alone_are_validated_at_declaration() {
    assert!(matches!(runtime_error("function f(x) = (1 && 2) + x;"),
                     RuntimeError::InvalidBooleanOperand { value, .. } if value == 2.0));
}

#[test]
fn failing_branches_keep_their_earlier_effects() {
    let direct = {
        let (mut env, capture) = env_with_capture();
        let error = run("let c = 1; print c ? (print(7) + missing) : 0;", &mut env).unwrap_err();
        (capture.values(), error)
    };
    let staged = {
        let (mut env, capture) = env_with_capture();
        let error = run("function f(c) = c ? (print(7) + missing) : 0; print f(1);", &mut env)
                      .unwrap_err();
        (capture.values(), error)
    };

    assert_eq!(direct.0, vec![7.0]);
    assert_eq!(staged.0, vec![7.0]);
    assert!(matches!(staged.1,
                     Error::Runtime(RuntimeError::UnboundName { ref name, .. }) if name == "missing"));
    assert!(matches!(direct.1, Error::Runtime(RuntimeError::UnboundName { .. })));
}

#[test]
fn failing_branches_repeat_nested_effects_once() {
    let src = "function f(c, d) = c ? (print(d ? print(1) : 2) + missing) : 0;";
    let (mut env, capture) = env_with_capture();

    run(src, &mut env).unwrap();
    assert!(run("print f(0, 0);", &mut env).is_ok());
    assert!(run("print f(1, 1);", &mut env).is_err());
    assert_eq!(capture.values(), vec![0.0, 1.0, 1.0]);

    assert_eq!(compiled(src, "f"),
               "f(c, d) = (c ? print((d ? print(1) : 2)); <error> : 0)");
}

#[test]
fn compiled_functions_expose_their_parameters() {
    let (mut env, _) = env_with_capture();
    run("function lerp(a, b, t) = a + (b - a) * t;", &mut env).unwrap();

    let Some(Binding::Callable { body: Callable::Specialized(function),
                                 .. }) = env.lookup("lerp")
    else {
        panic!("lerp is not a user function");
    };
    assert_eq!(function.name(), "lerp");
    assert_eq!(function.params(), ["a", "b", "t"]);
    assert_eq!(function.arity(), 3);
}

#[test]
fn redeclaring_a_function_in_a_loop_fails() {
    assert!(matches!(runtime_error("let i = 0; while i < 2 { function f(x) = x; i = i + 1; }"),
                     RuntimeError::NotWritable { name, .. } if name == "f"));
}

#[test]
fn specialization_is_transparent() {
    // Every body is evaluated once directly with the argument bound as a
    // global, and once through a compiled function.
    let bodies = ["x * x - 3 * x + 2",
                  "x < 2 ? x ** 2 : -x",
                  "!(x > 1) || x == 3",
                  "hypot(x, 3) / sqrt(x + 1)",
                  "(x % 2 == 0) && (x != 4)",
                  "cos(x) * sin(x) + π"];

    for body in bodies {
        for arg in 0..6 {
            let direct = format!("let x = {arg}; print {body};");
            let staged = format!("function f(x) = {body}; print f({arg});");

            let (mut env, capture) = env_with_capture();
            let direct_result = run(&direct, &mut env).map(|()| capture.values());
            let (mut env, capture) = env_with_capture();
            let staged_result = run(&staged, &mut env).map(|()| capture.values());

            match (direct_result, staged_result) {
                (Ok(direct), Ok(staged)) => {
                    assert_eq!(direct, staged, "{body} with x = {arg}");
                },
                (Err(Error::Runtime(direct)), Err(Error::Runtime(staged))) => {
                    assert_eq!(std::mem::discriminant(&direct),
                               std::mem::discriminant(&staged),
                               "{body} with x = {arg}");
                },
                (direct, staged) => {
                    panic!("{body} with x = {arg}: direct {direct:?}, staged {staged:?}")
                },
            }
        }
    }
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn natives_require_as_many_arguments_as_their_arity() {
    let _ = bella::interpreter::evaluator::function::builtin::hypot(&[3.0],
                                                                    &mut Capture::default());
}
