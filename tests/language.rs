use std::fs;

use minipl::{
    error::{Diagnostic, Error},
    interpreter::evaluator::core::Interpreter,
    run,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

fn execute(src: &str, input: &str) -> (Result<(), Error>, String) {
    let mut interpreter = Interpreter::with_io(input.as_bytes(), Vec::new());
    let result = run(src, &mut interpreter);
    let output = String::from_utf8(interpreter.into_output()).expect("output is UTF-8");
    (result, output)
}

fn output_of(src: &str) -> String {
    match execute(src, "") {
        (Ok(()), output) => output,
        (Err(e), _) => panic!("Script failed: {e}"),
    }
}

fn assert_success(src: &str) {
    if let (Err(e), _) = execute(src, "") {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match execute(src, "") {
        (Ok(()), _) => panic!("Script succeeded but was expected to fail"),
        (Err(e), _) => e,
    }
}

fn diagnostics_of(src: &str) -> Vec<Diagnostic> {
    match assert_failure(src) {
        Error::Diagnostics(diagnostics) => diagnostics,
        Error::Runtime(e) => panic!("Expected diagnostics, got runtime error: {e}"),
    }
}

#[test]
fn scripts_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mpl"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out"))
            .unwrap_or_else(|e| panic!("Missing expected output for {path:?}: {e}"));
        let input = fs::read_to_string(path.with_extension("in")).unwrap_or_default();
        let expected_error = fs::read_to_string(path.with_extension("err")).ok();

        count += 1;
        let (result, output) = execute(&source, &input);
        match (result, expected_error) {
            (Ok(()), None) => {},
            (Err(e), Some(message)) => assert_eq!(e.to_string(), message.trim_end(), "{path:?}"),
            (Err(e), None) => panic!("Script {path:?} failed:\n{e}"),
            (Ok(()), Some(message)) => panic!("Script {path:?} should have failed with {message}"),
        }
        assert_eq!(output, expected, "{path:?}");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn precedence_and_arithmetic() {
    assert_eq!(output_of("var x : int := 1 + 2 * 3; print x;"), "7");
    assert_eq!(output_of("print (1 + 2) * 3;"), "9");
    assert_eq!(output_of("print 8 - 4 - 2;"), "2");
    assert_eq!(output_of("print 7 / 2;"), "3.5");
    assert_eq!(output_of("print 1 / 0;"), "inf");
}

#[test]
fn comparison_and_logic() {
    assert_success("assert(1 < 2);");
    assert_success("assert(!(2 < 1));");
    assert_success("assert(1 = 1 & true);");
    assert_success("assert(\"a\" = \"a\");");
    assert_success("assert(!(1 = \"1\"));");
    assert_eq!(output_of("print 1 < 2 = true;"), "true");
}

#[test]
fn failed_assertion_aborts_the_run() {
    let mut interpreter = Interpreter::with_io(&b""[..], Vec::new());
    let err = run("print 1; assert(2 < 1); print 2;", &mut interpreter).unwrap_err();
    assert_eq!(err.to_string(), "[1] Error: at 'assert': Assertion failed.");
    assert_eq!(interpreter.output(), b"1");
}

#[test]
fn assertion_must_be_boolean() {
    let err = assert_failure("assert(1);");
    assert!(err.to_string().ends_with("Assertion must be a boolean."));
}

#[test]
fn strings() {
    assert_eq!(output_of("print \"a\" + \"b\";"), "ab");
    assert_eq!(output_of("var s : string; print s + \"!\";"), "!");
    assert_eq!(output_of(r#"print "line\n";"#), "line\n");
}

#[test]
fn no_implicit_coercion() {
    let err = assert_failure("print 1 + \"b\";");
    assert_eq!(err.to_string(), "[1] Error: at '+': Operands must be strings or numbers.");
    assert!(matches!(assert_failure("print true & 1;"), Error::Runtime(_)));
    assert!(matches!(assert_failure("print !3;"), Error::Runtime(_)));
    assert!(matches!(assert_failure("print \"a\" - \"b\";"), Error::Runtime(_)));
}

#[test]
fn declarations() {
    assert_eq!(output_of("var b : bool; var n : int; print b; print n;"), "false0");
    let err = assert_failure("var x : int; var x : int;");
    assert_eq!(err.to_string(), "[1] Error: at 'x': Variable 'x' is already defined.");
    assert!(assert_failure("print y;").to_string().contains("Undefined variable 'y'."));
    assert!(assert_failure("y := 1;").to_string().contains("Undefined variable 'y'."));
}

#[test]
fn declared_types_are_not_enforced() {
    assert_eq!(output_of("var x : int := \"text\"; print x;"), "text");
}

#[test]
fn for_loop_counts_inclusively() {
    assert_eq!(output_of("var i : int; for i in 1..3 do print i; end for;"), "123");
    assert_eq!(output_of("var i : int; for i in 1..3 do print i; end for; i := 5; print i;"),
               "1235");
    assert_eq!(output_of("var i : int; for i in 2..2 do print i; end for;"), "2");
    assert_eq!(output_of("var i : int := 9; for i in 5..1 do print i; end for; print i;"), "9");
}

#[test]
fn assignment_to_control_variable_fails() {
    let (result, output) = execute("var i : int; for i in 1..3 do print i; i := 5; end for;", "");
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "[1] Error: at 'i': Cannot assign to control variable 'i'.");
    assert_eq!(output, "1");
}

#[test]
fn state_persists_between_runs() {
    let mut interpreter = Interpreter::with_io(&b"41\n"[..], Vec::new());
    run("var n : int;", &mut interpreter).unwrap();
    run("read n;", &mut interpreter).unwrap();
    run("print n + 1;", &mut interpreter).unwrap();
    assert_eq!(interpreter.output(), b"42");

    assert!(run("var n : int;", &mut interpreter).is_err());
}

#[test]
fn lexical_error_prevents_execution() {
    let (result, output) = execute("print 1; ? print 2;", "");
    let Err(Error::Diagnostics(diagnostics)) = result else {
        panic!("expected diagnostics");
    };
    assert_eq!(output, "");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "[1:10] Error: Unexpected character '?'.");
}

#[test]
fn parser_reports_several_errors_in_one_pass() {
    let diagnostics = diagnostics_of("var x int;\nprint ;\nvar y : int := 1;\nassert 1;\n");
    let lines: Vec<_> = diagnostics.iter().map(Diagnostic::line).collect();
    assert_eq!(lines, vec![1, 2, 4]);
    assert_eq!(diagnostics[0].to_string(), "[1] Error: at 'int': Expected ':' after variable name.");
}

#[test]
fn invalid_assignment_target_is_reported() {
    let diagnostics = diagnostics_of("1 := 2;");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].to_string(), "[1] Error: at ':=': Invalid assignment target.");
}

#[test]
fn unterminated_constructs_are_reported() {
    let diagnostics = diagnostics_of("print \"abc");
    assert!(diagnostics[0].to_string().ends_with("Unterminated string."));

    let diagnostics = diagnostics_of("/* a /* b */ print 1;");
    assert!(diagnostics.iter().any(|d| d.message() == "Unterminated multiline comment."));
}

#[test]
fn nan_compares_equal_to_nan() {
    assert_success("assert(0 / 0 = 0 / 0);");
    assert_success("assert(!(0 / 0 = 1));");
}

#[test]
fn deep_nesting_runs() {
    let depth = 900;
    let source = format!("print {}1{} + {}true;",
                         "(".repeat(depth),
                         ")".repeat(depth),
                         "!".repeat(depth));
    let err = assert_failure(&source);
    assert!(err.to_string().ends_with("Operands must be strings or numbers."));

    let source = format!("print {}7{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(output_of(&source), "7");
    assert_eq!(output_of(&format!("print {}true;", "!".repeat(depth))), "true");
}

#[test]
fn runaway_nesting_is_reported_not_fatal() {
    let source = format!("print {}true;", "!".repeat(200_000));
    let diagnostics = diagnostics_of(&source);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message(), "Expression nested too deeply.");
}

#[test]
fn comments_are_ignored() {
    assert_eq!(output_of("// one\nprint 1; /* two /* nested */ */ print 2;"), "12");
}
