use std::process::{Command, Output};

fn sandcalc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sandcalc")).args(args)
                                                .output()
                                                .unwrap_or_else(|e| panic!("Failed to run sandcalc: {e}"))
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn words_are_joined_and_evaluated() {
    for (args, expected) in [(&["2 + 3*4"][..], "14\n"),
                             (&["2", "+", "3*4"][..], "14\n"),
                             (&["-3", "+", "4"][..], "1\n"),
                             (&["-3 + 4"][..], "1\n"),
                             (&["3", "-", "-4"][..], "7\n"),
                             (&["7", "/", "2"][..], "3.5\n")]
    {
        let output = sandcalc(args);
        assert!(output.status.success(), "{args:?}: {}", stderr(&output));
        assert_eq!(stdout(&output), expected, "{args:?}");
    }
}

#[test]
fn failures_go_to_stderr_with_exit_code_one() {
    let output = sandcalc(&["10", "/", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(stderr(&output).contains("Error: Division by zero at position 3."),
            "{}",
            stderr(&output));

    let output = sandcalc(&["__import__('os')"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Invalid token '_' at position 0."));
}

#[test]
fn exact_flag_keeps_float_notation() {
    let output = sandcalc(&["--exact", "10", "/", "2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "5.0\n");

    let output = sandcalc(&["10", "/", "2"]);
    assert_eq!(stdout(&output), "5\n");
}

#[test]
fn max_depth_flag_limits_nesting() {
    let output = sandcalc(&["--max-depth", "2", "(1)"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");

    let output = sandcalc(&["--max-depth", "2", "(((1)))"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Expression nesting exceeds the limit of 2"),
            "{}",
            stderr(&output));
}

#[test]
fn max_depth_flag_rejects_out_of_range_values() {
    let nested = format!("{}1{}", "(".repeat(20_000), ")".repeat(20_000));

    for depth in ["0", "100000", "513"] {
        let output = sandcalc(&["--max-depth", depth, &nested]);
        assert_eq!(output.status.code(), Some(2), "--max-depth {depth}");
        assert!(stderr(&output).contains("--max-depth"), "{}", stderr(&output));
        assert_eq!(stdout(&output), "");
    }

    let output = sandcalc(&["--max-depth", "512", &nested]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Expression nesting exceeds the limit of 512"));
}
