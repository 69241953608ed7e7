use std::io::Cursor;

use sandcalc::{
    Limits,
    format::FloatStyle,
    repl::{BANNER, ReplOptions, evaluate_line, run},
};

fn session(input: &str, options: &ReplOptions) -> String {
    let mut output = Vec::new();
    run(Cursor::new(input), &mut output, options).unwrap_or_else(|e| panic!("I/O failed: {e}"));
    String::from_utf8(output).unwrap()
}

#[test]
fn session_prints_results_and_errors() {
    let output = session("2 + 3*4\n\n10 / 0\n7/2\nEXIT\n1+1\n", &ReplOptions::default());

    assert_eq!(output,
               format!("{BANNER}\n> 14\n> > Error: Division by zero at position 3.\n> 3.5\n> "));
}

#[test]
fn quit_is_case_insensitive_and_trimmed() {
    for command in ["exit", "quit", "  Quit  ", "EXIT"] {
        let output = session(&format!("{command}\n1 + 1\n"), &ReplOptions::default());
        assert_eq!(output, format!("{BANNER}\n> "), "{command}");
    }
}

#[test]
fn end_of_input_ends_the_session_with_a_newline() {
    let output = session("1+1", &ReplOptions::default());
    assert_eq!(output, format!("{BANNER}\n> 2\n> \n"));

    let output = session("", &ReplOptions::default());
    assert_eq!(output, format!("{BANNER}\n> \n"));
}

#[test]
fn errors_do_not_end_the_session() {
    let output = session("__import__('os')\n(1 + 2\n1 - 1\n", &ReplOptions::default());
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines[1], "> Error: Invalid token '_' at position 0.");
    assert_eq!(lines[2],
               "> Error: Expected closing parenthesis ')' for '(' at position 0.");
    assert_eq!(lines[3], "> 0");
}

#[test]
fn float_style_only_changes_presentation() {
    let trimmed = ReplOptions::default();
    let exact = ReplOptions { float_style: FloatStyle::Exact,
                              ..ReplOptions::default() };

    assert_eq!(evaluate_line("10 / 2", &trimmed), Ok("5".to_string()));
    assert_eq!(evaluate_line("10 / 2", &exact), Ok("5.0".to_string()));
    assert_eq!(evaluate_line("1 / 4", &trimmed), Ok("0.25".to_string()));
    assert_eq!(evaluate_line("-0.0 * 1", &trimmed), Ok("0".to_string()));
    assert_eq!(evaluate_line("1e20", &trimmed), Ok("100000000000000000000".to_string()));
    assert_eq!(evaluate_line("1e20", &exact), Ok("1e+20".to_string()));
    assert_eq!(evaluate_line("2 * 3", &exact), Ok("6".to_string()));
}

#[test]
fn limits_apply_to_every_line() {
    let options = ReplOptions { limits: Limits { max_depth: 2 },
                                ..ReplOptions::default() };

    let output = session("(1)\n(((1)))\n", &options);
    let lines: Vec<_> = output.lines().collect();

    assert_eq!(lines[1], "> 1");
    assert!(lines[2].starts_with("> Error: Expression nesting exceeds the limit of 2"),
            "{}",
            lines[2]);
}
