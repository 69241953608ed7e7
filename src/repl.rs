use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::{
    evaluate_expression_with,
    format::{FloatStyle, render},
    limits::Limits,
};

/// Greeting printed when a session starts.
pub const BANNER: &str = "Basic Calculator. Type 'exit' or Ctrl-D to quit.";
/// Prompt printed before each line is read.
pub const PROMPT: &str = "> ";

/// Settings for an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplOptions {
    /// Limits applied to every expression.
    pub limits:      Limits,
    /// How float results are displayed.
    pub float_style: FloatStyle,
}

/// What to do with one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Quit,
    Expression(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim();
    if line.is_empty() {
        Line::Blank
    } else if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
        Line::Quit
    } else {
        Line::Expression(line)
    }
}

/// Evaluates one expression and formats the outcome the way both the REPL
/// and the command line print it: the rendered value, or `Error: <message>`.
///
/// # Errors
/// Returns the formatted error line if evaluation fails.
///
/// # Example
/// ```
/// use sandcalc::repl::{ReplOptions, evaluate_line};
///
/// let options = ReplOptions::default();
/// assert_eq!(evaluate_line("2 + 3*4", &options), Ok("14".to_string()));
/// assert_eq!(evaluate_line("9 / 3", &options), Ok("3".to_string()));
/// assert!(evaluate_line("10 / 0", &options).unwrap_err().starts_with("Error: "));
/// ```
pub fn evaluate_line(line: &str, options: &ReplOptions) -> Result<String, String> {
    match evaluate_expression_with(line, &options.limits) {
        Ok(value) => {
            debug!(input = line, %value, "evaluated");
            Ok(render(&value, options.float_style))
        },
        Err(e) => {
            debug!(input = line, kind = ?e.kind(), position = ?e.position(), "rejected");
            Err(format!("Error: {e}"))
        },
    }
}

/// Runs an interactive session until `exit`/`quit` or end of input.
///
/// Every line is evaluated independently; a failing line prints an error and
/// the session continues.
///
/// # Errors
/// Returns any I/O error from reading `input` or writing `output`.
///
/// # Example
/// ```
/// use std::io::Cursor;
///
/// use sandcalc::repl::{ReplOptions, run};
///
/// let mut output = Vec::new();
/// run(Cursor::new("1 + 1\nquit\n"), &mut output, &ReplOptions::default()).unwrap();
///
/// let output = String::from_utf8(output).unwrap();
/// assert!(output.contains("> 2\n"));
/// ```
pub fn run<R, W>(mut input: R, mut output: W, options: &ReplOptions) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    info!(max_depth = options.limits.effective_max_depth(),
          float_style = %options.float_style,
          "starting interactive session");

    writeln!(output, "{BANNER}")?;
    let mut buffer = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buffer.clear();
        if input.read_line(&mut buffer)? == 0 {
            writeln!(output)?;
            break;
        }

        match classify(&buffer) {
            Line::Blank => {},
            Line::Quit => break,
            Line::Expression(expr) => match evaluate_line(expr, options) {
                Ok(rendered) => writeln!(output, "{rendered}")?,
                Err(message) => writeln!(output, "{message}")?,
            },
        }
    }

    info!("interactive session ended");
    Ok(())
}
