use rustyline::{DefaultEditor, error::ReadlineError};

use crate::Session;

/// The prompt shown before each line.
pub const PROMPT: &str = ">> ";

/// Runs the REPL on the terminal until `:quit`, `:q` or end of input.
///
/// Every line is evaluated in the same [`Session`], so bindings persist.
pub fn run() -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let session = Session::new();

    println!("simian v{} REPL", env!("CARGO_PKG_VERSION"));
    println!("Type :quit to exit");

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed == ":quit" || trimmed == ":q" {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if let Some(output) = eval_line(&session, &line) {
                    println!("{output}");
                }
            },
            Err(ReadlineError::Interrupted) => {},
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// Evaluates one line of input and returns what the REPL shows for it.
///
/// # Returns
/// - The tab-indented diagnostics, one per line, if the line does not parse.
/// - The printed form of the result (an error renders as `ERROR: ...`).
/// - `None` if the line produced no value.
///
/// # Example
/// ```
/// use simian::{Session, repl::eval_line};
///
/// let session = Session::new();
///
/// assert_eq!(eval_line(&session, "let a = 5;"), None);
/// assert_eq!(eval_line(&session, "a * 2").as_deref(), Some("10"));
/// assert_eq!(eval_line(&session, "-true").as_deref(),
///            Some("ERROR: unknown operator: -BOOLEAN"));
/// assert_eq!(eval_line(&session, "let = 1").as_deref(),
///            Some("\tError on line 1, column 5: expected next token to be IDENT, got = instead."));
/// ```
#[must_use]
pub fn eval_line(session: &Session, line: &str) -> Option<String> {
    match session.run(line) {
        Ok(value) => value.map(|value| value.to_string()),
        Err(error) => Some(error.to_string()),
    }
}
