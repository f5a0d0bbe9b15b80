//! Terminal I/O utilities for CLI.
//!
//! Provides TTY detection and user prompting.

use std::io::{self, BufRead, IsTerminal, Write};

/// Ask a question on stderr and read one trimmed line from stdin.
///
/// Works the same whether stdin is a terminal or a pipe, so answers can be
/// fed with `printf "name\ntabs\n" | dashgen new`. End of input is a blank
/// answer.
pub fn prompt(message: &str) -> dashgen::Result<String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    prompt_from(&mut input, &mut io::stderr(), message)
}

fn prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> dashgen::Result<String> {
    write!(out, "{}", message).ok();
    out.flush().ok();

    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| {
        dashgen::Error::internal_io(e.to_string(), Some("read stdin".to_string()))
    })?;

    Ok(line.trim().to_string())
}

/// Answer from a flag, falling back to a prompt on stdin.
pub fn flag_or_prompt(value: Option<String>, message: &str) -> dashgen::Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt(message),
    }
}

/// Print status message to stderr if running in a terminal.
pub fn status(message: &str) {
    if io::stderr().is_terminal() {
        eprintln!("{}", message);
    }
}

// log_status! macro is defined in lib.rs (#[macro_export]) and available crate-wide.

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_answers_are_read_in_order() {
        let mut input = Cursor::new("Life Dashboard\nIdeas, To-Do List\n");
        let mut prompts = Vec::new();

        let name = prompt_from(&mut input, &mut prompts, "name? ").unwrap();
        let tabs = prompt_from(&mut input, &mut prompts, "tabs? ").unwrap();

        assert_eq!(name, "Life Dashboard");
        assert_eq!(tabs, "Ideas, To-Do List");
        assert_eq!(String::from_utf8(prompts).unwrap(), "name? tabs? ");
    }

    #[test]
    fn end_of_input_is_a_blank_answer() {
        let mut input = Cursor::new("Only Name");
        let mut sink = io::sink();

        assert_eq!(prompt_from(&mut input, &mut sink, "").unwrap(), "Only Name");
        assert_eq!(prompt_from(&mut input, &mut sink, "").unwrap(), "");
    }

    #[test]
    fn answers_are_trimmed() {
        let mut input = Cursor::new("  padded \r\n");
        assert_eq!(prompt_from(&mut input, &mut io::sink(), "").unwrap(), "padded");
    }
}
