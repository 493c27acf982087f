//! Terminal stand-in for the confirm modal.

use std::io::{self, BufRead, Write};

#[cfg(test)]
#[path = "prompt_test.rs"]
mod prompt_test;

pub const CANCELLED: &str = "Exclusão cancelada.";

/// Ask `question` on stdout and read the answer from stdin.
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    ask(question, &mut stdin.lock(), &mut io::stdout())
}

fn ask(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{question} [s/N] ")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// `s` or `sim`, case-insensitive. Anything else, including EOF, declines.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "s" | "sim")
}
