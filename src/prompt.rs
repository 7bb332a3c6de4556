use std::io::{self, BufRead, Write};

/// Prints `question` and reads one line. `None` means input was closed.
pub fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<Option<String>> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim_end_matches(['\n', '\r']);
    Ok(Some(answer.to_string()))
}
