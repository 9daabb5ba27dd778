use std::io::{self, BufRead, Write};

const PROMPT: &str = "Enter database URL to continue or type 'exit' to close program: ";

/// Asks for a database URL on `output` and reads one line from `input`.
///
/// Returns `None` when the user types `exit`, enters nothing, or closes the
/// input. The returned URL is trimmed.
pub fn prompt_database_url<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<String>> {
    output.write_all(PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let url = line.trim();
    if url.is_empty() || url == "exit" {
        return Ok(None);
    }
    Ok(Some(url.to_string()))
}
