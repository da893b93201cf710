pub mod count;
pub mod enumerate;
pub mod relation;
pub mod version;

use std::error::Error;
use std::io::{self, BufRead, Write};

/// Returns the `--n` value, prompting on stdin when it was omitted.
pub fn target_or_prompt(raw: Option<&str>, prompt: &str) -> Result<String, Box<dyn Error>> {
    if let Some(raw) = raw {
        return Ok(raw.to_string());
    }
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}
