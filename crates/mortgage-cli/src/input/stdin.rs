use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Read JSON from stdin when data is being piped in.
///
/// Interactive sessions (TTY stdin) and empty pipes yield `None` so flag
/// input can take over.
pub fn read_piped<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(trimmed)?))
}
