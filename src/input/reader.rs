use std::io::{self, Read};

use crate::error::{Result, TzhError};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Joins `words` with spaces, or reads all of stdin when there are none.
    pub fn read(words: &[String]) -> Result<String> {
        if words.is_empty() {
            Self::read_from(io::stdin().lock())
        } else {
            Ok(words.join(" "))
        }
    }

    /// Reads `reader` to the end, enforcing the size cap and UTF-8.
    pub fn read_from(reader: impl Read) -> Result<String> {
        let mut buffer = Vec::new();
        // One byte past the cap is enough to detect oversized input.
        reader
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| TzhError::io("Failed to read from stdin", e))?;

        if buffer.len() > MAX_INPUT_SIZE {
            return Err(TzhError::io(
                "Input exceeds maximum allowed size (1 MB)",
                io::Error::new(io::ErrorKind::InvalidData, "consider splitting the input"),
            ));
        }

        String::from_utf8(buffer).map_err(|e| {
            TzhError::io(
                "Input is not valid UTF-8",
                io::Error::new(io::ErrorKind::InvalidData, e),
            )
        })
    }
}
