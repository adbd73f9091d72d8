//! Dependency list decoding.
//!
//! The list alternates base64-encoded repository names and base64-encoded
//! private keys, one per line. Either the whole batch decodes or nothing
//! is returned.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, trace};

use crate::core::domain::{DependencyPair, KeyMaterial};
use crate::error::{FormatError, Result};

/// Decode an encoded dependency list into pairs, preserving order.
///
/// Empty lines are ignored and a trailing `\r` is stripped from each line.
/// Repository names are trimmed; key material is kept verbatim.
///
/// # Errors
///
/// Returns `FormatError` if the line count is odd, a line is not valid
/// base64, a line is not valid UTF-8, or a repository decodes to blank.
pub fn decode(input: &str) -> Result<Vec<DependencyPair>> {
    let lines: Vec<&str> = input
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() % 2 != 0 {
        return Err(FormatError::OddLineCount(lines.len()).into());
    }

    debug!(count = lines.len() / 2, "decoding dependencies");

    let mut pairs = Vec::with_capacity(lines.len() / 2);
    for (i, chunk) in lines.chunks_exact(2).enumerate() {
        let repo_line = i * 2 + 1;
        let repository = decode_line(chunk[0], repo_line)?;
        let repository = repository.trim();
        if repository.is_empty() {
            return Err(FormatError::EmptyRepository { line: repo_line }.into());
        }

        let key = KeyMaterial::new(decode_line(chunk[1], repo_line + 1)?);
        trace!(repository, key = ?key, "decoded dependency");
        pairs.push(DependencyPair::new(repository, key));
    }

    Ok(pairs)
}

/// Decode one base64 line into UTF-8 text. `line` is 1-based, for errors.
fn decode_line(encoded: &str, line: usize) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| FormatError::InvalidEncoding {
            line,
            reason: e.to_string(),
        })?;
    String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8 { line }.into())
}
