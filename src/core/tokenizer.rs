//! Quote-aware argument splitting.
//!
//! Splits a command string on single ASCII spaces and glues back together
//! fragments of a double-quoted argument. This is a best-effort
//! reconstruction, not a shell grammar: no escapes mid-token, no nested
//! quoting, no separators other than one space. Quotes are kept in the
//! resulting token.

/// Split `raw` into arguments.
///
/// A fragment starting with `"` opens a quoted span; following fragments
/// are appended to the same token (rejoined with the space they were split
/// on) until a fragment ends with `"` that is not `\"`.
///
/// # Examples
///
/// ```
/// use deploy_keys::core::tokenizer::tokenize;
///
/// let tokens = tokenize(r#"-i "/home/user/my key" -F /dev/null"#);
/// assert_eq!(tokens, vec!["-i", "\"/home/user/my key\"", "-F", "/dev/null"]);
/// ```
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut quoted = false;

    for fragment in raw.split(' ') {
        match tokens.last_mut() {
            Some(last) if quoted => {
                last.push(' ');
                last.push_str(fragment);
            }
            _ => tokens.push(fragment.to_string()),
        }

        if fragment.starts_with('"') {
            quoted = true;
        }
        if fragment.ends_with('"') && !fragment.ends_with("\\\"") {
            quoted = false;
        }
    }

    tokens
}

/// Join tokens back into a command string with single spaces.
///
/// Lossy: quoting that [`tokenize`] did not preserve is not restored.
pub fn join(tokens: &[String]) -> String {
    tokens.join(" ")
}
