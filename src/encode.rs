// Byte → C declaration encoding
//
// Every byte becomes a `'\xHH'` char literal (lowercase hex), tokens are joined
// with ", " and wrapped into a single line:
//
//     constexpr char <identifier>[] = { '\x03', '\x02', ... };
//
// The decode side parses that line back and exists to check round-trips.

use crate::error::DecodeError;

const DECL_PREFIX: &str = "constexpr char ";
const DECL_OPEN: &str = "[] = { ";
const DECL_CLOSE: &str = " };";
const SEPARATOR: &str = ", ";

/// Length of one `'\xHH'` token
const TOKEN_LEN: usize = 6;

/// Token for a single byte: `'\xHH'`.
pub fn byte_token(byte: u8) -> String {
    format!("'\\x{:02x}'", byte)
}

/// One token per byte, same order.
pub fn encode_tokens(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|&b| byte_token(b)).collect()
}

/// Tokens joined by `, `. Empty input gives an empty string.
pub fn render_body(bytes: &[u8]) -> String {
    let mut body = String::with_capacity(bytes.len() * (TOKEN_LEN + SEPARATOR.len()));
    for (i, &byte) in bytes.iter().enumerate() {
        if i > 0 {
            body.push_str(SEPARATOR);
        }
        body.push_str(&byte_token(byte));
    }
    body
}

/// Full declaration line, trailing newline included.
///
/// An empty buffer keeps both spaces inside the braces: `{  }`.
pub fn render_declaration(identifier: &str, bytes: &[u8]) -> String {
    format!(
        "{}{}{}{}{}\n",
        DECL_PREFIX,
        identifier,
        DECL_OPEN,
        render_body(bytes),
        DECL_CLOSE
    )
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Parse a `render_body` string back into bytes.
pub fn decode_body(body: &str) -> Result<Vec<u8>, DecodeError> {
    if body.is_empty() {
        return Ok(Vec::new());
    }
    body.split(SEPARATOR)
        .enumerate()
        .map(|(index, token)| {
            decode_token(token).ok_or_else(|| DecodeError::BadToken {
                index,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parse a full declaration line into `(identifier, bytes)`.
pub fn decode_declaration(line: &str) -> Result<(String, Vec<u8>), DecodeError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let rest = line.strip_prefix(DECL_PREFIX).ok_or(DecodeError::Malformed)?;
    let open = rest.find(DECL_OPEN).ok_or(DecodeError::Malformed)?;
    let identifier = &rest[..open];
    let body = rest[open + DECL_OPEN.len()..]
        .strip_suffix(DECL_CLOSE)
        .ok_or(DecodeError::Malformed)?;
    Ok((identifier.to_string(), decode_body(body)?))
}

fn decode_token(token: &str) -> Option<u8> {
    if token.len() != TOKEN_LEN {
        return None;
    }
    let hex = token.strip_prefix("'\\x")?.strip_suffix('\'')?;
    if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}
