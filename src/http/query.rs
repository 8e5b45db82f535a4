//! Query string parsing module
//!
//! Parses `key=value&key=value` query strings with percent-decoding,
//! as submitted by GET forms.

use std::collections::HashMap;

/// Parse a raw query string into a key/value map.
///
/// Keys and values are percent-decoded and `+` is treated as a space.
/// Pairs without `=` become keys with an empty value; on duplicate keys
/// the last occurrence wins.
pub fn parse_query(raw: Option<&str>) -> HashMap<String, String> {
    let Some(raw) = raw else {
        return HashMap::new();
    };

    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (url_decode(key), url_decode(value)),
            None => (url_decode(pair), String::new()),
        })
        .collect()
}

/// Decode percent-encoded input, mapping `+` to a space.
///
/// Malformed escapes (`%zz`, truncated `%`) are passed through verbatim
/// rather than rejected, matching lenient browser behavior.
fn url_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match decode_hex_pair(bytes.get(i + 1), bytes.get(i + 2)) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn decode_hex_pair(hi: Option<&u8>, lo: Option<&u8>) -> Option<u8> {
    let hi = (*hi? as char).to_digit(16)?;
    let lo = (*lo? as char).to_digit(16)?;
    u8::try_from(hi * 16 + lo).ok()
}
