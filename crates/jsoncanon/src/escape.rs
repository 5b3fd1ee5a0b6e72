const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Append `s` as a JSON string literal in canonical form.
///
/// The escape set is fixed by RFC 8785: the two-character escapes for the
/// characters that have them, `\u00xx` with lowercase hex for the remaining
/// C0 controls, and everything else as raw UTF-8. In particular `/` is not
/// escaped and no non-ASCII character is turned into a `\uXXXX` sequence.
pub(crate) fn write_escaped(s: &str, out: &mut Vec<u8>) {
    out.push(b'"');
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escape: &[u8] = match byte {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            0x08 => b"\\b",
            0x09 => b"\\t",
            0x0A => b"\\n",
            0x0C => b"\\f",
            0x0D => b"\\r",
            0x00..=0x1F => b"",
            // ASCII above 0x1F and continuation/multi-byte UTF-8 are verbatim
            _ => continue,
        };
        out.extend_from_slice(&bytes[start..i]);
        if escape.is_empty() {
            out.extend_from_slice(b"\\u00");
            out.push(HEX_DIGITS[usize::from(byte >> 4)]);
            out.push(HEX_DIGITS[usize::from(byte & 0x0F)]);
        } else {
            out.extend_from_slice(escape);
        }
        start = i + 1;
    }
    out.extend_from_slice(&bytes[start..]);
    out.push(b'"');
}
