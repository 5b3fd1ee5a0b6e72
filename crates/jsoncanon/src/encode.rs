use crate::{
    escape::write_escaped,
    numeric::write_f64,
    sort::cmp_keys,
    value::{JsonValue, Number},
    Error,
};

/// Append the canonical encoding of `value` to `out`.
///
/// Arrays keep their element order; objects are emitted in UTF-16 key order
/// regardless of how they were built. No whitespace is produced outside
/// string literals.
pub(crate) fn write_value(value: &JsonValue, out: &mut Vec<u8>) -> Result<(), Error> {
    match value {
        JsonValue::Null => out.extend_from_slice(b"null"),
        JsonValue::Bool(true) => out.extend_from_slice(b"true"),
        JsonValue::Bool(false) => out.extend_from_slice(b"false"),
        JsonValue::Number(Number::Integer(value)) => {
            let mut buffer = itoa::Buffer::new();
            out.extend_from_slice(buffer.format(*value).as_bytes());
        }
        JsonValue::Number(Number::Float(value)) => write_f64(*value, out)?,
        JsonValue::String(s) => write_escaped(s, out),
        JsonValue::Array(items) => {
            out.push(b'[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_value(item, out)?;
            }
            out.push(b']');
        }
        JsonValue::Object(members) => {
            let mut members: Vec<&(Box<str>, JsonValue)> = members.iter().collect();
            members.sort_by(|(a, _), (b, _)| cmp_keys(a, b));
            // Equal keys sort adjacent, so uniqueness is checked on the
            // sorted view before anything is emitted.
            for window in members.windows(2) {
                if window[0].0 == window[1].0 {
                    return Err(Error::DuplicateKey {
                        key: window[0].0.clone(),
                    });
                }
            }
            out.push(b'{');
            for (index, (key, value)) in members.into_iter().enumerate() {
                if index > 0 {
                    out.push(b',');
                }
                write_escaped(key, out);
                out.push(b':');
                write_value(value, out)?;
            }
            out.push(b'}');
        }
    }
    Ok(())
}
