//! Canonical formatting of binary64 values.
//!
//! RFC 8785 requires the exact output of ECMAScript's `ToString` applied to
//! a `Number`: the shortest decimal digit string that round-trips under
//! nearest-even rounding, rendered either as plain decimal or in scientific
//! notation depending on where the decimal point falls, with a lowercase `e`
//! and an explicit `+` on non-negative exponents.
//!
//! The shortest digit string comes from `ryu`. Its notation choice does not
//! match ECMA-262, so the digits and decimal exponent are extracted first
//! and then re-rendered under the two-cutoff rule.

use crate::Error;

/// Append the canonical form of `value` to `out`.
///
/// `±0` both emit `0`. NaN and ±Infinity fail with
/// [`Error::UnrepresentableNumber`] before anything is written.
pub(crate) fn write_f64(value: f64, out: &mut Vec<u8>) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::UnrepresentableNumber);
    }
    if value == 0.0 {
        out.push(b'0');
        return Ok(());
    }
    if value.is_sign_negative() {
        out.push(b'-');
    }
    let mut buffer = ryu::Buffer::new();
    let shortest = buffer.format_finite(value.abs());
    let (digits, point) = decimal_parts(shortest);
    render(digits.as_slice(), point, out);
    Ok(())
}

/// Significant digits of a positive decimal, without leading or trailing
/// zeros. 17 digits suffice for any shortest binary64 representation; the
/// headroom absorbs zeros that are stripped only after collection.
struct Digits {
    buf: [u8; 24],
    len: usize,
}

impl Digits {
    fn new() -> Digits {
        Digits {
            buf: [0; 24],
            len: 0,
        }
    }

    fn push(&mut self, digit: u8) {
        self.buf[self.len] = digit;
        self.len += 1;
    }

    fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Split a `ryu` rendering into significant digits and the position `k` of
/// the decimal point, so that the value equals `0.<digits> × 10^k`.
fn decimal_parts(shortest: &str) -> (Digits, i32) {
    let (mantissa, exponent) = match shortest.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (
            mantissa,
            exponent.parse::<i32>().expect("ryu exponent is an integer"),
        ),
        None => (shortest, 0),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (mantissa, ""),
    };

    let mut digits = Digits::new();
    let mut point = int_part.len() as i32 + exponent;
    let mut seen_nonzero = false;
    for &byte in int_part.as_bytes().iter().chain(frac_part.as_bytes()) {
        if !seen_nonzero {
            if byte == b'0' {
                point -= 1;
                continue;
            }
            seen_nonzero = true;
        }
        digits.push(byte);
    }
    while digits.len > 0 && digits.buf[digits.len - 1] == b'0' {
        digits.len -= 1;
    }
    (digits, point)
}

/// ECMA-262 §6.1.6.1.13 notation selection over `n` digits and point
/// position `k`, with the JCS exponent format.
fn render(digits: &[u8], k: i32, out: &mut Vec<u8>) {
    let n = digits.len() as i32;
    if k > 0 && k <= 21 {
        if k >= n {
            // All digits before the point, then k - n zeros
            out.extend_from_slice(digits);
            for _ in n..k {
                out.push(b'0');
            }
        } else {
            out.extend_from_slice(&digits[..k as usize]);
            out.push(b'.');
            out.extend_from_slice(&digits[k as usize..]);
        }
    } else if k > -6 && k <= 0 {
        out.extend_from_slice(b"0.");
        for _ in k..0 {
            out.push(b'0');
        }
        out.extend_from_slice(digits);
    } else {
        out.push(digits[0]);
        if n > 1 {
            out.push(b'.');
            out.extend_from_slice(&digits[1..]);
        }
        out.push(b'e');
        let exponent = k - 1;
        if exponent >= 0 {
            out.push(b'+');
        }
        let mut buffer = itoa::Buffer::new();
        out.extend_from_slice(buffer.format(exponent).as_bytes());
    }
}
