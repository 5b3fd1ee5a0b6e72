//! Strict RFC 8259 parsing into the value model.
//!
//! The parser accepts exactly the JSON grammar: no comments, no trailing
//! commas, no leading zeros, no BOM, no lone surrogates. Errors carry the
//! byte offset where parsing stopped. Number tokens keep the integer/float
//! distinction the encoder relies on: a token without fraction or exponent
//! that fits in `i64` becomes [`Number::Integer`], everything else is parsed
//! to the nearest binary64.

use ahash::AHashSet;

use crate::{
    value::{JsonValue, Number},
    CanonicalizeOptions, DuplicateKeys, Error,
};

pub(crate) fn parse(input: &[u8], options: &CanonicalizeOptions) -> Result<JsonValue, Error> {
    let src = std::str::from_utf8(input).map_err(|error| Error::Parse {
        offset: error.valid_up_to(),
        reason: "invalid UTF-8",
    })?;
    let mut parser = Parser {
        src,
        bytes: input,
        pos: 0,
        remaining_depth: options.max_depth,
        duplicate_keys: options.duplicate_keys,
    };
    parser.parse_document()
}

struct Parser<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    remaining_depth: usize,
    duplicate_keys: DuplicateKeys,
}

impl<'a> Parser<'a> {
    fn parse_document(&mut self) -> Result<JsonValue, Error> {
        self.skip_ws();
        let value = self.parse_value()?;
        self.skip_ws();
        if self.pos < self.bytes.len() {
            return Err(self.error("unexpected data after top-level value"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<JsonValue, Error> {
        match self.peek() {
            Some(b'n') => {
                self.expect_keyword("null")?;
                Ok(JsonValue::Null)
            }
            Some(b't') => {
                self.expect_keyword("true")?;
                Ok(JsonValue::Bool(true))
            }
            Some(b'f') => {
                self.expect_keyword("false")?;
                Ok(JsonValue::Bool(false))
            }
            Some(b'"') => Ok(JsonValue::String(self.parse_string()?.into())),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(_) => Err(self.error("unexpected token")),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn parse_array(&mut self) -> Result<JsonValue, Error> {
        self.expect_byte(b'[')?;
        self.enter_nested()?;
        self.skip_ws();

        let mut items = Vec::new();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.remaining_depth += 1;
            return Ok(JsonValue::Array(items.into_boxed_slice()));
        }

        loop {
            items.push(self.parse_value()?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_ws();
                }
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.error("expected ',' or ']' in array")),
            }
        }

        self.remaining_depth += 1;
        Ok(JsonValue::Array(items.into_boxed_slice()))
    }

    fn parse_object(&mut self) -> Result<JsonValue, Error> {
        self.expect_byte(b'{')?;
        self.enter_nested()?;
        self.skip_ws();

        let mut members: Vec<(Box<str>, JsonValue)> = Vec::new();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.remaining_depth += 1;
            return Ok(JsonValue::Object(members.into_boxed_slice()));
        }

        let mut seen: AHashSet<Box<str>> = AHashSet::new();
        loop {
            if self.peek() != Some(b'"') {
                return Err(self.error("expected object key"));
            }
            let key: Box<str> = self.parse_string()?.into();
            self.skip_ws();
            self.expect_byte(b':')?;
            self.skip_ws();
            let value = self.parse_value()?;

            if seen.insert(key.clone()) {
                members.push((key, value));
            } else {
                match self.duplicate_keys {
                    DuplicateKeys::Reject => return Err(Error::DuplicateKey { key }),
                    DuplicateKeys::LastWins => {
                        let slot = members
                            .iter_mut()
                            .find(|(existing, _)| *existing == key)
                            .expect("key was seen before");
                        slot.1 = value;
                    }
                }
            }

            self.skip_ws();
            match self.peek() {
                Some(b',') => {
                    self.pos += 1;
                    self.skip_ws();
                }
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.error("expected ',' or '}' in object")),
            }
        }

        self.remaining_depth += 1;
        Ok(JsonValue::Object(members.into_boxed_slice()))
    }

    fn parse_string(&mut self) -> Result<String, Error> {
        self.expect_byte(b'"')?;
        let mut out = String::new();
        let mut chunk_start = self.pos;

        while let Some(byte) = self.peek() {
            match byte {
                b'"' => {
                    // Chunk boundaries are ASCII bytes, so slicing the
                    // validated source is always on a char boundary.
                    out.push_str(&self.src[chunk_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.src[chunk_start..self.pos]);
                    self.pos += 1;
                    out.push(self.parse_escape()?);
                    chunk_start = self.pos;
                }
                0x00..=0x1F => {
                    return Err(self.error("control character in string literal"));
                }
                _ => {
                    self.pos += 1;
                }
            }
        }

        Err(self.error("unterminated string literal"))
    }

    fn parse_escape(&mut self) -> Result<char, Error> {
        let Some(byte) = self.next_byte() else {
            return Err(self.error("unterminated escape sequence"));
        };
        match byte {
            b'"' => Ok('"'),
            b'\\' => Ok('\\'),
            b'/' => Ok('/'),
            b'b' => Ok('\u{08}'),
            b'f' => Ok('\u{0C}'),
            b'n' => Ok('\n'),
            b'r' => Ok('\r'),
            b't' => Ok('\t'),
            b'u' => self.parse_unicode_escape(),
            _ => Err(self.error("invalid escape sequence")),
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<char, Error> {
        let first = self.parse_hex4()?;

        if (0xD800..=0xDBFF).contains(&first) {
            if self.peek() != Some(b'\\') {
                return Err(self.error("unpaired high surrogate in string"));
            }
            self.pos += 1;
            if self.next_byte() != Some(b'u') {
                return Err(self.error("unpaired high surrogate in string"));
            }
            let second = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(self.error("unpaired high surrogate in string"));
            }
            let scalar = 0x10000 + (((first - 0xD800) << 10) | (second - 0xDC00));
            return char::from_u32(scalar).ok_or_else(|| self.error("invalid Unicode scalar"));
        }

        if (0xDC00..=0xDFFF).contains(&first) {
            return Err(self.error("unpaired low surrogate in string"));
        }

        char::from_u32(first).ok_or_else(|| self.error("invalid Unicode scalar"))
    }

    fn parse_hex4(&mut self) -> Result<u32, Error> {
        let mut value: u32 = 0;
        for _ in 0..4 {
            let Some(byte) = self.next_byte() else {
                return Err(self.error("incomplete unicode escape"));
            };
            let digit = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                b'A'..=b'F' => byte - b'A' + 10,
                _ => return Err(self.error("invalid hex digit in unicode escape")),
            };
            value = (value << 4) | u32::from(digit);
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<JsonValue, Error> {
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if let Some(b'0'..=b'9') = self.peek() {
                    return Err(self.error("leading zero in number"));
                }
            }
            Some(b'1'..=b'9') => {
                self.pos += 1;
                while let Some(b'0'..=b'9') = self.peek() {
                    self.pos += 1;
                }
            }
            _ => return Err(self.error("invalid number")),
        }

        let mut is_float = false;

        if self.peek() == Some(b'.') {
            is_float = true;
            self.pos += 1;
            let frac_start = self.pos;
            while let Some(b'0'..=b'9') = self.peek() {
                self.pos += 1;
            }
            if self.pos == frac_start {
                return Err(self.error("missing digits after decimal point"));
            }
        }

        if matches!(self.peek(), Some(b'e' | b'E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            let exp_start = self.pos;
            while let Some(b'0'..=b'9') = self.peek() {
                self.pos += 1;
            }
            if self.pos == exp_start {
                return Err(self.error("missing exponent digits"));
            }
        }

        let token = &self.src[start..self.pos];
        if !is_float {
            // Integer tokens beyond i64 fall through to the float path and
            // render via shortest-round-trip formatting, as ECMAScript does.
            if let Ok(value) = token.parse::<i64>() {
                return Ok(JsonValue::Number(Number::Integer(value)));
            }
        }
        let value = token
            .parse::<f64>()
            .map_err(|_| self.error("invalid floating-point number"))?;
        if !value.is_finite() {
            return Err(Error::UnrepresentableNumber);
        }
        Ok(JsonValue::Number(Number::Float(value)))
    }

    fn expect_keyword(&mut self, keyword: &'static str) -> Result<(), Error> {
        let end = self.pos + keyword.len();
        if end > self.bytes.len() || &self.bytes[self.pos..end] != keyword.as_bytes() {
            return Err(self.error("invalid literal"));
        }
        self.pos = end;
        Ok(())
    }

    fn expect_byte(&mut self, expected: u8) -> Result<(), Error> {
        match self.peek() {
            Some(byte) if byte == expected => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.error("unexpected token")),
        }
    }

    fn enter_nested(&mut self) -> Result<(), Error> {
        if self.remaining_depth == 0 {
            return Err(self.error("maximum nesting depth exceeded"));
        }
        self.remaining_depth -= 1;
        Ok(())
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn next_byte(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn skip_ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn error(&self, reason: &'static str) -> Error {
        Error::Parse {
            offset: self.pos,
            reason,
        }
    }
}
