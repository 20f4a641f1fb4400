//! PDF/PostScript token lexer.
//!
//! Splits small self-contained byte strings, such as a descriptor's
//! `/CharSet` value or a ToUnicode CMap, into a flat stream of [`Token`]s.
//! Nothing is nested here: arrays, dictionaries and procedures are reported
//! as their delimiter tokens and left to the caller.

use crate::error::BackendError;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Integer number (e.g., `42`, `-7`).
    Integer(i64),
    /// Real (floating-point) number (e.g., `3.14`, `.5`).
    Real(f64),
    /// Name (e.g., `/Agrave`). Stored without the leading `/`.
    Name(String),
    /// Literal string delimited by parentheses, stored as raw bytes.
    LiteralString(Vec<u8>),
    /// Hexadecimal string delimited by angle brackets, stored as decoded bytes.
    HexString(Vec<u8>),
    /// Any other run of regular characters (`def`, `beginbfchar`, `true`).
    Keyword(String),
    /// `[`
    ArrayStart,
    /// `]`
    ArrayEnd,
    /// `<<`
    DictStart,
    /// `>>`
    DictEnd,
    /// `{`
    ProcStart,
    /// `}`
    ProcEnd,
}

/// Streaming tokenizer over a byte slice.
///
/// Comments (`%` to end of line) and whitespace are skipped. After the first
/// error the lexer is exhausted.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a [u8],
    pos: usize,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            failed: false,
        }
    }

    /// Read the next token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Parse`] for unterminated strings, invalid hex
    /// digits, malformed numbers and stray closing delimiters.
    pub fn next_token(&mut self) -> Result<Option<Token>, BackendError> {
        if self.failed {
            return Ok(None);
        }
        let token = self.read_token();
        if token.is_err() {
            self.failed = true;
        }
        token
    }

    fn read_token(&mut self) -> Result<Option<Token>, BackendError> {
        let input = self.input;
        skip_whitespace_and_comments(input, &mut self.pos);
        let Some(&b) = input.get(self.pos) else {
            return Ok(None);
        };

        let token = match b {
            b'(' => Token::LiteralString(parse_literal_string(input, &mut self.pos)?),
            b'<' if input.get(self.pos + 1) == Some(&b'<') => {
                self.pos += 2;
                Token::DictStart
            }
            b'<' => Token::HexString(parse_hex_string(input, &mut self.pos)?),
            b'>' if input.get(self.pos + 1) == Some(&b'>') => {
                self.pos += 2;
                Token::DictEnd
            }
            b'[' | b']' | b'{' | b'}' => {
                self.pos += 1;
                match b {
                    b'[' => Token::ArrayStart,
                    b']' => Token::ArrayEnd,
                    b'{' => Token::ProcStart,
                    _ => Token::ProcEnd,
                }
            }
            b'/' => Token::Name(parse_name(input, &mut self.pos)),
            b'0'..=b'9' | b'+' | b'-' | b'.' => parse_number(input, &mut self.pos)?,
            b')' | b'>' => {
                return Err(BackendError::Parse(format!(
                    "unexpected '{}' at offset {}",
                    b as char, self.pos
                )));
            }
            _ => Token::Keyword(parse_keyword(input, &mut self.pos)),
        };
        Ok(Some(token))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, BackendError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

/// Returns `true` if `b` is a PDF whitespace character.
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | 0x0C | 0x00)
}

/// Returns `true` if `b` is a PDF delimiter character.
fn is_delimiter(b: u8) -> bool {
    matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%'
    )
}

fn is_regular(b: u8) -> bool {
    !is_whitespace(b) && !is_delimiter(b)
}

fn skip_whitespace_and_comments(input: &[u8], pos: &mut usize) {
    while let Some(&b) = input.get(*pos) {
        if is_whitespace(b) {
            *pos += 1;
        } else if b == b'%' {
            while input.get(*pos).is_some_and(|&c| c != b'\n' && c != b'\r') {
                *pos += 1;
            }
        } else {
            break;
        }
    }
}

/// Parse a literal string `(...)` with balanced parentheses and escape sequences.
fn parse_literal_string(input: &[u8], pos: &mut usize) -> Result<Vec<u8>, BackendError> {
    *pos += 1; // skip opening '('

    let mut result = Vec::new();
    let mut depth = 1u32;

    while let Some(&b) = input.get(*pos) {
        *pos += 1;
        match b {
            b'(' => {
                depth += 1;
                result.push(b);
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(result);
                }
                result.push(b);
            }
            b'\\' => {
                let Some(&escaped) = input.get(*pos) else {
                    break;
                };
                *pos += 1;
                match escaped {
                    b'n' => result.push(b'\n'),
                    b'r' => result.push(b'\r'),
                    b't' => result.push(b'\t'),
                    b'b' => result.push(0x08),
                    b'f' => result.push(0x0C),
                    // Line continuation
                    b'\r' => {
                        if input.get(*pos) == Some(&b'\n') {
                            *pos += 1;
                        }
                    }
                    b'\n' => {}
                    b'0'..=b'7' => {
                        let mut value = u32::from(escaped - b'0');
                        for _ in 0..2 {
                            match input.get(*pos) {
                                Some(&d @ b'0'..=b'7') => {
                                    value = value * 8 + u32::from(d - b'0');
                                    *pos += 1;
                                }
                                _ => break,
                            }
                        }
                        // High-order overflow is ignored.
                        result.push((value & 0xFF) as u8);
                    }
                    other => result.push(other),
                }
            }
            _ => result.push(b),
        }
    }

    Err(BackendError::Parse("unterminated literal string".to_string()))
}

/// Parse a hex string `<...>`. An odd final digit is padded with `0`.
fn parse_hex_string(input: &[u8], pos: &mut usize) -> Result<Vec<u8>, BackendError> {
    *pos += 1; // skip '<'

    let mut result = Vec::new();
    let mut high: Option<u8> = None;
    while let Some(&b) = input.get(*pos) {
        *pos += 1;
        if b == b'>' {
            if let Some(hi) = high {
                result.push(hi << 4);
            }
            return Ok(result);
        }
        if is_whitespace(b) {
            continue;
        }
        let digit = hex_digit(b).ok_or_else(|| {
            BackendError::Parse(format!("invalid hex digit in string: {:?}", b as char))
        })?;
        match high.take() {
            Some(hi) => result.push((hi << 4) | digit),
            None => high = Some(digit),
        }
    }

    Err(BackendError::Parse("unterminated hex string".to_string()))
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Parse a `/Name` token, decoding `#XX` escapes.
fn parse_name(input: &[u8], pos: &mut usize) -> String {
    *pos += 1; // skip '/'

    let start = *pos;
    while input.get(*pos).is_some_and(|&b| is_regular(b)) {
        *pos += 1;
    }

    let raw = &input[start..*pos];
    let mut name = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'#' {
            let escape = raw
                .get(i + 1)
                .and_then(|&h| hex_digit(h))
                .zip(raw.get(i + 2).and_then(|&l| hex_digit(l)));
            if let Some((hi, lo)) = escape {
                name.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        name.push(raw[i]);
        i += 1;
    }

    String::from_utf8_lossy(&name).into_owned()
}

/// Parse a number (integer or real).
fn parse_number(input: &[u8], pos: &mut usize) -> Result<Token, BackendError> {
    let start = *pos;
    while input.get(*pos).is_some_and(|&b| is_regular(b)) {
        *pos += 1;
    }

    let text = std::str::from_utf8(&input[start..*pos])
        .map_err(|_| BackendError::Parse("invalid UTF-8 in number token".to_string()))?;

    if let Ok(value) = text.parse::<i64>() {
        return Ok(Token::Integer(value));
    }
    let is_real = text.contains('.')
        && text
            .bytes()
            .enumerate()
            .all(|(i, b)| b.is_ascii_digit() || b == b'.' || (i == 0 && matches!(b, b'+' | b'-')));
    match text.parse::<f64>() {
        Ok(value) if is_real => Ok(Token::Real(value)),
        _ => Err(BackendError::Parse(format!("invalid number: {text}"))),
    }
}

fn parse_keyword(input: &[u8], pos: &mut usize) -> String {
    let start = *pos;
    while input.get(*pos).is_some_and(|&b| is_regular(b)) {
        *pos += 1;
    }
    String::from_utf8_lossy(&input[start..*pos]).into_owned()
}
