//! ToUnicode CMap parser for mapping character codes to Unicode strings.
//!
//! Parses CMap data embedded in PDF `/ToUnicode` streams. Supports
//! `beginbfchar`/`endbfchar` (single mappings) and `beginbfrange`/`endbfrange`
//! (range mappings, including the array form) with UTF-16BE encoded values.
//! Everything outside those sections (`codespacerange`, `/CIDSystemInfo`,
//! resource boilerplate) is skipped.

use std::collections::HashMap;

use crate::error::BackendError;
use crate::lexer::{Lexer, Token};

/// Largest number of codes a single `bfrange` entry may expand to.
const MAX_RANGE_LEN: u32 = 0x1_0000;

/// A parsed ToUnicode CMap that maps character codes to Unicode strings.
///
/// Unicode values may be single characters or multi-character strings
/// (e.g., ligatures like "fi" → "fi").
#[derive(Debug, Clone, Default)]
pub struct ToUnicodeMap {
    mappings: HashMap<u32, String>,
}

impl ToUnicodeMap {
    /// Parse a ToUnicode CMap from its raw byte content.
    ///
    /// Entries whose destination is empty or not valid UTF-16BE are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Parse`] if the data cannot be tokenized.
    pub fn parse(data: &[u8]) -> Result<Self, BackendError> {
        let mut mappings = HashMap::new();
        let mut lexer = Lexer::new(data);

        while let Some(token) = lexer.next_token()? {
            match token {
                Token::Keyword(kw) if kw == "beginbfchar" => {
                    parse_bfchar_section(&mut lexer, &mut mappings)?;
                }
                Token::Keyword(kw) if kw == "beginbfrange" => {
                    parse_bfrange_section(&mut lexer, &mut mappings)?;
                }
                _ => {}
            }
        }

        Ok(Self { mappings })
    }

    /// Look up the Unicode string for a character code.
    ///
    /// Returns `None` if the code has no mapping in this CMap.
    pub fn lookup(&self, code: u32) -> Option<&str> {
        self.mappings.get(&code).map(String::as_str)
    }

    /// Returns the number of mappings in this CMap.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if this CMap has no mappings.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Parse `<src> <dst>` pairs up to `endbfchar`.
fn parse_bfchar_section(
    lexer: &mut Lexer<'_>,
    mappings: &mut HashMap<u32, String>,
) -> Result<(), BackendError> {
    loop {
        let Some(src) = lexer.next_token()? else {
            return Ok(());
        };
        let src = match src {
            Token::Keyword(kw) if kw == "endbfchar" => return Ok(()),
            Token::HexString(bytes) => source_code(&bytes),
            _ => continue,
        };
        let Some(dst) = lexer.next_token()? else {
            return Ok(());
        };
        if let (Some(code), Token::HexString(bytes)) = (src, dst) {
            insert(mappings, code, decode_utf16be(&bytes));
        }
    }
}

/// Parse `<lo> <hi> <dst>` and `<lo> <hi> [<dst> ...]` entries up to
/// `endbfrange`.
fn parse_bfrange_section(
    lexer: &mut Lexer<'_>,
    mappings: &mut HashMap<u32, String>,
) -> Result<(), BackendError> {
    loop {
        let Some(first) = lexer.next_token()? else {
            return Ok(());
        };
        let low = match first {
            Token::Keyword(kw) if kw == "endbfrange" => return Ok(()),
            Token::HexString(bytes) => source_code(&bytes),
            _ => continue,
        };
        let high = match lexer.next_token()? {
            Some(Token::HexString(bytes)) => source_code(&bytes),
            Some(_) => None,
            None => return Ok(()),
        };
        let Some(dst) = lexer.next_token()? else {
            return Ok(());
        };

        let range = low
            .zip(high)
            .filter(|&(lo, hi)| lo <= hi && hi - lo < MAX_RANGE_LEN);
        match dst {
            Token::HexString(bytes) => {
                let Some((lo, hi)) = range else { continue };
                let Some(units) = utf16_units(&bytes) else { continue };
                for offset in 0..=(hi - lo) {
                    insert(mappings, lo + offset, incremented(&units, offset));
                }
            }
            Token::ArrayStart => {
                let mut code = range.map(|(lo, _)| lo);
                loop {
                    match lexer.next_token()? {
                        Some(Token::ArrayEnd) | None => break,
                        Some(Token::HexString(bytes)) => {
                            if let (Some(c), Some((_, hi))) = (code, range) {
                                insert(mappings, c, decode_utf16be(&bytes));
                                code = c.checked_add(1).filter(|&next| next <= hi);
                            }
                        }
                        Some(_) => {}
                    }
                }
            }
            _ => {}
        }
    }
}

fn insert(mappings: &mut HashMap<u32, String>, code: u32, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        mappings.insert(code, value);
    }
}

/// Big-endian value of a source code of up to four bytes.
fn source_code(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 4 {
        return None;
    }
    Some(bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
}

/// Split UTF-16BE bytes into code units. A lone byte is read as one unit.
fn utf16_units(bytes: &[u8]) -> Option<Vec<u16>> {
    match bytes.len() {
        0 => None,
        1 => Some(vec![u16::from(bytes[0])]),
        n if n % 2 == 0 => Some(
            bytes
                .chunks_exact(2)
                .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                .collect(),
        ),
        _ => None,
    }
}

fn decode_utf16be(bytes: &[u8]) -> Option<String> {
    utf16_units(bytes).and_then(|units| String::from_utf16(&units).ok())
}

/// The destination of a range entry `offset` codes past its start: the last
/// code unit is incremented.
fn incremented(units: &[u16], offset: u32) -> Option<String> {
    let (&last, rest) = units.split_last()?;
    let last = u16::try_from(u32::from(last) + offset).ok()?;
    let mut units = rest.to_vec();
    units.push(last);
    String::from_utf16(&units).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cmap_returns_none() {
        let cmap = ToUnicodeMap::parse(b"").unwrap();
        assert!(cmap.is_empty());
        assert_eq!(cmap.len(), 0);
        assert_eq!(cmap.lookup(0x41), None);
    }

    #[test]
    fn bfchar_single_mappings() {
        let data = b"2 beginbfchar\n<41> <0041>\n<42> <0042>\nendbfchar";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(0x41), Some("A"));
        assert_eq!(cmap.lookup(0x42), Some("B"));
        assert_eq!(cmap.len(), 2);
    }

    #[test]
    fn bfchar_ligature_and_surrogate_pair() {
        let data = b"beginbfchar <01> <00660069> <02> <D835DC00> endbfchar";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(1), Some("fi"));
        assert_eq!(cmap.lookup(2), Some("\u{1D400}"));
    }

    #[test]
    fn bfchar_single_byte_destination() {
        let cmap = ToUnicodeMap::parse(b"beginbfchar <20> <41> endbfchar").unwrap();
        assert_eq!(cmap.lookup(0x20), Some("A"));
    }

    #[test]
    fn empty_destination_is_dropped() {
        let cmap = ToUnicodeMap::parse(b"beginbfchar <20> <> <21> <0021> endbfchar").unwrap();
        assert_eq!(cmap.lookup(0x20), None);
        assert_eq!(cmap.lookup(0x21), Some("!"));
    }

    #[test]
    fn unpaired_surrogate_is_dropped() {
        let cmap = ToUnicodeMap::parse(b"beginbfchar <20> <D800> endbfchar").unwrap();
        assert!(cmap.is_empty());
    }

    #[test]
    fn bfrange_incrementing_destination() {
        let data = b"1 beginbfrange <61> <63> <0041> endbfrange";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(0x61), Some("A"));
        assert_eq!(cmap.lookup(0x62), Some("B"));
        assert_eq!(cmap.lookup(0x63), Some("C"));
        assert_eq!(cmap.lookup(0x64), None);
    }

    #[test]
    fn bfrange_increments_last_code_unit_only() {
        let data = b"beginbfrange <01> <02> <00660069> endbfrange";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(1), Some("fi"));
        assert_eq!(cmap.lookup(2), Some("fj"));
    }

    #[test]
    fn bfrange_array_destination() {
        let data = b"beginbfrange <10> <12> [<0058> <00660066> <005A>] endbfrange";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(0x10), Some("X"));
        assert_eq!(cmap.lookup(0x11), Some("ff"));
        assert_eq!(cmap.lookup(0x12), Some("Z"));
    }

    #[test]
    fn bfrange_array_longer_than_range_is_truncated() {
        let data = b"beginbfrange <10> <10> [<0058> <0059>] endbfrange";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(0x10), Some("X"));
        assert_eq!(cmap.lookup(0x11), None);
    }

    #[test]
    fn inverted_range_is_skipped() {
        let data = b"beginbfrange <63> <61> <0041> <70> <70> <0050> endbfrange";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.len(), 1);
        assert_eq!(cmap.lookup(0x70), Some("P"));
    }

    #[test]
    fn two_byte_source_codes() {
        let data = b"beginbfchar <0102> <0041> endbfchar";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(0x0102), Some("A"));
    }

    #[test]
    fn full_cmap_with_boilerplate() {
        let data = b"/CIDInit /ProcSet findresource begin\n\
            12 dict begin\n\
            begincmap\n\
            /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
            /CMapName /Adobe-Identity-UCS def\n\
            /CMapType 2 def\n\
            1 begincodespacerange <00> <FF> endcodespacerange\n\
            1 beginbfchar <20> <0020> endbfchar\n\
            1 beginbfrange <41> <42> <0061> endbfrange\n\
            endcmap CMapName currentdict /CMap defineresource pop end end";
        let cmap = ToUnicodeMap::parse(data).unwrap();
        assert_eq!(cmap.lookup(0x20), Some(" "));
        assert_eq!(cmap.lookup(0x41), Some("a"));
        assert_eq!(cmap.lookup(0x42), Some("b"));
        assert_eq!(cmap.lookup(0x00), None);
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(ToUnicodeMap::parse(b"beginbfchar <20> (abc").is_err());
    }
}
