//! Glyph-name encodings for simple fonts.
//!
//! Provides the predefined code → glyph-name tables ([`BaseEncoding`]), the
//! `/Differences` override read from a font's encoding dictionary
//! ([`EncodingOverride`]), and the effective mapping a font ends up with once
//! the override is layered over its base table ([`EncodingMapping`]).

use std::collections::BTreeMap;

/// Name of the glyph used for undefined character codes.
pub const NOTDEF: &str = ".notdef";

/// A predefined 256-slot code → glyph-name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseEncoding {
    /// Adobe StandardEncoding, the built-in encoding of the Latin standard fonts.
    Standard,
    /// WinAnsiEncoding (Windows code page 1252).
    WinAnsi,
    /// MacRomanEncoding.
    MacRoman,
    /// MacExpertEncoding (small capitals, old-style figures, fractions).
    MacExpert,
    /// Built-in encoding of the Symbol font.
    Symbol,
    /// Built-in encoding of the ZapfDingbats font.
    ZapfDingbats,
}

impl BaseEncoding {
    /// Resolve a PDF encoding name such as `WinAnsiEncoding`.
    ///
    /// `StandardEncoding` is accepted even though PDF never defines it as a
    /// name value; producers write it anyway.
    pub fn from_pdf_name(name: &[u8]) -> Option<Self> {
        match name {
            b"StandardEncoding" => Some(Self::Standard),
            b"WinAnsiEncoding" => Some(Self::WinAnsi),
            b"MacRomanEncoding" => Some(Self::MacRoman),
            b"MacExpertEncoding" => Some(Self::MacExpert),
            _ => None,
        }
    }

    /// Returns true for the tables a `/BaseEncoding` entry may name.
    pub fn is_declarable(self) -> bool {
        matches!(self, Self::WinAnsi | Self::MacRoman | Self::MacExpert)
    }

    fn table(self) -> &'static [&'static str; 256] {
        match self {
            Self::Standard => &STANDARD,
            Self::WinAnsi => &WIN_ANSI,
            Self::MacRoman => &MAC_ROMAN,
            Self::MacExpert => &MAC_EXPERT,
            Self::Symbol => &SYMBOL,
            Self::ZapfDingbats => &ZAPF_DINGBATS,
        }
    }

    /// Glyph name assigned to `code`, or `None` for an unassigned slot.
    pub fn glyph_name(self, code: u8) -> Option<&'static str> {
        let name = self.table()[usize::from(code)];
        (!name.is_empty()).then_some(name)
    }

    /// Lowest code assigned to `name`.
    pub fn code_for(self, name: &str) -> Option<u8> {
        if name.is_empty() {
            return None;
        }
        self.table()
            .iter()
            .position(|&entry| entry == name)
            .and_then(|code| u8::try_from(code).ok())
    }

    /// Returns true if any code of this table maps to `name`.
    pub fn contains(self, name: &str) -> bool {
        self.code_for(name).is_some()
    }
}

/// Glyphs of the Latin character set that only PDFDocEncoding assigns.
const PDF_DOC_ONLY: &[&str] = &["minus"];

/// Returns true if `name` belongs to the standard Latin character set: every
/// glyph named by StandardEncoding, WinAnsiEncoding, MacRomanEncoding or
/// PDFDocEncoding.
///
/// `.notdef` is a member.
pub fn is_standard_latin_glyph(name: &str) -> bool {
    name == NOTDEF
        || [BaseEncoding::Standard, BaseEncoding::WinAnsi, BaseEncoding::MacRoman]
            .into_iter()
            .any(|encoding| encoding.contains(name))
        || PDF_DOC_ONLY.contains(&name)
}

/// Returns true if `name` is one of the glyphs of the Symbol font.
pub fn is_symbol_glyph(name: &str) -> bool {
    BaseEncoding::Symbol.contains(name)
}

/// One operand of a `/Differences` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DifferenceItem {
    /// Starts a run at this code.
    Code(i64),
    /// Assigned to the current code, which then advances by one.
    Name(String),
}

/// A font encoding dictionary: `/Differences` entries layered over an
/// optional declared `/BaseEncoding`.
///
/// The declared base is kept as written, so an unrecognized name stays
/// distinguishable from an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodingOverride {
    base_name: Option<String>,
    differences: BTreeMap<u32, String>,
}

impl EncodingOverride {
    /// Create an override with the given declared base and no differences.
    pub fn new(base_name: Option<String>) -> Self {
        Self {
            base_name,
            differences: BTreeMap::new(),
        }
    }

    /// Build an override from the operands of a `/Differences` array.
    ///
    /// Each code starts a run and following names take consecutive codes.
    /// Names before the first code and negative codes are skipped. A later
    /// entry for the same code replaces an earlier one.
    pub fn from_differences(
        base_name: Option<String>,
        items: impl IntoIterator<Item = DifferenceItem>,
    ) -> Self {
        let mut encoding = Self::new(base_name);
        let mut next: Option<u32> = None;
        for item in items {
            match item {
                DifferenceItem::Code(code) => next = u32::try_from(code).ok(),
                DifferenceItem::Name(name) => {
                    if let Some(code) = next {
                        encoding.differences.insert(code, name);
                        next = code.checked_add(1);
                    }
                }
            }
        }
        encoding
    }

    /// Add a single difference entry, returning the modified override.
    pub fn with_difference(mut self, code: u32, name: impl Into<String>) -> Self {
        self.differences.insert(code, name.into());
        self
    }

    /// The `/BaseEncoding` name as declared, if any.
    pub fn base_name(&self) -> Option<&str> {
        self.base_name.as_deref()
    }

    /// The declared base resolved to a predefined table.
    pub fn base(&self) -> Option<BaseEncoding> {
        self.base_name
            .as_deref()
            .and_then(|name| BaseEncoding::from_pdf_name(name.as_bytes()))
    }

    /// Code → glyph-name entries, ordered by code.
    pub fn differences(&self) -> &BTreeMap<u32, String> {
        &self.differences
    }

    /// Glyph name the differences assign to `code`.
    pub fn name_for_code(&self, code: u32) -> Option<&str> {
        self.differences.get(&code).map(String::as_str)
    }
}

/// The effective code → glyph-name mapping of a font: differences first,
/// then the base table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingMapping {
    base: Option<BaseEncoding>,
    differences: BTreeMap<u32, String>,
}

impl EncodingMapping {
    /// A mapping that resolves every code through `base`.
    pub fn from_base(base: BaseEncoding) -> Self {
        Self {
            base: Some(base),
            differences: BTreeMap::new(),
        }
    }

    /// Layer `differences` over `base`.
    pub fn new(base: Option<BaseEncoding>, differences: BTreeMap<u32, String>) -> Self {
        Self { base, differences }
    }

    /// A mapping that names no code at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn base(&self) -> Option<BaseEncoding> {
        self.base
    }

    /// Returns true if no code resolves to a glyph name.
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.differences.is_empty()
    }

    /// Glyph name for `code`.
    pub fn name_for_code(&self, code: u32) -> Option<&str> {
        if let Some(name) = self.differences.get(&code) {
            return Some(name);
        }
        let base = self.base?;
        u8::try_from(code).ok().and_then(|c| base.glyph_name(c))
    }
}

// =============================================================================
// Predefined tables. Empty strings mark unassigned codes.
// =============================================================================

// Adobe StandardEncoding.
#[rustfmt::skip]
static STANDARD: [&str; 256] = [
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 32
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand", "quoteright",
    "parenleft", "parenright", "asterisk", "plus", "comma", "hyphen", "period", "slash",
    "zero", "one", "two", "three", "four", "five", "six", "seven",
    "eight", "nine", "colon", "semicolon", "less", "equal", "greater", "question",
    // 64
    "at", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z", "bracketleft", "backslash", "bracketright", "asciicircum", "underscore",
    // 96
    "quoteleft", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w",
    "x", "y", "z", "braceleft", "bar", "braceright", "asciitilde", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 160
    "", "exclamdown", "cent", "sterling", "fraction", "yen", "florin", "section",
    "currency", "quotesingle", "quotedblleft", "guillemotleft", "guilsinglleft", "guilsinglright", "fi", "fl",
    "", "endash", "dagger", "daggerdbl", "periodcentered", "", "paragraph", "bullet",
    "quotesinglbase", "quotedblbase", "quotedblright", "guillemotright", "ellipsis", "perthousand", "", "questiondown",
    // 192
    "", "grave", "acute", "circumflex", "tilde", "macron", "breve", "dotaccent",
    "dieresis", "", "ring", "cedilla", "", "hungarumlaut", "ogonek", "caron",
    "emdash", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 224
    "", "AE", "", "ordfeminine", "", "", "", "",
    "Lslash", "Oslash", "OE", "ordmasculine", "", "", "", "",
    "", "ae", "", "", "", "dotlessi", "", "",
    "lslash", "oslash", "oe", "germandbls", "", "", "", "",
];

// WinAnsiEncoding. Undefined cp1252 slots are unassigned.
#[rustfmt::skip]
static WIN_ANSI: [&str; 256] = [
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 32
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand", "quotesingle",
    "parenleft", "parenright", "asterisk", "plus", "comma", "hyphen", "period", "slash",
    "zero", "one", "two", "three", "four", "five", "six", "seven",
    "eight", "nine", "colon", "semicolon", "less", "equal", "greater", "question",
    // 64
    "at", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z", "bracketleft", "backslash", "bracketright", "asciicircum", "underscore",
    // 96
    "grave", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w",
    "x", "y", "z", "braceleft", "bar", "braceright", "asciitilde", "",
    // 128
    "Euro", "", "quotesinglbase", "florin", "quotedblbase", "ellipsis", "dagger", "daggerdbl",
    "circumflex", "perthousand", "Scaron", "guilsinglleft", "OE", "", "Zcaron", "",
    "", "quoteleft", "quoteright", "quotedblleft", "quotedblright", "bullet", "endash", "emdash",
    "tilde", "trademark", "scaron", "guilsinglright", "oe", "", "zcaron", "Ydieresis",
    // 160
    "space", "exclamdown", "cent", "sterling", "currency", "yen", "brokenbar", "section",
    "dieresis", "copyright", "ordfeminine", "guillemotleft", "logicalnot", "hyphen", "registered", "macron",
    "degree", "plusminus", "twosuperior", "threesuperior", "acute", "mu", "paragraph", "periodcentered",
    "cedilla", "onesuperior", "ordmasculine", "guillemotright", "onequarter", "onehalf", "threequarters", "questiondown",
    // 192
    "Agrave", "Aacute", "Acircumflex", "Atilde", "Adieresis", "Aring", "AE", "Ccedilla",
    "Egrave", "Eacute", "Ecircumflex", "Edieresis", "Igrave", "Iacute", "Icircumflex", "Idieresis",
    "Eth", "Ntilde", "Ograve", "Oacute", "Ocircumflex", "Otilde", "Odieresis", "multiply",
    "Oslash", "Ugrave", "Uacute", "Ucircumflex", "Udieresis", "Yacute", "Thorn", "germandbls",
    // 224
    "agrave", "aacute", "acircumflex", "atilde", "adieresis", "aring", "ae", "ccedilla",
    "egrave", "eacute", "ecircumflex", "edieresis", "igrave", "iacute", "icircumflex", "idieresis",
    "eth", "ntilde", "ograve", "oacute", "ocircumflex", "otilde", "odieresis", "divide",
    "oslash", "ugrave", "uacute", "ucircumflex", "udieresis", "yacute", "thorn", "ydieresis",
];

// MacRomanEncoding.
#[rustfmt::skip]
static MAC_ROMAN: [&str; 256] = [
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 32
    "space", "exclam", "quotedbl", "numbersign", "dollar", "percent", "ampersand", "quotesingle",
    "parenleft", "parenright", "asterisk", "plus", "comma", "hyphen", "period", "slash",
    "zero", "one", "two", "three", "four", "five", "six", "seven",
    "eight", "nine", "colon", "semicolon", "less", "equal", "greater", "question",
    // 64
    "at", "A", "B", "C", "D", "E", "F", "G",
    "H", "I", "J", "K", "L", "M", "N", "O",
    "P", "Q", "R", "S", "T", "U", "V", "W",
    "X", "Y", "Z", "bracketleft", "backslash", "bracketright", "asciicircum", "underscore",
    // 96
    "grave", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w",
    "x", "y", "z", "braceleft", "bar", "braceright", "asciitilde", "",
    // 128
    "Adieresis", "Aring", "Ccedilla", "Eacute", "Ntilde", "Odieresis", "Udieresis", "aacute",
    "agrave", "acircumflex", "adieresis", "atilde", "aring", "ccedilla", "eacute", "egrave",
    "ecircumflex", "edieresis", "iacute", "igrave", "icircumflex", "idieresis", "ntilde", "oacute",
    "ograve", "ocircumflex", "odieresis", "otilde", "uacute", "ugrave", "ucircumflex", "udieresis",
    // 160
    "dagger", "degree", "cent", "sterling", "section", "bullet", "paragraph", "germandbls",
    "registered", "copyright", "trademark", "acute", "dieresis", "notequal", "AE", "Oslash",
    "infinity", "plusminus", "lessequal", "greaterequal", "yen", "mu", "partialdiff", "summation",
    "product", "pi", "integral", "ordfeminine", "ordmasculine", "Omega", "ae", "oslash",
    // 192
    "questiondown", "exclamdown", "logicalnot", "radical", "florin", "approxequal", "Delta", "guillemotleft",
    "guillemotright", "ellipsis", "space", "Agrave", "Atilde", "Otilde", "OE", "oe",
    "endash", "emdash", "quotedblleft", "quotedblright", "quoteleft", "quoteright", "divide", "lozenge",
    "ydieresis", "Ydieresis", "fraction", "currency", "guilsinglleft", "guilsinglright", "fi", "fl",
    // 224
    "daggerdbl", "periodcentered", "quotesinglbase", "quotedblbase", "perthousand", "Acircumflex", "Ecircumflex", "Aacute",
    "Edieresis", "Egrave", "Iacute", "Icircumflex", "Idieresis", "Igrave", "Oacute", "Ocircumflex",
    "apple", "Ograve", "Uacute", "Ucircumflex", "Ugrave", "dotlessi", "circumflex", "tilde",
    "macron", "breve", "dotaccent", "ring", "cedilla", "hungarumlaut", "ogonek", "caron",
];

// MacExpertEncoding.
#[rustfmt::skip]
static MAC_EXPERT: [&str; 256] = [
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 32
    "space", "exclamsmall", "Hungarumlautsmall", "centoldstyle", "dollaroldstyle", "dollarsuperior", "ampersandsmall", "Acutesmall",
    "parenleftsuperior", "parenrightsuperior", "twodotenleader", "onedotenleader", "comma", "hyphen", "period", "fraction",
    "zerooldstyle", "oneoldstyle", "twooldstyle", "threeoldstyle", "fouroldstyle", "fiveoldstyle", "sixoldstyle", "sevenoldstyle",
    "eightoldstyle", "nineoldstyle", "colon", "semicolon", "", "threequartersemdash", "", "questionsmall",
    // 64
    "", "", "", "", "Ethsmall", "", "", "onequarter",
    "onehalf", "threequarters", "oneeighth", "threeeighths", "fiveeighths", "seveneighths", "onethird", "twothirds",
    "", "", "", "", "", "", "ff", "fi",
    "fl", "ffi", "ffl", "parenleftinferior", "", "parenrightinferior", "Circumflexsmall", "hypheninferior",
    // 96
    "Gravesmall", "Asmall", "Bsmall", "Csmall", "Dsmall", "Esmall", "Fsmall", "Gsmall",
    "Hsmall", "Ismall", "Jsmall", "Ksmall", "Lsmall", "Msmall", "Nsmall", "Osmall",
    "Psmall", "Qsmall", "Rsmall", "Ssmall", "Tsmall", "Usmall", "Vsmall", "Wsmall",
    "Xsmall", "Ysmall", "Zsmall", "colonmonetary", "onefitted", "rupiah", "Tildesmall", "",
    // 128
    "", "asuperior", "centsuperior", "", "", "", "", "Aacutesmall",
    "Agravesmall", "Acircumflexsmall", "Adieresissmall", "Atildesmall", "Aringsmall", "Ccedillasmall", "Eacutesmall", "Egravesmall",
    "Ecircumflexsmall", "Edieresissmall", "Iacutesmall", "Igravesmall", "Icircumflexsmall", "Idieresissmall", "Ntildesmall", "Oacutesmall",
    "Ogravesmall", "Ocircumflexsmall", "Odieresissmall", "Otildesmall", "Uacutesmall", "Ugravesmall", "Ucircumflexsmall", "Udieresissmall",
    // 160
    "", "eightsuperior", "fourinferior", "threeinferior", "sixinferior", "eightinferior", "seveninferior", "Scaronsmall",
    "", "centinferior", "twoinferior", "", "Dieresissmall", "", "Caronsmall", "osuperior",
    "fiveinferior", "", "commainferior", "periodinferior", "Yacutesmall", "", "dollarinferior", "",
    "", "Thornsmall", "", "nineinferior", "zeroinferior", "Zcaronsmall", "AEsmall", "Oslashsmall",
    // 192
    "questiondownsmall", "oneinferior", "Lslashsmall", "", "", "", "", "",
    "", "Cedillasmall", "", "", "", "", "", "OEsmall",
    "figuredash", "hyphensuperior", "", "", "", "", "exclamdownsmall", "",
    "Ydieresissmall", "", "onesuperior", "twosuperior", "threesuperior", "foursuperior", "fivesuperior", "sixsuperior",
    // 224
    "sevensuperior", "ninesuperior", "zerosuperior", "", "esuperior", "rsuperior", "tsuperior", "",
    "", "isuperior", "ssuperior", "dsuperior", "", "", "", "",
    "", "lsuperior", "Ogoneksmall", "Brevesmall", "Macronsmall", "bsuperior", "nsuperior", "msuperior",
    "commasuperior", "periodsuperior", "Dotaccentsmall", "Ringsmall", "", "", "", "",
];

// Built-in encoding of the Symbol font.
#[rustfmt::skip]
static SYMBOL: [&str; 256] = [
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 32
    "space", "exclam", "universal", "numbersign", "existential", "percent", "ampersand", "suchthat",
    "parenleft", "parenright", "asteriskmath", "plus", "comma", "minus", "period", "slash",
    "zero", "one", "two", "three", "four", "five", "six", "seven",
    "eight", "nine", "colon", "semicolon", "less", "equal", "greater", "question",
    // 64
    "congruent", "Alpha", "Beta", "Chi", "Delta", "Epsilon", "Phi", "Gamma",
    "Eta", "Iota", "theta1", "Kappa", "Lambda", "Mu", "Nu", "Omicron",
    "Pi", "Theta", "Rho", "Sigma", "Tau", "Upsilon", "sigma1", "Omega",
    "Xi", "Psi", "Zeta", "bracketleft", "therefore", "bracketright", "perpendicular", "underscore",
    // 96
    "radicalex", "alpha", "beta", "chi", "delta", "epsilon", "phi", "gamma",
    "eta", "iota", "phi1", "kappa", "lambda", "mu", "nu", "omicron",
    "pi", "theta", "rho", "sigma", "tau", "upsilon", "omega1", "omega",
    "xi", "psi", "zeta", "braceleft", "bar", "braceright", "similar", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 160
    "Euro", "Upsilon1", "minute", "lessequal", "fraction", "infinity", "florin", "club",
    "diamond", "heart", "spade", "arrowboth", "arrowleft", "arrowup", "arrowright", "arrowdown",
    "degree", "plusminus", "second", "greaterequal", "multiply", "proportional", "partialdiff", "bullet",
    "divide", "notequal", "equivalence", "approxequal", "ellipsis", "arrowvertex", "arrowhorizex", "carriagereturn",
    // 192
    "aleph", "Ifraktur", "Rfraktur", "weierstrass", "circlemultiply", "circleplus", "emptyset", "intersection",
    "union", "propersuperset", "reflexsuperset", "notsubset", "propersubset", "reflexsubset", "element", "notelement",
    "angle", "gradient", "registerserif", "copyrightserif", "trademarkserif", "product", "radical", "dotmath",
    "logicalnot", "logicaland", "logicalor", "arrowdblboth", "arrowdblleft", "arrowdblup", "arrowdblright", "arrowdbldown",
    // 224
    "lozenge", "angleleft", "registersans", "copyrightsans", "trademarksans", "summation", "parenlefttp", "parenleftex",
    "parenleftbt", "bracketlefttp", "bracketleftex", "bracketleftbt", "bracelefttp", "braceleftmid", "braceleftbt", "braceex",
    "", "angleright", "integral", "integraltp", "integralex", "integralbt", "parenrighttp", "parenrightex",
    "parenrightbt", "bracketrighttp", "bracketrightex", "bracketrightbt", "bracerighttp", "bracerightmid", "bracerightbt", "",
];

// Built-in encoding of the ZapfDingbats font.
#[rustfmt::skip]
static ZAPF_DINGBATS: [&str; 256] = [
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 32
    "space", "a1", "a2", "a202", "a3", "a4", "a5", "a119",
    "a118", "a117", "a11", "a12", "a13", "a14", "a15", "a16",
    "a105", "a17", "a18", "a19", "a20", "a21", "a22", "a23",
    "a24", "a25", "a26", "a27", "a28", "a6", "a7", "a8",
    // 64
    "a9", "a10", "a29", "a30", "a31", "a32", "a33", "a34",
    "a35", "a36", "a37", "a38", "a39", "a40", "a41", "a42",
    "a43", "a44", "a45", "a46", "a47", "a48", "a49", "a50",
    "a51", "a52", "a53", "a54", "a55", "a56", "a57", "a58",
    // 96
    "a59", "a60", "a61", "a62", "a63", "a64", "a65", "a66",
    "a67", "a68", "a69", "a70", "a71", "a72", "a73", "a74",
    "a203", "a75", "a204", "a76", "a77", "a78", "a79", "a81",
    "a82", "a83", "a84", "a97", "a98", "a99", "a100", "",
    // 128
    "a89", "a90", "a93", "a94", "a91", "a92", "a205", "a85",
    "a206", "a86", "a87", "a88", "a95", "a96", "", "",
    "", "", "", "", "", "", "", "",
    "", "", "", "", "", "", "", "",
    // 160
    "", "a101", "a102", "a103", "a104", "a106", "a107", "a108",
    "a112", "a111", "a110", "a109", "a120", "a121", "a122", "a123",
    "a124", "a125", "a126", "a127", "a128", "a129", "a130", "a131",
    "a132", "a133", "a134", "a135", "a136", "a137", "a138", "a139",
    // 192
    "a140", "a141", "a142", "a143", "a144", "a145", "a146", "a147",
    "a148", "a149", "a150", "a151", "a152", "a153", "a154", "a155",
    "a156", "a157", "a158", "a159", "a160", "a161", "a163", "a164",
    "a196", "a165", "a192", "a166", "a167", "a168", "a169", "a170",
    // 224
    "a171", "a172", "a173", "a162", "a174", "a175", "a176", "a177",
    "a178", "a179", "a193", "a180", "a199", "a181", "a200", "a182",
    "", "a201", "a183", "a184", "a197", "a185", "a194", "a198",
    "a186", "a195", "a187", "a188", "a189", "a190", "a191", "",
];
