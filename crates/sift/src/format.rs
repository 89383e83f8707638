//! Format string parser.
//!
//! A format string is literal text interleaved with replacement fields:
//!
//! ```text
//! format := (literal | "{{" | "}}" | field)*
//! field  := "{" [arg_id] [":" spec] "}"
//! spec   := flags* [width] [type]
//! flags  := "L" | "'"
//! type   := d i u b o x X a A e E f F g G s c | "[" set "]"
//! ```
//!
//! [`parse_format`] splits the string into [`Piece`]s without touching any
//! input. [`Format::validate`] then checks the pieces against the argument
//! slot kinds. Both steps fail with `InvalidFormatString`, so a malformed
//! format never consumes input.

use std::fmt;

use bitflags::bitflags;
use smallvec::SmallVec;

use crate::args::ArgKind;
use crate::locale::is_classic_space;
use crate::ScanError;

bitflags! {
    /// Modifier flags written before the width.
    #[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Debug)]
    pub struct DirectiveFlags: u8 {
        /// `L`: consult the scan's locale for punctuation, boolean names and
        /// whitespace.
        const LOCALIZED = 1 << 0;
        /// `'`: accept thousands separators between integer digits.
        const GROUPING = 1 << 1;
    }
}

/// How a directive wants its value read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// No type character.
    Default,
    /// `d`: decimal integer.
    Decimal,
    /// `i`: integer with base detected from a `0x`, `0b` or `0` prefix.
    Detect,
    /// `u`: decimal integer, no minus sign.
    Unsigned,
    /// `b`: binary integer, optional `0b`.
    Binary,
    /// `o`: octal integer, optional `0o` or `0`.
    Octal,
    /// `x`, `X`: hexadecimal integer, optional `0x`.
    Hex,
    /// `a`, `A`: hexadecimal float only.
    HexFloat,
    /// `e`, `E`: decimal float.
    Scientific,
    /// `f`, `F`: decimal float.
    Fixed,
    /// `g`, `G`: decimal or hexadecimal float.
    General,
    /// `s`: whitespace-delimited word, or textual boolean.
    Word,
    /// `c`: code points up to the width (one without a width).
    Character,
    /// `[...]`: maximal run of code points in a set.
    Set(CharSet),
}

impl Presentation {
    fn from_type_char(ch: char) -> Option<Self> {
        Some(match ch {
            'd' => Self::Decimal,
            'i' => Self::Detect,
            'u' => Self::Unsigned,
            'b' => Self::Binary,
            'o' => Self::Octal,
            'x' | 'X' => Self::Hex,
            'a' | 'A' => Self::HexFloat,
            'e' | 'E' => Self::Scientific,
            'f' | 'F' => Self::Fixed,
            'g' | 'G' => Self::General,
            's' => Self::Word,
            'c' => Self::Character,
            _ => return None,
        })
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Decimal | Self::Detect | Self::Unsigned | Self::Binary | Self::Octal | Self::Hex
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(
            self,
            Self::HexFloat | Self::Scientific | Self::Fixed | Self::General
        )
    }

    /// Whether a slot of `kind` can be read with this presentation.
    pub fn accepts(&self, kind: ArgKind) -> bool {
        match kind {
            ArgKind::Int(_) => *self == Self::Default || self.is_integer(),
            ArgKind::Float(_) => *self == Self::Default || self.is_float(),
            ArgKind::Bool => matches!(self, Self::Default | Self::Word) || self.is_integer(),
            ArgKind::Char | ArgKind::CodePoint => {
                matches!(self, Self::Default | Self::Character)
            }
            ArgKind::String | ArgKind::Span => matches!(
                self,
                Self::Default | Self::Word | Self::Character | Self::Set(_)
            ),
        }
    }
}

/// A `[...]` character class.
///
/// `[^\n]` is the rest-of-line class; see [`CharSet::is_rest_of_line`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharSet {
    negated: bool,
    ranges: SmallVec<[(char, char); 4]>,
}

impl CharSet {
    pub fn contains(&self, ch: char) -> bool {
        let listed = self.ranges.iter().any(|&(lo, hi)| lo <= ch && ch <= hi);
        listed != self.negated
    }

    /// `[^\n]`: everything up to the next newline.
    pub fn is_rest_of_line(&self) -> bool {
        self.negated && self.ranges.as_slice() == [('\n', '\n')]
    }
}

/// One substitution placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Directive {
    /// Index of the argument slot this directive fills.
    pub arg: usize,
    /// Maximum number of code units the reader may consume.
    pub width: Option<usize>,
    pub flags: DirectiveFlags,
    pub presentation: Presentation,
}

impl Directive {
    pub fn is_localized(&self) -> bool {
        self.flags.contains(DirectiveFlags::LOCALIZED)
    }

    pub fn accepts_grouping(&self) -> bool {
        self.flags.contains(DirectiveFlags::GROUPING)
    }
}

/// One piece of a parsed format string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Piece<'f> {
    /// Literal text without whitespace. Escaped braces appear unescaped.
    Literal(&'f str),
    /// A run of literal whitespace.
    Whitespace(&'f str),
    Field(Directive),
}

/// A parsed format string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Format<'f> {
    pieces: SmallVec<[Piece<'f>; 8]>,
}

impl<'f> Format<'f> {
    pub fn pieces(&self) -> &[Piece<'f>] {
        &self.pieces
    }

    pub fn directives<'s>(&'s self) -> impl Iterator<Item = &'s Directive> + 's {
        let pieces: &'s [Piece<'s>] = &self.pieces;
        pieces.iter().filter_map(|piece| match piece {
            Piece::Field(directive) => Some(directive),
            _ => None,
        })
    }

    /// Check the directives against the argument slots.
    ///
    /// Every slot must be referenced exactly once, by a directive whose
    /// presentation and flags suit the slot's kind.
    pub fn validate(&self, kinds: &[ArgKind]) -> Result<(), ScanError> {
        let mut seen: SmallVec<[bool; 8]> = SmallVec::from_elem(false, kinds.len());
        let mut count = 0usize;
        for directive in self.directives() {
            count += 1;
            let Some(&kind) = kinds.get(directive.arg) else {
                return Err(ScanError::invalid_format(format!(
                    "argument index {} out of range for {} argument(s)",
                    directive.arg,
                    kinds.len()
                )));
            };
            if std::mem::replace(&mut seen[directive.arg], true) {
                return Err(ScanError::invalid_format(format!(
                    "argument {} is referenced more than once",
                    directive.arg
                )));
            }
            if !directive.presentation.accepts(kind) {
                return Err(ScanError::invalid_format(format!(
                    "type {} cannot be read into a {} argument",
                    directive.presentation,
                    kind.name()
                )));
            }
            if directive.accepts_grouping() && !matches!(kind, ArgKind::Int(_) | ArgKind::Float(_))
            {
                return Err(ScanError::invalid_format(format!(
                    "grouping flag on a {} argument",
                    kind.name()
                )));
            }
        }
        if count < kinds.len() {
            return Err(ScanError::invalid_format(format!(
                "{} directive(s) for {} argument(s)",
                count,
                kinds.len()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Presentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Decimal => "'d'",
            Self::Detect => "'i'",
            Self::Unsigned => "'u'",
            Self::Binary => "'b'",
            Self::Octal => "'o'",
            Self::Hex => "'x'",
            Self::HexFloat => "'a'",
            Self::Scientific => "'e'",
            Self::Fixed => "'f'",
            Self::General => "'g'",
            Self::Word => "'s'",
            Self::Character => "'c'",
            Self::Set(_) => "character set",
        };
        f.write_str(name)
    }
}

/// Argument numbering mode, fixed by the first field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Indexing {
    Unknown,
    Automatic(usize),
    Manual,
}

struct Parser<'f> {
    src: &'f str,
    pos: usize,
    indexing: Indexing,
    pieces: SmallVec<[Piece<'f>; 8]>,
}

/// Parse a format string into pieces.
///
/// # Examples
///
/// ```
/// use sift::format::{parse_format, Piece, Presentation};
///
/// let fmt = parse_format("{} {}").map_err(|err| err.to_string())?;
/// assert!(matches!(
///     fmt.pieces(),
///     [Piece::Field(_), Piece::Whitespace(" "), Piece::Field(_)]
/// ));
///
/// let fmt = parse_format("{1:x}-{0}").map_err(|err| err.to_string())?;
/// let first = fmt.directives().next().ok_or("no directive")?;
/// assert_eq!((first.arg, &first.presentation), (1, &Presentation::Hex));
///
/// let fmt = parse_format("{:[^\\n]}").map_err(|err| err.to_string())?;
/// let line = fmt.directives().next().ok_or("no directive")?;
/// assert!(matches!(&line.presentation, Presentation::Set(set) if set.is_rest_of_line()));
/// # Ok::<(), String>(())
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(len = src.len()))]
pub fn parse_format(src: &str) -> Result<Format<'_>, ScanError> {
    let mut parser = Parser {
        src,
        pos: 0,
        indexing: Indexing::Unknown,
        pieces: SmallVec::new(),
    };
    parser.run()?;
    Ok(Format {
        pieces: parser.pieces,
    })
}

impl<'f> Parser<'f> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn run(&mut self) -> Result<(), ScanError> {
        while let Some(ch) = self.peek() {
            match ch {
                '{' if self.src[self.pos + 1..].starts_with('{') => {
                    self.pieces
                        .push(Piece::Literal(&self.src[self.pos..=self.pos]));
                    self.pos += 2;
                }
                '}' if self.src[self.pos + 1..].starts_with('}') => {
                    self.pieces
                        .push(Piece::Literal(&self.src[self.pos..=self.pos]));
                    self.pos += 2;
                }
                '{' => {
                    self.pos += 1;
                    let directive = self.field()?;
                    self.pieces.push(Piece::Field(directive));
                }
                '}' => {
                    return Err(ScanError::invalid_format(format!(
                        "unmatched '}}' at offset {}",
                        self.pos
                    )));
                }
                _ => self.literal_run(is_classic_space(ch)),
            }
        }
        Ok(())
    }

    /// A run of literal text that is all whitespace or all non-whitespace.
    fn literal_run(&mut self, space: bool) {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch == '{' || ch == '}' || is_classic_space(ch) != space {
                break;
            }
            self.pos += ch.len_utf8();
        }
        let text = &self.src[start..self.pos];
        self.pieces.push(if space {
            Piece::Whitespace(text)
        } else {
            Piece::Literal(text)
        });
    }

    /// Everything after the opening `{` up to and including the `}`.
    fn field(&mut self) -> Result<Directive, ScanError> {
        let arg = self.arg_id()?;
        let mut directive = Directive {
            arg,
            width: None,
            flags: DirectiveFlags::empty(),
            presentation: Presentation::Default,
        };
        if self.eat(':') {
            self.spec(&mut directive)?;
        }
        match self.bump() {
            Some('}') => Ok(directive),
            Some(ch) => Err(ScanError::invalid_format(format!(
                "unexpected '{ch}' in replacement field"
            ))),
            None => Err(ScanError::invalid_format("unclosed replacement field")),
        }
    }

    fn arg_id(&mut self) -> Result<usize, ScanError> {
        let manual = self.number()?;
        match (manual, self.indexing) {
            (Some(id), Indexing::Unknown | Indexing::Manual) => {
                self.indexing = Indexing::Manual;
                Ok(id)
            }
            (None, Indexing::Unknown) => {
                self.indexing = Indexing::Automatic(1);
                Ok(0)
            }
            (None, Indexing::Automatic(next)) => {
                self.indexing = Indexing::Automatic(next + 1);
                Ok(next)
            }
            (Some(_), Indexing::Automatic(_)) | (None, Indexing::Manual) => Err(
                ScanError::invalid_format("cannot mix manual and automatic argument indexing"),
            ),
        }
    }

    /// Decimal digits, if any.
    fn number(&mut self) -> Result<Option<usize>, ScanError> {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch.is_ascii_digit()) {
            self.pos += 1;
        }
        if start == self.pos {
            return Ok(None);
        }
        let digits = &self.src[start..self.pos];
        digits
            .parse()
            .map(Some)
            .map_err(|_| ScanError::invalid_format(format!("number '{digits}' is too large")))
    }

    fn spec(&mut self, directive: &mut Directive) -> Result<(), ScanError> {
        loop {
            let flag = match self.peek() {
                Some('L') => DirectiveFlags::LOCALIZED,
                Some('\'') => DirectiveFlags::GROUPING,
                _ => break,
            };
            self.pos += 1;
            directive.flags |= flag;
        }

        if let Some(width) = self.number()? {
            if width == 0 {
                return Err(ScanError::invalid_format("field width must be positive"));
            }
            directive.width = Some(width);
        }

        match self.peek() {
            Some('[') => {
                self.pos += 1;
                directive.presentation = Presentation::Set(self.char_set()?);
            }
            Some('}') | None => {}
            Some(ch) => {
                let Some(presentation) = Presentation::from_type_char(ch) else {
                    return Err(ScanError::invalid_format(format!(
                        "unknown format type '{ch}'"
                    )));
                };
                self.pos += ch.len_utf8();
                directive.presentation = presentation;
            }
        }
        Ok(())
    }

    /// Set body after the `[`, through the closing `]`.
    fn char_set(&mut self) -> Result<CharSet, ScanError> {
        let mut set = CharSet {
            negated: self.eat('^'),
            ranges: SmallVec::new(),
        };
        let mut first = true;
        loop {
            let lo = match self.bump() {
                None => return Err(ScanError::invalid_format("unclosed character set")),
                Some(']') if !first => break,
                Some('\\') => self.escape()?,
                Some(ch) => ch,
            };
            first = false;
            let hi = if self.peek() == Some('-') && !self.src[self.pos + 1..].starts_with(']') {
                self.pos += 1;
                match self.bump() {
                    None => return Err(ScanError::invalid_format("unclosed character set")),
                    Some('\\') => self.escape()?,
                    Some(ch) => ch,
                }
            } else {
                lo
            };
            if hi < lo {
                return Err(ScanError::invalid_format(format!(
                    "reversed range '{lo}-{hi}' in character set"
                )));
            }
            set.ranges.push((lo, hi));
        }
        Ok(set)
    }

    fn escape(&mut self) -> Result<char, ScanError> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some(ch) => Ok(ch),
            None => Err(ScanError::invalid_format("unclosed character set")),
        }
    }
}
