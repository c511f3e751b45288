//! Paths into a [`Value`](crate::Value) tree.
//!
//! A path is an ordered list of [`Segment`]s, each either a map key or a list
//! index. Paths can be built in code with [`path!`](crate::path!) or the
//! [`Path`] builder methods, or parsed from text:
//!
//! - `menu.id` -- key `menu`, then key `id`
//! - `menu.popup.menuitem[0].value` -- keys with a bracketed list index
//! - `[2][0]` -- indices straight off a list root
//! - `"a.b".c` -- a quoted key may contain `.`, `[` and escaped `"` / `\`
//! - the empty string is the root path

use std::fmt;
use std::iter::Peekable;
use std::ops::Deref;
use std::str::{CharIndices, FromStr};

use crate::error::{QjsonError, Result};

/// One step of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    /// Signed so callers can hand in negative indices and get the precise
    /// error back instead of a conversion failure on their side.
    Index(i64),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<&String> for Segment {
    fn from(key: &String) -> Self {
        Segment::Key(key.clone())
    }
}

impl From<i64> for Segment {
    fn from(index: i64) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(i64::from(index))
    }
}

/// Saturates at `i64::MAX` for indices that do not fit. No list can be that
/// long, so a saturated index fails with an allocation error on write and
/// [`QjsonError::Index`] on read rather than addressing another element.
impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

/// An owned path. Dereferences to `[Segment]`, which is what every traversal
/// function takes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path(Vec<Segment>);

impl Path {
    /// The empty path, addressing the root itself.
    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// Append a map key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(Segment::Key(key.into()));
        self
    }

    /// Append a list index.
    pub fn index(mut self, index: i64) -> Self {
        self.0.push(Segment::Index(index));
        self
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(segment.into());
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }

    /// Parse the textual path syntax described in the module docs.
    ///
    /// # Errors
    ///
    /// Returns [`QjsonError::Arg`] for an empty key segment, an unterminated
    /// bracket or quote, a non-integer index, or stray characters after a
    /// closing bracket or quote.
    ///
    /// # Examples
    ///
    /// ```
    /// use qjson_core::{path, Path};
    ///
    /// let parsed = Path::parse("menu.popup.menuitem[0].value").unwrap();
    /// assert_eq!(parsed, path!["menu", "popup", "menuitem", 0, "value"]);
    /// ```
    pub fn parse(input: &str) -> Result<Path> {
        let mut segments = Vec::new();
        if input.is_empty() {
            return Ok(Path(segments));
        }

        let mut chars = input.char_indices().peekable();
        let mut expect_key = !input.starts_with('[');
        loop {
            if expect_key {
                segments.push(Segment::Key(parse_key(&mut chars, input)?));
            }
            match chars.next() {
                None => break,
                Some((_, '.')) => expect_key = true,
                Some((_, '[')) => {
                    segments.push(Segment::Index(parse_index(&mut chars, input)?));
                    expect_key = false;
                }
                Some((pos, c)) => {
                    return Err(QjsonError::Arg(format!(
                        "unexpected {c:?} at byte {pos} in path {input:?}"
                    )));
                }
            }
        }
        Ok(Path(segments))
    }
}

fn parse_key(chars: &mut Peekable<CharIndices<'_>>, input: &str) -> Result<String> {
    let mut key = String::new();

    if matches!(chars.peek(), Some((_, '"'))) {
        chars.next();
        loop {
            match chars.next() {
                Some((_, '"')) => return Ok(key),
                Some((_, '\\')) => match chars.next() {
                    Some((_, c)) => key.push(c),
                    None => break,
                },
                Some((_, c)) => key.push(c),
                None => break,
            }
        }
        return Err(QjsonError::Arg(format!("unterminated quoted key in path {input:?}")));
    }

    while let Some(&(_, c)) = chars.peek() {
        if c == '.' || c == '[' {
            break;
        }
        key.push(c);
        chars.next();
    }
    if key.is_empty() {
        return Err(QjsonError::Arg(format!("empty key in path {input:?}")));
    }
    Ok(key)
}

fn parse_index(chars: &mut Peekable<CharIndices<'_>>, input: &str) -> Result<i64> {
    let mut digits = String::new();
    for (_, c) in chars.by_ref() {
        if c == ']' {
            return digits.trim().parse().map_err(|_| {
                QjsonError::Arg(format!("invalid index [{digits}] in path {input:?}"))
            });
        }
        digits.push(c);
    }
    Err(QjsonError::Arg(format!("unterminated index in path {input:?}")))
}

fn needs_quotes(key: &str) -> bool {
    key.is_empty() || key.contains(['.', '[', '"'])
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    if needs_quotes(key) {
                        f.write_str("\"")?;
                        for c in key.chars() {
                            if c == '"' || c == '\\' {
                                f.write_str("\\")?;
                            }
                            write!(f, "{c}")?;
                        }
                        f.write_str("\"")?;
                    } else {
                        f.write_str(key)?;
                    }
                }
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = QjsonError;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl Deref for Path {
    type Target = [Segment];

    fn deref(&self) -> &[Segment] {
        &self.0
    }
}

impl AsRef<[Segment]> for Path {
    fn as_ref(&self) -> &[Segment] {
        &self.0
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path(segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

/// Build a [`Path`] from a mix of key and index literals.
///
/// ```
/// use qjson_core::{path, Segment};
///
/// let p = path!["menu", "popup", "menuitem", 0];
/// assert_eq!(p[3], Segment::Index(0));
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::Path::from(vec![$($crate::Segment::from($segment)),+])
    };
}
