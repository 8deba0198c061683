//! Delimiter-aware segment splitting.
//!
//! Every stage of the expander splits on a single operator character, but two
//! kinds of text must survive a split intact:
//!
//! - an escaped delimiter (`\|` while splitting on `|`) becomes a literal
//!   character of the segment and the backslash is dropped;
//! - a regex literal span (`/.../`) is copied verbatim, so `a:/b|c+/d` is never
//!   split inside the slashes. A `/` with no closing slash is plain text.
//!
//! Sibling splits (`|` and `+`) guard a span wherever it opens. Every other
//! delimiter only guards a span that starts a token, so `src/a,src/b` is still
//! a two-item list while `a,/x,y/` keeps its pattern whole.
//!
//! Backslashes in front of any other character are left alone so that later
//! stages (the path setter, the value coercer) can still see them.
//!
//! ```rust
//! use expand_object::split::split;
//!
//! assert_eq!(split(r"a\|b|c", '|'), vec!["a|b", "c"]);
//! assert_eq!(split("a:/b|c/|d", '|'), vec!["a:/b|c/", "d"]);
//! assert!(split("", '|').is_empty());
//! ```

/// Prefix that turns the following delimiter into a literal character.
pub const ESCAPE: char = '\\';

/// Opens and closes a regex literal span.
pub const REGEX_DELIMITER: char = '/';

/// Operator characters that an escape can neutralize.
pub const DELIMITERS: &[char] = &['.', ':', ',', '|', '+', ESCAPE];

/// Delimiters that never split inside a regex span, even mid-token.
const SPAN_ANYWHERE: &[char] = &['|', '+'];

/// Byte length of the regex span opening `rest`, if it has a closing slash.
fn regex_span(rest: &str) -> Option<usize> {
    rest.strip_prefix(REGEX_DELIMITER)?
        .find(REGEX_DELIMITER)
        .map(|close| close + 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    /// Literal text, already stripped of the escape in front of a delimiter.
    Text(&'a str),
    /// A splitting delimiter at the given byte offset.
    Delimiter(usize),
}

struct Scanner<'a> {
    input: &'a str,
    delimiter: char,
    pos: usize,
    token_start: bool,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str, delimiter: char) -> Self {
        Scanner {
            input,
            delimiter,
            pos: 0,
            token_start: true,
        }
    }

    fn opens_span(&self) -> bool {
        self.token_start || SPAN_ANYWHERE.contains(&self.delimiter)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.input[self.pos..];
        let ch = rest.chars().next()?;
        let start = self.pos;

        let at_delimiter = ch == self.delimiter;
        let span = match ch {
            REGEX_DELIMITER if self.opens_span() => regex_span(rest),
            _ => None,
        };
        self.token_start = at_delimiter;

        if let Some(len) = span {
            self.pos += len;
            return Some(Token::Text(&self.input[start..self.pos]));
        }

        if ch == ESCAPE && rest[1..].starts_with(self.delimiter) {
            self.pos += 1 + self.delimiter.len_utf8();
            return Some(Token::Text(&self.input[start + 1..self.pos]));
        }

        self.pos += ch.len_utf8();
        if at_delimiter {
            Some(Token::Delimiter(start))
        } else {
            Some(Token::Text(&self.input[start..self.pos]))
        }
    }
}

/// Splits `input` on unescaped `delimiter` characters outside regex spans.
///
/// Interior empty segments are kept, a trailing empty segment is not, and an
/// empty input yields no segments at all.
///
/// # Examples
///
/// ```rust
/// use expand_object::split::split;
///
/// assert_eq!(split("a||b|", '|'), vec!["a", "", "b"]);
/// assert_eq!(split(r"a\.b.c", '.'), vec!["a.b", "c"]);
/// ```
#[must_use]
pub fn split(input: &str, delimiter: char) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for token in Scanner::new(input, delimiter) {
        match token {
            Token::Text(text) => current.push_str(text),
            Token::Delimiter(_) => segments.push(std::mem::take(&mut current)),
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Splits on `delimiter` and drops empty tokens, the way comma lists are read.
///
/// # Examples
///
/// ```rust
/// use expand_object::split::list_tokens;
///
/// assert_eq!(list_tokens("a,,b,", ','), vec!["a", "b"]);
/// ```
#[must_use]
pub fn list_tokens(input: &str, delimiter: char) -> Vec<String> {
    split(input, delimiter)
        .into_iter()
        .filter(|token| !token.is_empty())
        .collect()
}

/// Byte offset of the first splitting `delimiter` in the raw `input`.
#[must_use]
pub fn find_delimiter(input: &str, delimiter: char) -> Option<usize> {
    Scanner::new(input, delimiter).find_map(|token| match token {
        Token::Delimiter(at) => Some(at),
        Token::Text(_) => None,
    })
}

/// Byte offset of the last splitting `delimiter` in the raw `input`.
#[must_use]
pub fn rfind_delimiter(input: &str, delimiter: char) -> Option<usize> {
    Scanner::new(input, delimiter)
        .filter_map(|token| match token {
            Token::Delimiter(at) => Some(at),
            Token::Text(_) => None,
        })
        .last()
}

/// Returns `true` if `input` would be split on `delimiter`.
#[must_use]
pub fn contains_delimiter(input: &str, delimiter: char) -> bool {
    find_delimiter(input, delimiter).is_some()
}

/// Reduces every escaped operator character to the literal character.
///
/// Regex spans are copied untouched.
///
/// # Examples
///
/// ```rust
/// use expand_object::split::unescape;
///
/// assert_eq!(unescape(r"a\.b\,c"), "a.b,c");
/// assert_eq!(unescape(r"\d"), r"\d");
/// assert_eq!(unescape(r"/a\.b/"), r"/a\.b/");
/// ```
#[must_use]
pub fn unescape(input: &str) -> String {
    if !input.contains(ESCAPE) {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        if let Some(len) = regex_span(&input[pos..]) {
            out.push_str(&input[pos..pos + len]);
            pos += len;
            continue;
        }

        let escaped = input[pos + ch.len_utf8()..]
            .chars()
            .next()
            .filter(|next| ch == ESCAPE && DELIMITERS.contains(next));
        match escaped {
            Some(next) => {
                out.push(next);
                pos += ch.len_utf8() + next.len_utf8();
            }
            None => {
                out.push(ch);
                pos += ch.len_utf8();
            }
        }
    }
    out
}
