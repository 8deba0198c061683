//! Accepted input kinds.
//!
//! [`expand`](crate::expand) is generic over [`Shorthand`], the set of things
//! that can be read as shorthand text. Text-like inputs borrow; inputs that
//! turn out not to be text (bytes that are not UTF-8, an absent value) fail
//! with [`Error::InvalidInputKind`].

use crate::{Error, Result};
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A value that can be read as shorthand text.
///
/// # Examples
///
/// ```rust
/// use expand_object::{expand, Error};
///
/// assert!(expand("a:b").is_ok());
/// assert!(expand(&String::from("a:b")).is_ok());
/// assert!(expand(&b"a:b"[..]).is_ok());
///
/// let missing: Option<&str> = None;
/// assert!(matches!(expand(&missing), Err(Error::InvalidInputKind { .. })));
/// ```
pub trait Shorthand {
    /// Borrows or converts `self` into shorthand text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInputKind`] when `self` is not text.
    fn to_shorthand(&self) -> Result<Cow<'_, str>>;
}

impl Shorthand for str {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self))
    }
}

impl Shorthand for String {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_str()))
    }
}

impl Shorthand for Cow<'_, str> {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(self.as_ref()))
    }
}

impl Shorthand for [u8] {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        std::str::from_utf8(self)
            .map(Cow::Borrowed)
            .map_err(|_| Error::invalid_input_kind("bytes that are not valid UTF-8"))
    }
}

impl Shorthand for Vec<u8> {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        self.as_slice().to_shorthand()
    }
}

impl Shorthand for OsStr {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        self.to_str()
            .map(Cow::Borrowed)
            .ok_or_else(|| Error::invalid_input_kind("an OS string that is not valid UTF-8"))
    }
}

impl Shorthand for OsString {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        self.as_os_str().to_shorthand()
    }
}

impl Shorthand for Path {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        self.as_os_str().to_shorthand()
    }
}

impl Shorthand for PathBuf {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        self.as_os_str().to_shorthand()
    }
}

impl<T: Shorthand> Shorthand for Option<T> {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        match self {
            Some(inner) => inner.to_shorthand(),
            None => Err(Error::invalid_input_kind("nothing")),
        }
    }
}

impl<T: Shorthand + ?Sized> Shorthand for &T {
    fn to_shorthand(&self) -> Result<Cow<'_, str>> {
        (**self).to_shorthand()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_borrows() {
        let text = String::from("a.b");
        assert!(matches!(text.to_shorthand(), Ok(Cow::Borrowed("a.b"))));
    }

    #[test]
    fn test_invalid_utf8_bytes() {
        let bytes = vec![0x61, 0xff];
        assert_eq!(
            bytes.to_shorthand().unwrap_err(),
            Error::invalid_input_kind("bytes that are not valid UTF-8")
        );
    }

    #[test]
    fn test_paths() {
        let path = PathBuf::from("a:b");
        assert_eq!(path.to_shorthand().unwrap(), "a:b");
    }

    #[test]
    fn test_absent_value() {
        let missing: Option<String> = None;
        let err = missing.to_shorthand().unwrap_err();
        assert_eq!(err.to_string(), "expand-object expects a string, found nothing");
    }
}
