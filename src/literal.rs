use crate::error::MatchError;
use crate::stream::{InputSource, IoState};
use crate::traits::{CharTraits, Exact};
use std::ffi::{CStr, CString};
use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;

/// Owned literal token, matched element by element against an input source.
///
/// Whitespace is never skipped; apply [`Ws`](crate::manip::Ws) first when the
/// input may contain leading blanks.
pub struct Literal<C, T = Exact> {
    token: Vec<C>,
    traits: PhantomData<fn() -> T>,
}

pub fn literal<C, L: Into<Literal<C>>>(token: L) -> Literal<C> {
    token.into()
}

impl<C, T> Literal<C, T> {
    pub fn new<I: IntoIterator<Item = C>>(token: I) -> Literal<C, T> {
        Literal {
            token: token.into_iter().collect(),
            traits: PhantomData,
        }
    }

    pub fn token(&self) -> &[C] {
        &self.token
    }

    pub fn len(&self) -> usize {
        self.token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_empty()
    }

    pub fn with_traits<U>(self) -> Literal<C, U> {
        Literal {
            token: self.token,
            traits: PhantomData,
        }
    }
}

impl<C: Copy + Default + PartialEq, T> Literal<C, T> {
    /// Copies `token` up to, not including, its first `C::default()` element.
    pub fn from_nul_terminated(token: &[C]) -> Literal<C, T> {
        let end = token
            .iter()
            .position(|c| *c == C::default())
            .unwrap_or(token.len());
        Literal::new(token[..end].iter().copied())
    }
}

impl<C: Copy, T: CharTraits<C>> Literal<C, T> {
    /// Extracts one element per token element and stops at the first one that
    /// differs, putting `source` into the `fail` state. Extracted elements are
    /// never put back.
    pub fn match_from<'s, S>(&self, source: &'s mut S) -> &'s mut S
    where
        S: InputSource<Char = C> + ?Sized,
    {
        log::trace!("matching literal of {} element(s)", self.token.len());

        for (pos, expected) in self.token.iter().enumerate() {
            let found = match source.get() {
                Some(found) => found,
                None => {
                    log::debug!("input ended at element {} of literal", pos);
                    break;
                }
            };

            if !T::equal(expected, &found) {
                log::debug!("literal mismatch at element {}", pos);
                source.setstate(IoState::FAIL);
                break;
            }
        }

        source
    }

    pub fn try_match<S>(&self, source: &mut S) -> Result<(), MatchError>
    where
        S: InputSource<Char = C> + ?Sized,
    {
        if !self.match_from(source).fail() {
            return Ok(());
        }

        if source.bad() {
            if let Some(err) = source.take_error() {
                return Err(MatchError::Io(err));
            }
        }

        Err(MatchError::Mismatch)
    }
}

impl<C: Clone, T> Clone for Literal<C, T> {
    fn clone(&self) -> Self {
        Literal {
            token: self.token.clone(),
            traits: PhantomData,
        }
    }
}

impl<C: Debug, T> Debug for Literal<C, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Literal").field(&self.token).finish()
    }
}

impl<C: PartialEq, T> PartialEq for Literal<C, T> {
    fn eq(&self, other: &Self) -> bool {
        self.token == other.token
    }
}

impl<C: Eq, T> Eq for Literal<C, T> {}

impl<T> Display for Literal<char, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.token.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl<T> Display for Literal<u8, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.escape_ascii())
    }
}

impl<'a, T> From<&'a str> for Literal<char, T> {
    fn from(token: &'a str) -> Self {
        Literal::new(token.chars())
    }
}

impl<'a, T> From<&'a String> for Literal<char, T> {
    fn from(token: &'a String) -> Self {
        Literal::new(token.chars())
    }
}

impl<T> From<String> for Literal<char, T> {
    fn from(token: String) -> Self {
        Literal::new(token.chars())
    }
}

impl<'a, C: Copy, T> From<&'a [C]> for Literal<C, T> {
    fn from(token: &'a [C]) -> Self {
        Literal::new(token.iter().copied())
    }
}

impl<'a, C: Copy, T, const N: usize> From<&'a [C; N]> for Literal<C, T> {
    fn from(token: &'a [C; N]) -> Self {
        Literal::new(token.iter().copied())
    }
}

impl<C, T> From<Vec<C>> for Literal<C, T> {
    fn from(token: Vec<C>) -> Self {
        Literal {
            token,
            traits: PhantomData,
        }
    }
}

impl<'a, T> From<&'a CStr> for Literal<u8, T> {
    fn from(token: &'a CStr) -> Self {
        Literal::new(token.to_bytes().iter().copied())
    }
}

impl<T> From<CString> for Literal<u8, T> {
    fn from(token: CString) -> Self {
        Literal::from(token.into_bytes())
    }
}

impl<T> From<char> for Literal<char, T> {
    fn from(token: char) -> Self {
        Literal::new([token])
    }
}

impl<T> From<u8> for Literal<u8, T> {
    fn from(token: u8) -> Self {
        Literal::new([token])
    }
}

impl<T> From<u16> for Literal<u16, T> {
    fn from(token: u16) -> Self {
        Literal::new([token])
    }
}

#[cfg(feature = "serialize")]
impl<C: serde::Serialize, T> serde::Serialize for Literal<C, T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.token, serializer)
    }
}

#[cfg(feature = "serialize")]
impl<'de, C: serde::Deserialize<'de>, T> serde::Deserialize<'de> for Literal<C, T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Vec<C> as serde::Deserialize<'de>>::deserialize(deserializer).map(Literal::from)
    }
}
