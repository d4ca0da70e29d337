use crate::literal::Literal;
use crate::stream::{InputSource, IoState};
use crate::traits::CharTraits;

/// Something that can be applied to an input source in an extraction chain.
pub trait Manipulator<S: InputSource + ?Sized> {
    fn apply(self, source: &mut S);
}

pub trait Extract: InputSource {
    /// Applies `manip` and hands the source back for the next step.
    fn extract<M: Manipulator<Self>>(&mut self, manip: M) -> &mut Self {
        manip.apply(self);
        self
    }
}

impl<S: InputSource + ?Sized> Extract for S {}

impl<C, T, S> Manipulator<S> for Literal<C, T>
where
    C: Copy,
    T: CharTraits<C>,
    S: InputSource<Char = C> + ?Sized,
{
    fn apply(self, source: &mut S) {
        self.match_from(source);
    }
}

impl<'l, C, T, S> Manipulator<S> for &'l Literal<C, T>
where
    C: Copy,
    T: CharTraits<C>,
    S: InputSource<Char = C> + ?Sized,
{
    fn apply(self, source: &mut S) {
        self.match_from(source);
    }
}

pub trait Whitespace {
    fn is_whitespace(&self) -> bool;
}

impl Whitespace for char {
    fn is_whitespace(&self) -> bool {
        char::is_whitespace(*self)
    }
}

impl Whitespace for u8 {
    fn is_whitespace(&self) -> bool {
        self.is_ascii_whitespace()
    }
}

impl Whitespace for u16 {
    fn is_whitespace(&self) -> bool {
        char::from_u32(u32::from(*self)).map_or(false, char::is_whitespace)
    }
}

/// Discards leading whitespace. Running out of input sets only `eof`.
#[derive(Debug, Copy, Clone, Default)]
pub struct Ws;

impl<S> Manipulator<S> for Ws
where
    S: InputSource + ?Sized,
    S::Char: Whitespace,
{
    fn apply(self, source: &mut S) {
        if !source.good() {
            source.setstate(IoState::FAIL);
            return;
        }

        while let Some(next) = source.peek() {
            if !next.is_whitespace() {
                break;
            }
            source.get();
        }
    }
}
