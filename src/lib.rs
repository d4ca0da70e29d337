//! Input manipulator that matches literal tokens against upcoming input.
//!
//! A [`Literal`](literal::Literal) extracts input one element at a time and
//! compares it with its token. On a match the input is simply consumed;
//! otherwise the source is placed in its `fail` state, with the elements read
//! so far gone. Leading whitespace is not skipped: extract
//! [`Ws`](manip::Ws) first when needed.

pub mod error;
pub mod literal;
pub mod manip;
pub mod stream;
pub mod traits;

pub mod prelude {
    pub use super::error::MatchError;
    pub use super::literal::{literal, Literal};
    pub use super::manip::{Extract, Manipulator, Ws};
    pub use super::stream::{InputSource, IoState, ReadSource, SliceSource, StrSource};
    pub use super::traits::{CharTraits, Exact, IgnoreAsciiCase};
}
