/// Element comparison rule used by a [`Literal`](crate::literal::Literal).
pub trait CharTraits<C> {
    fn equal(expected: &C, found: &C) -> bool;
}

/// Plain `PartialEq` comparison.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Exact;

impl<C: PartialEq> CharTraits<C> for Exact {
    fn equal(expected: &C, found: &C) -> bool {
        expected == found
    }
}

/// Treats ASCII letters of either case as equal; everything else compares
/// exactly.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IgnoreAsciiCase;

impl CharTraits<char> for IgnoreAsciiCase {
    fn equal(expected: &char, found: &char) -> bool {
        expected.eq_ignore_ascii_case(found)
    }
}

impl CharTraits<u8> for IgnoreAsciiCase {
    fn equal(expected: &u8, found: &u8) -> bool {
        expected.eq_ignore_ascii_case(found)
    }
}

impl CharTraits<u16> for IgnoreAsciiCase {
    fn equal(expected: &u16, found: &u16) -> bool {
        fold_unit(*expected) == fold_unit(*found)
    }
}

fn fold_unit(unit: u16) -> u16 {
    match u8::try_from(unit) {
        Ok(byte) => byte.to_ascii_lowercase() as u16,
        Err(_) => unit,
    }
}
