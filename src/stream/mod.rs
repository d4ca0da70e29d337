pub mod read;

pub use read::ReadSource;

use std::ops::BitOr;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct IoState {
    pub eof: bool,
    pub fail: bool,
    pub bad: bool,
}

impl IoState {
    pub const GOOD: IoState = IoState {
        eof: false,
        fail: false,
        bad: false,
    };
    pub const EOF: IoState = IoState {
        eof: true,
        ..IoState::GOOD
    };
    pub const FAIL: IoState = IoState {
        fail: true,
        ..IoState::GOOD
    };
    pub const BAD: IoState = IoState {
        bad: true,
        ..IoState::GOOD
    };

    pub fn good(&self) -> bool {
        !(self.eof || self.fail || self.bad)
    }

    pub fn failed(&self) -> bool {
        self.fail || self.bad
    }
}

impl BitOr for IoState {
    type Output = IoState;

    fn bitor(self, rhs: IoState) -> IoState {
        IoState {
            eof: self.eof || rhs.eof,
            fail: self.fail || rhs.fail,
            bad: self.bad || rhs.bad,
        }
    }
}

/// Sequential single-element input with a sticky condition state.
///
/// Reads on a source that is not [`good`](InputSource::good) consume nothing
/// and add `fail`. Reaching the end of input through [`get`](InputSource::get)
/// sets `eof | fail`; through [`peek`](InputSource::peek) only `eof`.
pub trait InputSource {
    type Char: Copy;

    fn get(&mut self) -> Option<Self::Char>;
    fn peek(&mut self) -> Option<Self::Char>;

    fn state(&self) -> IoState;
    fn clear_to(&mut self, state: IoState);

    fn consumed(&self) -> usize;

    /// Takes the reader error that put the source into the `bad` state.
    fn take_error(&mut self) -> Option<std::io::Error> {
        None
    }

    fn setstate(&mut self, state: IoState) {
        let current = self.state();
        self.clear_to(current | state);
    }

    fn clear(&mut self) {
        self.clear_to(IoState::GOOD)
    }

    fn good(&self) -> bool {
        self.state().good()
    }

    fn eof(&self) -> bool {
        self.state().eof
    }

    fn fail(&self) -> bool {
        self.state().failed()
    }

    fn bad(&self) -> bool {
        self.state().bad
    }
}

#[derive(Debug, Clone)]
pub struct SliceSource<'a, C> {
    data: &'a [C],
    pos: usize,
    state: IoState,
}

impl<'a, C: Copy> SliceSource<'a, C> {
    pub fn new(data: &'a [C]) -> SliceSource<'a, C> {
        SliceSource {
            data,
            pos: 0,
            state: IoState::GOOD,
        }
    }

    pub fn remaining(&self) -> &'a [C] {
        &self.data[self.pos..]
    }
}

impl<'a, C: Copy> InputSource for SliceSource<'a, C> {
    type Char = C;

    fn get(&mut self) -> Option<C> {
        if !self.state.good() {
            self.state.fail = true;
            return None;
        }

        match self.data.get(self.pos) {
            Some(&value) => {
                self.pos += 1;
                Some(value)
            }
            None => {
                self.state = self.state | IoState::EOF | IoState::FAIL;
                None
            }
        }
    }

    fn peek(&mut self) -> Option<C> {
        if !self.state.good() {
            self.state.fail = true;
            return None;
        }

        let next = self.data.get(self.pos).copied();
        if next.is_none() {
            self.state.eof = true;
        }
        next
    }

    fn state(&self) -> IoState {
        self.state
    }

    fn clear_to(&mut self, state: IoState) {
        self.state = state;
    }

    fn consumed(&self) -> usize {
        self.pos
    }
}

impl<'a, C: Copy> From<&'a [C]> for SliceSource<'a, C> {
    fn from(data: &'a [C]) -> Self {
        SliceSource::new(data)
    }
}

#[derive(Debug, Clone)]
pub struct StrSource<'a> {
    text: &'a str,
    offset: usize,
    consumed: usize,
    state: IoState,
}

impl<'a> StrSource<'a> {
    pub fn new(text: &'a str) -> StrSource<'a> {
        StrSource {
            text,
            offset: 0,
            consumed: 0,
            state: IoState::GOOD,
        }
    }

    pub fn remaining(&self) -> &'a str {
        &self.text[self.offset..]
    }
}

impl<'a> InputSource for StrSource<'a> {
    type Char = char;

    fn get(&mut self) -> Option<char> {
        if !self.state.good() {
            self.state.fail = true;
            return None;
        }

        match self.remaining().chars().next() {
            Some(c) => {
                self.offset += c.len_utf8();
                self.consumed += 1;
                Some(c)
            }
            None => {
                self.state = self.state | IoState::EOF | IoState::FAIL;
                None
            }
        }
    }

    fn peek(&mut self) -> Option<char> {
        if !self.state.good() {
            self.state.fail = true;
            return None;
        }

        let next = self.remaining().chars().next();
        if next.is_none() {
            self.state.eof = true;
        }
        next
    }

    fn state(&self) -> IoState {
        self.state
    }

    fn clear_to(&mut self, state: IoState) {
        self.state = state;
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}

impl<'a> From<&'a str> for StrSource<'a> {
    fn from(text: &'a str) -> Self {
        StrSource::new(text)
    }
}
