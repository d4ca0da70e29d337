use super::{InputSource, IoState};
use std::io::{BufRead, ErrorKind};

/// Byte source over any buffered reader. Blocks whenever `R` blocks.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    consumed: usize,
    state: IoState,
    error: Option<std::io::Error>,
}

impl<R: BufRead> ReadSource<R> {
    pub fn new(reader: R) -> ReadSource<R> {
        ReadSource {
            reader,
            consumed: 0,
            state: IoState::GOOD,
            error: None,
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buffer) => return Ok(buffer.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }

    fn record(&mut self, err: std::io::Error) {
        log::error!("input source read failed: {}", err);
        self.state = self.state | IoState::BAD | IoState::FAIL;
        self.error = Some(err);
    }
}

impl<R: BufRead> InputSource for ReadSource<R> {
    type Char = u8;

    fn get(&mut self) -> Option<u8> {
        if !self.state.good() {
            self.state.fail = true;
            return None;
        }

        match self.next_byte() {
            Ok(Some(byte)) => {
                self.reader.consume(1);
                self.consumed += 1;
                Some(byte)
            }
            Ok(None) => {
                self.state = self.state | IoState::EOF | IoState::FAIL;
                None
            }
            Err(err) => {
                self.record(err);
                None
            }
        }
    }

    fn peek(&mut self) -> Option<u8> {
        if !self.state.good() {
            self.state.fail = true;
            return None;
        }

        match self.next_byte() {
            Ok(Some(byte)) => Some(byte),
            Ok(None) => {
                self.state.eof = true;
                None
            }
            Err(err) => {
                self.record(err);
                None
            }
        }
    }

    fn state(&self) -> IoState {
        self.state
    }

    fn clear_to(&mut self, state: IoState) {
        if !state.bad {
            self.error = None;
        }
        self.state = state;
    }

    fn consumed(&self) -> usize {
        self.consumed
    }

    fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }
}
