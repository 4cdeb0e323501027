// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Plain-text lot layouts.
//!
//! The format is a stream of whitespace separated tokens:
//!
//! ```text
//! <floor_count>
//! <floor_id> <spot_count>
//! <spot_id> <class>      (spot_count times)
//! ...                    (floor_count times)
//! ```
//!
//! `class` is one of `compact`, `regular`, `large` or the shorthands `C`, `R`, `L`.
//! A `#` starts a comment that runs to the end of the line.

use crate::{
    common::{FloorIdentifier, SpotIdentifier},
    err::LayoutLoaderError,
    floor::Floor,
    layout::builder::LayoutBuilder,
    spot::{Spot, SpotClass},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutLoader {
    skip_empty_floors: bool,
}

impl LayoutLoader {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop floors declared with zero spots instead of keeping them.
    #[inline]
    pub fn skip_empty_floors(mut self, yes: bool) -> Self {
        self.skip_empty_floors = yes;
        self
    }

    pub fn from_bufread<R: BufRead>(&self, mut br: R) -> Result<Vec<Floor>, LayoutLoaderError> {
        let mut sc = Scanner::new(&mut br);
        let floor_count = sc.next_usize()?;

        let mut builder = LayoutBuilder::new();
        for _ in 0..floor_count {
            let floor_id = FloorIdentifier::new(sc.next_usize()?);
            let spot_count = sc.next_usize()?;

            let mut floor = Floor::new(floor_id);
            for _ in 0..spot_count {
                let spot_id = SpotIdentifier::new(sc.next_usize()?);
                let class: SpotClass = sc.next_token()?.parse()?;
                floor.add_spot(Spot::new(spot_id, class));
            }

            if floor.is_empty() && self.skip_empty_floors {
                tracing::debug!("Skipping empty floor {}", floor_id);
                continue;
            }
            builder.add_floor(floor);
        }

        let floors = builder.build()?;
        tracing::debug!(
            "Loaded layout with {} floors and {} spots",
            floors.len(),
            floors.iter().map(Floor::len).sum::<usize>()
        );
        Ok(floors)
    }

    #[inline]
    pub fn from_path(&self, path: impl AsRef<Path>) -> Result<Vec<Floor>, LayoutLoaderError> {
        let file = File::open(path).map_err(LayoutLoaderError::Io)?;
        self.from_bufread(BufReader::new(file))
    }

    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Vec<Floor>, LayoutLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Vec<Floor>, LayoutLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

#[derive(Debug)]
struct Scanner<R: BufRead> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    #[inline]
    fn fill_line(&mut self) -> Result<(), LayoutLoaderError> {
        self.buf.clear();
        self.pos = 0;
        let n = self
            .rdr
            .read_line(&mut self.buf)
            .map_err(LayoutLoaderError::Io)?;
        if n == 0 {
            return Err(LayoutLoaderError::UnexpectedEof);
        }
        // Comments run to end of line.
        if let Some(hash) = self.buf.find('#') {
            self.buf.truncate(hash);
        }
        Ok(())
    }

    #[inline]
    fn skip_ws(&mut self) -> Result<(), LayoutLoaderError> {
        loop {
            let bytes = self.buf.as_bytes();
            while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.buf.len() {
                return Ok(());
            }
            self.fill_line()?;
        }
    }

    #[inline]
    fn next_token(&mut self) -> Result<&str, LayoutLoaderError> {
        self.skip_ws()?;
        let start = self.pos;
        let bytes = self.buf.as_bytes();
        while self.pos < bytes.len() && !bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        Ok(&self.buf[start..self.pos])
    }

    #[inline]
    fn next_usize(&mut self) -> Result<usize, LayoutLoaderError> {
        let tok = self.next_token()?;
        tok.parse::<usize>().map_err(LayoutLoaderError::ParseInt)
    }
}
