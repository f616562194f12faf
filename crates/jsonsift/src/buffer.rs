//! The chunked source buffer.
//!
//! Pulls fixed-size byte chunks from an abstract byte source on demand and
//! exposes a single growing buffer with a cursor. The consumed prefix is
//! discarded after every completed token, so memory stays bounded by the
//! token currently being scanned plus chunk-granularity over-read — never
//! by document size.

use std::{fmt, io::Read};

use bstr::ByteSlice;

use crate::error::Error;

/// Default size of one pull from the underlying source: 1 KiB.
pub(crate) const CHUNK_SIZE: usize = 1024;

/// A growable-but-bounded byte buffer fed from an [`io::Read`] source.
///
/// Invariant: `0 <= pos <= buf.len()` at all times. Every inspection goes
/// through [`peek`](Self::peek), which is bounds-checked; truncated input
/// surfaces as `None`, never as an index panic.
///
/// [`io::Read`]: std::io::Read
pub(crate) struct SourceBuffer<R> {
    reader: R,
    buf: Vec<u8>,
    pos: usize,
    chunk_size: usize,
    exhausted: bool,
}

impl<R: Read> SourceBuffer<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self::with_chunk_size(reader, CHUNK_SIZE)
    }

    pub(crate) fn with_chunk_size(reader: R, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk size must be non-zero");
        Self {
            reader,
            buf: Vec::with_capacity(chunk_size),
            pos: 0,
            chunk_size,
            exhausted: false,
        }
    }

    /// Reads one chunk from the source and appends it to the buffer.
    ///
    /// Returns whether any bytes were obtained. Exhaustion is a normal
    /// condition, not an error: once the source reports end of stream,
    /// further pulls are no-ops returning `false`. Any other I/O failure
    /// aborts the pass.
    pub(crate) fn pull(&mut self) -> Result<bool, Error> {
        if self.exhausted {
            return Ok(false);
        }
        let start = self.buf.len();
        self.buf.resize(start + self.chunk_size, 0);
        let n = loop {
            match self.reader.read(&mut self.buf[start..]) {
                Ok(n) => break n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    self.buf.truncate(start);
                    return Err(e.into());
                }
            }
        };
        self.buf.truncate(start + n);
        if n == 0 {
            self.exhausted = true;
        }
        Ok(n > 0)
    }

    /// The byte under the cursor, or `None` when the buffer is depleted.
    ///
    /// After [`advance`](Self::advance), `None` means the source itself is
    /// exhausted: refills happen eagerly as the cursor reaches the end.
    pub(crate) fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Moves the cursor forward one byte, pulling more data whenever the
    /// cursor reaches the current buffer end.
    pub(crate) fn advance(&mut self) -> Result<(), Error> {
        self.pos += 1;
        if self.pos >= self.buf.len() {
            self.pull()?;
        }
        Ok(())
    }

    /// Advances past any whitespace (space, tab, CR, LF), refilling with
    /// the same discipline as [`advance`](Self::advance). Also primes an
    /// initially empty buffer.
    pub(crate) fn skip_whitespace(&mut self) -> Result<(), Error> {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\r' | b'\n') => self.advance()?,
                Some(_) => break,
                None => {
                    if !self.pull()? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Discards the consumed prefix `[0, pos)` and resets the cursor.
    pub(crate) fn trim_consumed(&mut self) {
        if self.pos > 0 {
            self.buf.drain(..self.pos);
            self.pos = 0;
        }
    }

    /// Skips whitespace, then trims. Called after every completed token.
    pub(crate) fn consume(&mut self) -> Result<(), Error> {
        self.skip_whitespace()?;
        self.trim_consumed();
        Ok(())
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed span `[start, pos)` of the token being scanned.
    ///
    /// Valid only between two trims: token scanners record `start` after
    /// the opening delimiter and never trim mid-token, so indices are
    /// stable even when pulls append more data.
    pub(crate) fn span_from(&self, start: usize) -> &[u8] {
        &self.buf[start..self.pos]
    }
}

impl<R> fmt::Debug for SourceBuffer<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer")
            .field("buf", &self.buf.as_bstr())
            .field("pos", &self.pos)
            .field("chunk_size", &self.chunk_size)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
