use std::io::{self, BufRead};

/// Pulls decimal integers off a byte stream one at a time, the way
/// `scanf("%d")` does: skip whitespace, optional sign, then digits up to the
/// first byte that isn't one. That byte is left unread.
pub struct Scanner<R> {
    inner: R,
}

impl<R: BufRead> Scanner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn bump(&mut self) {
        self.inner.consume(1);
    }

    /// Next integer in the stream, or `None` once the stream stops yielding
    /// numbers (end of input or a token that doesn't scan).
    ///
    /// Magnitude is unbounded; accumulation wraps, so the low bits of the
    /// result always match the decimal text. glibc's `scanf` saturates
    /// out-of-range input instead, so results differ from it past 64 bits.
    pub fn next_int(&mut self) -> io::Result<Option<i64>> {
        while let Some(b) = self.peek()? {
            if !is_space(b) { break; }
            self.bump();
        }

        let negative = match self.peek()? {
            Some(b'-') => { self.bump(); true }
            Some(b'+') => { self.bump(); false }
            _ => false,
        };

        let mut value: i64 = 0;
        let mut digits = 0usize;
        while let Some(b) = self.peek()? {
            if !b.is_ascii_digit() { break; }
            value = value.wrapping_mul(10).wrapping_add(i64::from(b - b'0'));
            digits += 1;
            self.bump();
        }

        if digits == 0 {
            return Ok(None);
        }
        Ok(Some(if negative { value.wrapping_neg() } else { value }))
    }
}

// C isspace() in the "C" locale
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}
