use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::Failure;
use crate::scanner::Scanner;
use crate::util::hex::write_hex16;
use crate::util::ring_buffer::RingBuffer;

/// Number of 16-bit cells that survive before the ring wraps.
pub const RING_CAPACITY: usize = 32768;

/// Reads integers from a sequence of sources into the ring, then replays the
/// ring as hex. Output only starts once every source has been ingested.
#[derive(Debug)]
pub struct Converter {
    ring: RingBuffer,
}

impl Converter {
    pub fn new() -> Self {
        Self { ring: RingBuffer::new(RING_CAPACITY) }
    }

    /// Ingest every source in order. The first source that fails to open or
    /// close aborts the rest.
    pub fn ingest<P: AsRef<Path>>(&mut self, sources: &[P]) -> Result<()> {
        for path in sources {
            self.ingest_file(path.as_ref())?;
        }
        Ok(())
    }

    fn ingest_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| Failure::Open(path.to_path_buf()))?;
        let reader = self.ingest_reader(BufReader::new(file));
        close_source(path, reader.into_inner())
    }

    /// Drain integers from `reader` until the first token that doesn't scan.
    /// A read error ends the source the same way. The reader is handed back
    /// so the caller decides how to dispose of it.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> R {
        let mut scanner = Scanner::new(reader);
        while let Ok(Some(d)) = scanner.next_int() {
            self.ring.push(d as u16);
        }
        scanner.into_inner()
    }

    /// Write one line per ingested value, in logical order, then flush.
    pub fn emit<W: Write>(&self, out: &mut W) -> Result<()> {
        for v in self.ring.iter() {
            write_hex16(out, v).context(Failure::Write)?;
        }
        out.flush().context(Failure::Write)
    }
}

impl Default for Converter {
    fn default() -> Self { Self::new() }
}

fn close_source(path: &Path, file: File) -> Result<()> {
    close(file).with_context(|| Failure::Close(path.to_path_buf()))
}

// File's Drop swallows close(2) errors, so close the descriptor ourselves.
#[cfg(unix)]
fn close(file: File) -> nix::Result<()> {
    use std::os::fd::IntoRawFd;
    nix::unistd::close(file.into_raw_fd())
}

#[cfg(not(unix))]
fn close(file: File) -> std::io::Result<()> {
    drop(file);
    Ok(())
}
