use std::io::{self, Write};

/// Digits per output line; a 16-bit cell always fits in four.
pub const HEX_WIDTH: usize = 4;

/// Write one cell as a line of zero-padded uppercase hex: "001E\n"
pub fn write_hex16<W: Write>(out: &mut W, v: u16) -> io::Result<()> {
    writeln!(out, "{:0width$X}", v, width = HEX_WIDTH)
}
