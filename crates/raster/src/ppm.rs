//! Plain (ASCII) PPM, the `P3` variant.
//!
//! Layout: `P3`, `width height`, `255` on their own lines, then one text line
//! per pixel row holding `r g b ` for each pixel. Alpha is dropped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Canvas, RasterError, Result};

pub const MAX_VALUE: u8 = 255;

pub fn write_ppm<W: Write>(canvas: &Canvas, out: W) -> Result<()> {
    write_body(canvas, out)?;
    Ok(())
}

/// Write to `path`; every failure, including mid-stream ones, names the file.
pub fn save_ppm(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    File::create(path)
        .and_then(|file| write_body(canvas, BufWriter::new(file)))
        .map_err(|source| RasterError::Io {
            path: path.display().to_string(),
            source,
        })
}

fn write_body<W: Write>(canvas: &Canvas, mut out: W) -> io::Result<()> {
    let size = canvas.size();
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", size, size)?;
    writeln!(out, "{}", MAX_VALUE)?;
    for (x, _y, px) in canvas.pixels() {
        let [r, g, b, _a] = px.0;
        write!(out, "{} {} {} ", r, g, b)?;
        if x + 1 == size {
            writeln!(out)?;
        }
    }
    out.flush()
}
