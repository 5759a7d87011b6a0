use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use crate::{Canvas, RasterError, Result};

/// Encode the canvas as an RGBA8 PNG in memory.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    canvas.as_image().write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

/// Write the canvas to `path` as PNG regardless of the path's extension.
pub fn write_png(canvas: &Canvas, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = encode_png(canvas)?;
    std::fs::write(path, bytes).map_err(|source| RasterError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("png written to {}", path.display());
    Ok(())
}
