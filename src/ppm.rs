use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::image::{PixelBuffer, CHANNELS};

/// Write the image as plain text PPM (P3). Alpha is dropped.
pub fn write_ppm<W: Write>(image: &PixelBuffer, mut out: W) -> io::Result<()> {
    // COLS x ROWS; 255 is max colour
    write!(out, "P3\n{} {}\n255\n", image.width(), image.height())?;
    for row in image.rows() {
        for pixel in row.chunks_exact(CHANNELS) {
            write!(out, "{} {} {} ", pixel[0], pixel[1], pixel[2])?;
        }
        writeln!(out)?;
    }
    out.flush()
}

pub fn to_ppm_string(image: &PixelBuffer) -> io::Result<String> {
    let mut bytes = Vec::new();
    write_ppm(image, &mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// An output file opened ahead of rendering, so a bad path fails before any work
pub struct PpmFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl PpmFile {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<PpmFile> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Ok(PpmFile { path: path.to_owned(), writer: BufWriter::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(mut self, image: &PixelBuffer) -> Result<()> {
        write_ppm(image, &mut self.writer).map_err(|e| Error::io(&self.path, e))?;
        log::info!("Wrote {}x{} image to {}", image.width(), image.height(), self.path.display());
        Ok(())
    }
}

pub fn save_ppm<P: AsRef<Path>>(image: &PixelBuffer, path: P) -> Result<()> {
    PpmFile::create(path)?.write(image)
}
