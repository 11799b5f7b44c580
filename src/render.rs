use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::nearest_hit;
use crate::image::{PixelBuffer, CHANNELS};
use crate::math::Vec3;
use crate::scene::Scene;

/// Width and height of the rendered image
pub const DIM: usize = 2048;
/// Edge length of the square tiles work is scheduled in
pub const TILE_SIZE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub tile_size: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings { width: DIM, height: DIM, tile_size: TILE_SIZE }
    }
}

impl RenderSettings {
    pub fn new(width: usize, height: usize) -> RenderSettings {
        RenderSettings { width, height, tile_size: TILE_SIZE }
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(Error::InvalidSettings("tile size must be at least 1".to_owned()));
        }
        Ok(())
    }
}

/// Map a pixel to the (x, y) of the ray cast through it.
///
/// Horizontally the image is centred on the origin. Vertically every row sits
/// below the origin, `y - height - 2`; this is kept as-is since changing it
/// changes which spheres are visible.
pub fn ray_offset(x: usize, y: usize, width: usize, height: usize) -> (f32, f32) {
    let ox = x as i64 - (width / 2) as i64;
    let oy = y as i64 - height as i64 - 2;
    (ox as f32, oy as f32)
}

/// Compute the RGBA colour of one pixel: the nearest sphere's colour scaled
/// by its shading factor, or opaque black if the ray hits nothing
pub fn shade_pixel(scene: &Scene, settings: &RenderSettings, x: usize, y: usize) -> [u8; 4] {
    let (ox, oy) = ray_offset(x, y, settings.width, settings.height);
    let colour = match nearest_hit(scene.spheres(), ox, oy) {
        Some((index, record)) => scene.get(index).colour * record.shade,
        None => Vec3::splat(0.0),
    };

    [to_byte(colour.x), to_byte(colour.y), to_byte(colour.z), 255]
}

// Truncates like an integer cast; `as` also saturates anything outside [0,255]
fn to_byte(channel: f32) -> u8 {
    (channel * 255.0) as u8
}

/// Fill one horizontal band of `tile_size` rows, walking it tile by tile
fn render_band(scene: &Scene, settings: &RenderSettings, band_index: usize, band: &mut [u8]) {
    let width = settings.width;
    let tile = settings.tile_size;
    let first_row = band_index * tile;
    let rows = band.len() / (width * CHANNELS);

    for tile_x in (0..width).step_by(tile) {
        let tile_end = (tile_x + tile).min(width);
        for dy in 0..rows {
            let y = first_row + dy;
            for x in tile_x..tile_end {
                let i = (x + dy * width) * CHANNELS;
                band[i..i + CHANNELS].copy_from_slice(&shade_pixel(scene, settings, x, y));
            }
        }
    }
}

fn prepare(scene: &Scene, settings: &RenderSettings) -> Result<PixelBuffer> {
    settings.validate()?;
    log::debug!(
        "Rendering {}x{} against {} spheres in {}x{} tiles",
        settings.width, settings.height, scene.len(), settings.tile_size, settings.tile_size
    );
    PixelBuffer::allocate(settings.width, settings.height)
}

/// Render every pixel in parallel on the current rayon pool.
///
/// Bands of tiles are handed to workers as disjoint slices of the buffer, so
/// no two tasks ever touch the same pixel.
pub fn render(scene: &Scene, settings: &RenderSettings) -> Result<PixelBuffer> {
    let mut image = prepare(scene, settings)?;
    if image.as_bytes().is_empty() {
        return Ok(image);
    }

    let band_len = settings.tile_size * image.row_len();
    image.as_bytes_mut()
        .par_chunks_mut(band_len)
        .enumerate()
        .for_each(|(band_index, band)| render_band(scene, settings, band_index, band));

    Ok(image)
}

/// Build a pool with exactly `threads` workers
pub fn thread_pool(threads: usize) -> Result<rayon::ThreadPool> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("raster-{}", i))
        .build()?;
    Ok(pool)
}

/// As [`render`], but on a caller supplied thread pool
pub fn render_in(pool: &rayon::ThreadPool, scene: &Scene, settings: &RenderSettings) -> Result<PixelBuffer> {
    pool.install(|| render(scene, settings))
}

/// Single threaded render, producing the same bytes as [`render`]
pub fn render_serial(scene: &Scene, settings: &RenderSettings) -> Result<PixelBuffer> {
    let mut image = prepare(scene, settings)?;
    if image.as_bytes().is_empty() {
        return Ok(image);
    }

    let band_len = settings.tile_size * image.row_len();
    for (band_index, band) in image.as_bytes_mut().chunks_mut(band_len).enumerate() {
        render_band(scene, settings, band_index, band);
    }

    Ok(image)
}
