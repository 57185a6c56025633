use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

/// Android resource directory, relative to the invocation directory.
pub const BASE_PATH: &str = "android/app/src/main/res";

/// File name the audio service looks up for its stop action.
pub const ICON_FILE_NAME: &str = "audio_service_stop.png";

/// Stroke color of the glyph (CSS color format)
pub const STROKE_COLOR: &str = "white";

/// Density buckets and their icon edge length in pixels, in generation order.
pub const SIZES: &[(&str, u32)] = &[
    ("drawable-mdpi", 24),
    ("drawable-hdpi", 36),
    ("drawable-xhdpi", 48),
    ("drawable-xxhdpi", 72),
    ("drawable-xxxhdpi", 96),
];

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Line layout of the "X" glyph for one canvas size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGeometry {
    pub size: u32,
    pub thickness: u32,
    pub padding: u32,
}

impl GlyphGeometry {
    /// Stroke is a tenth of the edge (never thinner than 2px), inset by a fifth of the edge.
    pub fn for_size(size: u32) -> Self {
        GlyphGeometry {
            size,
            thickness: (size / 10).max(2),
            padding: size / 5,
        }
    }

    /// Top-left to bottom-right.
    pub fn first_diagonal(&self) -> ((u32, u32), (u32, u32)) {
        let far = self.size - self.padding;
        ((self.padding, self.padding), (far, far))
    }

    /// Bottom-left to top-right.
    pub fn second_diagonal(&self) -> ((u32, u32), (u32, u32)) {
        let far = self.size - self.padding;
        ((self.padding, far), (far, self.padding))
    }
}

pub fn generate_icons(root: &Path) -> Result<()> {
    let res_dir = root.join(BASE_PATH);
    let color = parse_color(STROKE_COLOR)?;

    println!("Generating Android stop icons...");

    for &(bucket, size) in SIZES {
        let bucket_dir = res_dir.join(bucket);
        create_dir_all(&bucket_dir)
            .with_context(|| format!("Can't create directory {}", bucket_dir.display()))?;

        let icon = render_stop_icon(size, color);
        write_png(&icon, &bucket_dir.join(ICON_FILE_NAME))?;
        println!("  ✓ Generated {bucket}/{ICON_FILE_NAME} ({size}x{size})");
    }

    println!("✓ Generated {} icons in {}", SIZES.len(), res_dir.display());
    Ok(())
}

/// Render the stop glyph onto a fully transparent `size`×`size` canvas
pub fn render_stop_icon(size: u32, color: Rgba<u8>) -> RgbaImage {
    let geometry = GlyphGeometry::for_size(size);
    let mut canvas = ImageBuffer::from_pixel(size, size, TRANSPARENT);

    let (from, to) = geometry.first_diagonal();
    draw_line(&mut canvas, from, to, geometry.thickness, color);
    let (from, to) = geometry.second_diagonal();
    draw_line(&mut canvas, from, to, geometry.thickness, color);

    canvas
}

/// Draw a flat-capped stroke between two pixel coordinates.
///
/// A pixel is covered when its center projects onto the segment and lies
/// within half the thickness of it. Width is measured to pixel centers, so a
/// diagonal at thickness 2 covers 3 pixels per row; this is not a pixel-exact
/// match of a polygon-filled wide line. Covered pixels are replaced with
/// `color`, there is no anti-aliasing at the edges.
pub fn draw_line(
    canvas: &mut RgbaImage,
    from: (u32, u32),
    to: (u32, u32),
    thickness: u32,
    color: Rgba<u8>,
) {
    let (ax, ay) = (from.0 as f32, from.1 as f32);
    let dx = to.0 as f32 - ax;
    let dy = to.1 as f32 - ay;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return;
    }

    let length = length_sq.sqrt();
    let half_width = thickness as f32 / 2.0;

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        let px = x as f32 - ax;
        let py = y as f32 - ay;

        let along = (px * dx + py * dy) / length_sq;
        if !(0.0..=1.0).contains(&along) {
            continue;
        }

        let distance = (px * dy - py * dx).abs() / length;
        if distance <= half_width {
            *pixel = color;
        }
    }
}

fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let color = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid stroke color: {}", color))?;

    Ok(Rgba([
        (color.red * 255.) as u8,
        (color.green * 255.) as u8,
        (color.blue * 255.) as u8,
        (color.alpha * 255.) as u8,
    ]))
}

// Encode as RGBA8 PNG, replacing whatever is at `path`
fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut out_file, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .with_context(|| format!("Failed to encode {}", path.display()))?;

    out_file
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}
