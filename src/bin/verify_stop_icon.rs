use anyhow::{Context, Result};
use image::io::Reader as ImageReader;

const DEFAULT_PATH: &str = "android/app/src/main/res/drawable-mdpi/audio_service_stop.png";

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_PATH.to_string());
    let expected_size = std::env::args()
        .nth(2)
        .map(|size| size.parse::<u32>())
        .transpose()
        .context("EXPECTED_SIZE must be a positive integer")?;

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open {}", path))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path))?;

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking stop icon in: {}", path);
    println!("Image dimensions: {}x{}", width, height);

    let mut problems = Vec::new();

    if width != height {
        problems.push(format!("icon is not square ({}x{})", width, height));
    }
    if let Some(size) = expected_size {
        if width != size || height != size {
            problems.push(format!("expected {}x{}", size, size));
        }
    }

    if width > 0 && height > 0 {
        let corners = [
            (0, 0),
            (width - 1, 0),
            (0, height - 1),
            (width - 1, height - 1),
        ];
        println!("\nCorner alpha:");
        for (x, y) in corners {
            let alpha = rgba_img.get_pixel(x, y)[3];
            println!("  ({}, {}): {}", x, y, alpha);
            if alpha != 0 {
                problems.push(format!("corner ({}, {}) is not transparent", x, y));
            }
        }

        let (center_x, center_y) = (width / 2, height / 2);
        let pixel = rgba_img.get_pixel(center_x, center_y);
        println!("\nCenter pixel (x={}, y={}):", center_x, center_y);
        println!("  RGBA: [{}, {}, {}, {}]", pixel[0], pixel[1], pixel[2], pixel[3]);
        if pixel.0 != [255, 255, 255, 255] {
            problems.push("center pixel is not opaque white".to_string());
        }
    }

    if problems.is_empty() {
        println!("\n✓ Stop glyph detected!");
        Ok(())
    } else {
        for problem in &problems {
            eprintln!("⚠ {}", problem);
        }
        std::process::exit(1);
    }
}
