use std::env;

use image::Luma;
use regiongrow::{Image, RegionGrowingExt};

/// Builds the classic demonstration image: a 255-valued block with a
/// 0-valued interior hole on a dark background, duplicated side by side
/// into a 10x20 grid.
fn build_demo_image() -> Image<Luma<u8>> {
    let mut image: Image<Luma<u8>> = Image::new(20, 10);

    for panel in 0..2u32 {
        let offset = panel * 10;
        for y in 1..=8 {
            for x in 1..=6 {
                image.put_pixel(offset + x, y, Luma([255]));
            }
        }
        for y in 4..=5 {
            for x in 3..=4 {
                image.put_pixel(offset + x, y, Luma([0]));
            }
        }
    }

    image
}

/// Renders a binary mask as one ASCII row per image row
fn render_mask(mask: &Image<Luma<u8>>) -> String {
    let (width, height) = mask.dimensions();
    let mut out = String::with_capacity(((width + 1) * height) as usize);

    for y in 0..height {
        for x in 0..width {
            out.push(if mask.get_pixel(x, y)[0] == 255 { '#' } else { '.' });
        }
        out.push('\n');
    }

    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let (seed_x, seed_y, max_distance) = match args.len() {
        1 => (5, 5, 0.2),
        4 => (
            args[1].parse().map_err(|_| "Invalid seed x")?,
            args[2].parse().map_err(|_| "Invalid seed y")?,
            args[3].parse().map_err(|_| "Invalid max distance")?,
        ),
        _ => {
            eprintln!("Usage: {} [<seed_x> <seed_y> <max_distance>]", args[0]);
            eprintln!("Example: {} 5 5 0.2", args[0]);
            std::process::exit(1);
        }
    };

    let image = build_demo_image();
    println!(
        "Growing from seed ({}, {}) with max distance {} on a {}x{} image",
        seed_x,
        seed_y,
        max_distance,
        image.width(),
        image.height()
    );

    let growth = image.grow_region(seed_x, seed_y, max_distance)?;

    println!();
    print!("{}", render_mask(growth.mask()));
    println!();
    println!(
        "{} pixels absorbed, final mean {:.2}, stopped by {:?}",
        growth.size(),
        growth.mean(),
        growth.stop_reason()
    );

    Ok(())
}
