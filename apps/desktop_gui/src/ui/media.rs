//! Product artwork loading and caching.

use std::collections::HashMap;
use std::fs;

use eframe::egui;
use image::GenericImageView;
use shared::domain::{Product, ProductId};

const MAX_ART_DIMENSION: f32 = 480.0;

/// Texture cache keyed by product. Art decodes once per run; a product whose
/// image file is missing or unreadable gets a generated placeholder instead.
#[derive(Default)]
pub struct ProductArt {
    cache: HashMap<ProductId, egui::TextureHandle>,
}

impl ProductArt {
    pub fn texture(&mut self, ctx: &egui::Context, product: &Product) -> egui::TextureHandle {
        if let Some(texture) = self.cache.get(&product.id) {
            return texture.clone();
        }

        let color_image = load_art_from_disk(&product.image_ref)
            .unwrap_or_else(|| placeholder_art(&product.category, &product.name));
        let texture = ctx.load_texture(
            format!("product-art:{}", product.id.0),
            color_image,
            egui::TextureOptions::LINEAR,
        );
        self.cache.insert(product.id, texture.clone());
        texture
    }
}

fn load_art_from_disk(image_ref: &str) -> Option<egui::ColorImage> {
    let bytes = fs::read(image_ref).ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?;

    let (orig_w, orig_h) = decoded.dimensions();
    let scale = (MAX_ART_DIMENSION / (orig_w.max(orig_h) as f32)).min(1.0);
    let resized = if scale < 1.0 {
        decoded.resize(
            (orig_w as f32 * scale).max(1.0) as u32,
            (orig_h as f32 * scale).max(1.0) as u32,
            image::imageops::FilterType::Triangle,
        )
    } else {
        decoded
    };
    let rgba = resized.to_rgba8();
    let [w, h] = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied([w, h], rgba.as_raw()))
}

/// Flat-shaded stand-in tinted per category so the grid stays scannable when
/// no artwork ships with the catalog.
fn placeholder_art(category: &str, name: &str) -> egui::ColorImage {
    let side = 256u32;
    let [r, g, b] = category_tint(category);
    let band = (name.len() as u32 % 5) * 40 + 28;
    let mut img = image::RgbaImage::new(side, side);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let fade = 1.0 - (y as f32 / side as f32) * 0.35;
        let boost = if x.abs_diff(y) < band { 18 } else { 0 };
        let ch = |v: u8| ((v as f32 * fade) as u8).saturating_add(boost);
        *pixel = image::Rgba([ch(r), ch(g), ch(b), 255]);
    }
    egui::ColorImage::from_rgba_unmultiplied([side as usize, side as usize], img.as_raw())
}

fn category_tint(category: &str) -> [u8; 3] {
    let hash = category
        .bytes()
        .fold(7u32, |acc, byte| acc.wrapping_mul(31).wrapping_add(u32::from(byte)));
    // Muted, greens-forward tints; the hash just picks a stable slot.
    [
        [134, 188, 141],
        [168, 196, 134],
        [121, 173, 160],
        [188, 178, 128],
        [142, 168, 195],
        [173, 148, 183],
    ][(hash % 6) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_art_is_square_and_opaque() {
        let art = placeholder_art("Teas", "Matcha Green Tea Powder");
        assert_eq!(art.size, [256, 256]);
        assert!(art.pixels.iter().all(|p| p.a() == 255));
    }

    #[test]
    fn the_same_category_always_gets_the_same_tint() {
        assert_eq!(category_tint("Teas"), category_tint("Teas"));
        assert_eq!(category_tint("Superfoods"), category_tint("Superfoods"));
    }

    #[test]
    fn a_missing_art_file_falls_back_to_none() {
        assert!(load_art_from_disk("definitely/not/here.png").is_none());
    }
}
