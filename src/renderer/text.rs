//! Bitmap font layout
//!
//! The font atlas is a 16x16 grid of glyphs indexed by ASCII code.

use glam::Vec2;

use super::vertex::GlyphVertex;

/// Glyphs per atlas row/column
pub const FONTBANK_SIZE: u32 = 16;

/// Build two triangles per character of `text`
///
/// Character `i` is centered at `origin.x + (font_size + spacing) * i`.
/// Characters outside ASCII are drawn as `?`.
pub fn layout_text(text: &str, font_size: f32, spacing: f32, origin: Vec2) -> Vec<GlyphVertex> {
    let cell = 1.0 / FONTBANK_SIZE as f32;
    let half = 0.5 * font_size;
    let mut vertices = Vec::with_capacity(text.len() * 6);

    for (i, ch) in text.chars().enumerate() {
        let index = if ch.is_ascii() { ch as u32 } else { '?' as u32 };
        let u = (index % FONTBANK_SIZE) as f32 * cell;
        let v = (index / FONTBANK_SIZE) as f32 * cell;

        let x = origin.x + (font_size + spacing) * i as f32;
        let y = origin.y;

        vertices.extend_from_slice(&[
            GlyphVertex::new(x - half, y + half, u, v),
            GlyphVertex::new(x - half, y - half, u, v + cell),
            GlyphVertex::new(x + half, y + half, u + cell, v),
            GlyphVertex::new(x + half, y - half, u + cell, v + cell),
            GlyphVertex::new(x + half, y + half, u + cell, v),
            GlyphVertex::new(x - half, y - half, u, v + cell),
        ]);
    }

    vertices
}
