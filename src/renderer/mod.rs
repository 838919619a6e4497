//! Rendering seam
//!
//! The simulation never draws. Once per frame it captures a `Frame` (sprite
//! instances plus status text) and hands it to whatever `Renderer` the
//! platform provides.

pub mod text;
pub mod vertex;

pub use text::layout_text;
pub use vertex::{GlyphVertex, SpriteInstance};

use glam::{Vec2, Vec3};

use crate::consts::{FONT_SIZE, FONT_SPACING, OUT_OF_FUEL_MESSAGE};
use crate::sim::GameSession;

/// Screen position of the out-of-fuel warning
pub const FUEL_TEXT_POS: Vec3 = Vec3::new(2.0, -3.0, 0.0);
/// Screen position of the win/lose message
pub const OUTCOME_TEXT_POS: Vec3 = Vec3::new(-2.0, 2.0, 0.0);

/// A line of status text
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: &'static str,
    pub position: Vec3,
    pub font_size: f32,
    pub spacing: f32,
}

impl TextItem {
    pub fn new(text: &'static str, position: Vec3) -> Self {
        Self {
            text,
            position,
            font_size: FONT_SIZE,
            spacing: FONT_SPACING,
        }
    }

    pub fn glyphs(&self) -> Vec<GlyphVertex> {
        layout_text(
            self.text,
            self.font_size,
            self.spacing,
            Vec2::new(self.position.x, self.position.y),
        )
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    /// Collidables first, player last
    pub sprites: Vec<SpriteInstance>,
    pub texts: Vec<TextItem>,
}

impl Frame {
    /// Snapshot the session for drawing
    pub fn capture(session: &GameSession) -> Self {
        let mut sprites: Vec<_> = session
            .collidables
            .iter()
            .map(SpriteInstance::from_entity)
            .collect();
        sprites.push(SpriteInstance::from_entity(&session.player));

        let mut texts = Vec::new();
        if session.out_of_fuel() {
            texts.push(TextItem::new(OUT_OF_FUEL_MESSAGE, FUEL_TEXT_POS));
        }
        if let Some(message) = session.outcome.message() {
            texts.push(TextItem::new(message, OUTCOME_TEXT_POS));
        }

        Self { sprites, texts }
    }

    /// Sprite instances as raw bytes for a GPU instance buffer
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sprites)
    }

    /// Glyph quads for all status text
    pub fn glyph_vertices(&self) -> Vec<GlyphVertex> {
        self.texts.iter().flat_map(TextItem::glyphs).collect()
    }
}

/// Something that can put a frame on screen
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

/// Renderer that keeps every frame it is given
#[derive(Debug, Default)]
pub struct DrawList {
    pub frames: Vec<Frame>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }
}

impl Renderer for DrawList {
    fn draw(&mut self, frame: &Frame) {
        self.frames.push(frame.clone());
    }
}
