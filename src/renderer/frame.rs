//! Draw command types handed to the host display

use glam::Vec2;
use serde::Serialize;

use crate::sim::BallonKind;

/// Z-ordering, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Layer {
    Background = 0,
    Ballons = 1,
    Clouds = 2,
    Player = 3,
    Ui = 4,
}

/// Full-screen backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Backdrop {
    #[default]
    Rainbow,
    Endscreen,
}

/// Opaque sprite handles resolved by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sprite {
    Backdrop(Backdrop),
    Unicorn,
    Ballon(BallonKind),
    Cloud,
}

/// Which point of the image `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// Font sizes the host provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FontSize {
    /// 20px
    Normal,
    /// 100px
    Big,
}

/// Draw one sprite (or one frame of an animated sheet)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawCommand {
    pub sprite: Sprite,
    /// Animation frame index within the sheet
    pub frame: usize,
    pub pos: Vec2,
    pub anchor: Anchor,
    /// Rotation in degrees around the anchor
    pub rotation: f32,
    pub layer: Layer,
    pub scale: f32,
    /// ARGB tint
    pub tint: u32,
}

impl DrawCommand {
    pub const fn new(sprite: Sprite, pos: Vec2, anchor: Anchor, layer: Layer) -> Self {
        Self {
            sprite,
            frame: 0,
            pos,
            anchor,
            rotation: 0.0,
            layer,
            scale: 1.0,
            tint: colors::WHITE,
        }
    }

    pub const fn with_frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    pub const fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Draw one line of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextCommand {
    pub text: String,
    pub font: FontSize,
    /// Top-left of the text box
    pub pos: Vec2,
    pub layer: Layer,
    pub scale: f32,
    pub color: u32,
}

/// Everything to draw this frame
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Frame {
    pub sprites: Vec<DrawCommand>,
    pub texts: Vec<TextCommand>,
}

impl Frame {
    /// Sprites in back-to-front order (stable within a layer)
    pub fn sorted_sprites(&self) -> Vec<DrawCommand> {
        let mut sprites = self.sprites.clone();
        sprites.sort_by_key(|s| s.layer);
        sprites
    }
}

/// Text colors (ARGB)
pub mod colors {
    pub const WHITE: u32 = 0xffff_ffff;
    pub const HUD_PURPLE: u32 = 0xff5c_00a1;
    pub const SCORE_PINK: u32 = 0xfff7_2eff;
}
