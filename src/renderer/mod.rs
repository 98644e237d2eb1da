//! Render pass
//!
//! Turns the current game state into a `Frame` of sprite and text commands.
//! Reads state only; the sole thing it updates is which backdrop is shown.

pub mod frame;

pub use frame::{Anchor, Backdrop, DrawCommand, FontSize, Frame, Layer, Sprite, TextCommand};

use glam::Vec2;

use crate::consts::ANIM_FRAME_MS;
use crate::sim::{BallonKind, Entity, GamePhase, GameState};
use frame::colors;

/// Frame counts of the host's animated sprite sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteSheets {
    pub unicorn: usize,
    pub ballon_common: usize,
    pub ballon_rare: usize,
}

impl Default for SpriteSheets {
    fn default() -> Self {
        Self {
            unicorn: 4,
            ballon_common: 4,
            ballon_rare: 4,
        }
    }
}

impl SpriteSheets {
    fn ballon(&self, kind: BallonKind) -> usize {
        match kind {
            BallonKind::Common => self.ballon_common,
            BallonKind::Rare => self.ballon_rare,
        }
    }
}

/// Cyclic animation frame for an elapsed time
#[inline]
pub fn anim_frame(elapsed_ms: u64, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    ((elapsed_ms / ANIM_FRAME_MS) % frame_count as u64) as usize
}

/// Builds frames; remembers the backdrop currently shown
#[derive(Debug, Clone)]
pub struct Renderer {
    sheets: SpriteSheets,
    backdrop: Backdrop,
    show_timer: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(SpriteSheets::default())
    }
}

impl Renderer {
    pub fn new(sheets: SpriteSheets) -> Self {
        Self {
            sheets,
            backdrop: Backdrop::default(),
            show_timer: true,
        }
    }

    /// Show or hide the countdown in the top-right corner
    pub fn set_show_timer(&mut self, show: bool) {
        self.show_timer = show;
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    /// Compose the frame for `state` at time `now` (seconds, same clock as
    /// `tick`) with `elapsed_ms` driving animations
    pub fn render(&mut self, state: &GameState, now: f64, elapsed_ms: u64) -> Frame {
        self.backdrop = match state.phase {
            GamePhase::Playing => Backdrop::Rainbow,
            GamePhase::GameOver => Backdrop::Endscreen,
        };

        let mut frame = Frame::default();
        frame.sprites.push(DrawCommand::new(
            Sprite::Backdrop(self.backdrop),
            Vec2::ZERO,
            Anchor::TopLeft,
            Layer::Background,
        ));

        match state.phase {
            GamePhase::Playing => self.draw_game(state, now, elapsed_ms, &mut frame),
            GamePhase::GameOver => draw_game_over(state, &mut frame),
        }
        frame
    }

    fn draw_game(&self, state: &GameState, now: f64, elapsed_ms: u64, frame: &mut Frame) {
        for ballon in &state.ballons {
            let sprite = DrawCommand::new(
                Sprite::Ballon(ballon.kind()),
                ballon.pos(),
                Anchor::Center,
                Layer::Ballons,
            )
            .with_frame(anim_frame(elapsed_ms, self.sheets.ballon(ballon.kind())));
            frame.sprites.push(sprite);
        }

        for cloud in &state.clouds {
            frame.sprites.push(DrawCommand::new(
                Sprite::Cloud,
                cloud.pos(),
                Anchor::Center,
                Layer::Clouds,
            ));
        }

        let player = &state.player;
        frame.sprites.push(
            DrawCommand::new(Sprite::Unicorn, player.pos(), Anchor::Center, Layer::Player)
                .with_frame(anim_frame(elapsed_ms, self.sheets.unicorn))
                .with_rotation(player.angle),
        );

        frame.texts.push(TextCommand {
            text: format!("Score: {}", player.score),
            font: FontSize::Normal,
            pos: Vec2::new(2.0, 2.0),
            layer: Layer::Ui,
            scale: 1.0,
            color: colors::HUD_PURPLE,
        });
        if self.show_timer {
            frame.texts.push(TextCommand {
                text: state.seconds_left(now).to_string(),
                font: FontSize::Normal,
                pos: Vec2::new(1175.0, 2.0),
                layer: Layer::Ui,
                scale: 1.0,
                color: colors::HUD_PURPLE,
            });
        }
    }
}

fn draw_game_over(state: &GameState, frame: &mut Frame) {
    frame.texts.push(TextCommand {
        text: format!("Your score is: {}", state.player.score),
        font: FontSize::Normal,
        pos: Vec2::new(400.0, 350.0),
        layer: Layer::Ui,
        scale: 2.0,
        color: colors::SCORE_PINK,
    });
    frame.texts.push(TextCommand {
        text: "Game Over".to_string(),
        font: FontSize::Big,
        pos: Vec2::new(320.0, 400.0),
        layer: Layer::Ui,
        scale: 1.0,
        color: colors::WHITE,
    });
    frame.texts.push(TextCommand {
        text: "press ESC to exit or hit ENTER to restart".to_string(),
        font: FontSize::Normal,
        pos: Vec2::new(330.0, 500.0),
        layer: Layer::Ui,
        scale: 1.0,
        color: colors::WHITE,
    });
}
