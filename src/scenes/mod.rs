//! Scenes.
//!
//! A scene owns one screen of the game and answers the same four calls:
//! [`Scene::update`] once per frame, [`Scene::do_action`] per input edge,
//! [`Scene::render`] to describe what would be drawn, and
//! [`Scene::action_map`] to translate key names into actions.
//!
//! Submodules overview
//! - [`menu`] – level selection
//! - [`play`] – a running level and its system pipeline

pub mod menu;
pub mod play;

use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::error::AssetError;
use crate::events::action::{Action, ActionMap};
use crate::resources::context::GameContext;

pub use menu::MenuScene;
pub use play::PlayScene;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SceneKind {
    Menu,
    Play,
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneKind::Menu => f.write_str("MENU"),
            SceneKind::Play => f.write_str("PLAY"),
        }
    }
}

/// One primitive a renderer would draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    Clear { color: [u8; 3] },
    Sprite {
        animation: String,
        frame: u32,
        pos: Vec2,
        scale: Vec2,
        angle: f32,
    },
    /// Outline of an axis-aligned box centered on `pos`.
    Rect { pos: Vec2, size: Vec2 },
    Line { from: Vec2, to: Vec2 },
    Text {
        text: String,
        pos: Vec2,
        size: u32,
        highlighted: bool,
    },
}

/// Everything a scene wants drawn this frame. `camera` is the view center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub camera: Vec2,
    pub commands: Vec<DrawCmd>,
}

pub trait Scene {
    fn kind(&self) -> SceneKind;

    fn action_map(&self) -> &ActionMap;

    /// Advance one frame. Missing assets are fatal and bubble up.
    fn update(&mut self, ctx: &mut GameContext) -> Result<(), AssetError>;

    fn do_action(&mut self, action: &Action, ctx: &mut GameContext);

    fn render(&self, ctx: &GameContext) -> Frame;

    /// Downcast for tooling that inspects a running level.
    fn as_play(&self) -> Option<&PlayScene> {
        None
    }

    fn as_play_mut(&mut self) -> Option<&mut PlayScene> {
        None
    }
}
