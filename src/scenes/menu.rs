//! Level selection menu.
//!
//! Lists every configured level followed by `Quit`. UP/DOWN move the
//! selection and stop at either end; PLAY starts the selected level or quits
//! on the last entry; QUIT leaves the game; REFRESH rebuilds the menu from the
//! current configuration.

use std::path::PathBuf;

use glam::Vec2;
use log::{debug, info};

use crate::error::AssetError;
use crate::events::action::{self, Action, ActionKind, ActionMap};
use crate::resources::context::GameContext;
use crate::resources::scenestate::SceneRequest;
use crate::scenes::{DrawCmd, Frame, Scene, SceneKind};

const TITLE: &str = "MegaMario";
const HELP: &str = "MOVE: ARROWS | PLAY: ENTER | QUIT/MENU: ESCAPE";
const TITLE_OFFSET: Vec2 = Vec2::new(144.0, 48.0);
const ITEM_OFFSET: Vec2 = Vec2::new(92.0, 148.0);
const ITEM_SPACING: f32 = 108.0;
const BACKGROUND: [u8; 3] = [100, 100, 255];

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    /// `None` for the quit entry.
    pub level: Option<PathBuf>,
}

#[derive(Debug)]
pub struct MenuScene {
    items: Vec<MenuItem>,
    selected: usize,
    action_map: ActionMap,
}

impl MenuScene {
    pub fn new(ctx: &GameContext) -> Self {
        let mut items: Vec<MenuItem> = ctx
            .config
            .levels
            .iter()
            .map(|level| MenuItem {
                label: level.name.clone(),
                level: Some(level.path.clone()),
            })
            .collect();
        items.push(MenuItem {
            label: "Quit".to_owned(),
            level: None,
        });
        info!("Menu built with {} levels", items.len() - 1);

        let mut action_map = ActionMap::new();
        action_map.register("Escape", action::QUIT);
        action_map.register("Down", action::DOWN);
        action_map.register("Up", action::UP);
        action_map.register("Enter", action::PLAY);
        action_map.register("R", action::REFRESH);

        Self {
            items,
            selected: 0,
            action_map,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn activate(&self, ctx: &mut GameContext) {
        match self.items.get(self.selected).and_then(|item| item.level.clone()) {
            Some(path) => ctx.next_scene.set(SceneRequest::Play(path)),
            None => ctx.quit(),
        }
    }
}

impl Scene for MenuScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Menu
    }

    fn action_map(&self) -> &ActionMap {
        &self.action_map
    }

    fn update(&mut self, _ctx: &mut GameContext) -> Result<(), AssetError> {
        Ok(())
    }

    fn do_action(&mut self, action: &Action, ctx: &mut GameContext) {
        if action.kind != ActionKind::Start {
            return;
        }
        debug!("menu action {}", action.name);
        let last = self.items.len().saturating_sub(1);
        match action.name.as_str() {
            action::QUIT => ctx.quit(),
            action::DOWN => self.selected = (self.selected + 1).min(last),
            action::UP => self.selected = self.selected.saturating_sub(1),
            action::PLAY => self.activate(ctx),
            action::REFRESH => ctx.next_scene.set(SceneRequest::Menu),
            _ => {}
        }
    }

    fn render(&self, ctx: &GameContext) -> Frame {
        let screen = ctx.screen.as_vec2();
        let mut commands = vec![
            DrawCmd::Clear { color: BACKGROUND },
            DrawCmd::Text {
                text: TITLE.to_owned(),
                pos: TITLE_OFFSET,
                size: 48,
                highlighted: true,
            },
        ];
        for (i, item) in self.items.iter().enumerate() {
            commands.push(DrawCmd::Text {
                text: item.label.clone(),
                pos: ITEM_OFFSET + Vec2::new(0.0, ITEM_SPACING * i as f32),
                size: 36,
                highlighted: i == self.selected,
            });
        }
        commands.push(DrawCmd::Text {
            text: HELP.to_owned(),
            pos: Vec2::new(24.0, 0.875 * screen.y),
            size: 24,
            highlighted: false,
        });
        Frame {
            camera: 0.5 * screen,
            commands,
        }
    }
}
