//! Game engine: scene registry, input dispatch and scene transitions.
//!
//! [`GameEngine`] owns the shared [`GameContext`] and every live scene keyed
//! by [`SceneKind`]. Scenes request transitions through
//! [`NextScene`](crate::resources::scenestate::NextScene); the engine applies
//! them at the start of the next [`GameEngine::update`], before the active
//! scene runs, so the switch always lands on a frame boundary.
//!
//! Transition rules:
//! - `Menu` rebuilds the menu and drops the scene that asked for it.
//! - `Play(path)` loads a level and keeps the menu registered underneath.

use std::path::Path;

use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::error::AssetError;
use crate::events::action::{Action, ActionKind};
use crate::resources::audio::AudioBridge;
use crate::resources::context::GameContext;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenestate::SceneRequest;
use crate::scenes::{Frame, MenuScene, PlayScene, Scene, SceneKind};

pub struct GameEngine {
    ctx: GameContext,
    scenes: FxHashMap<SceneKind, Box<dyn Scene>>,
    current: SceneKind,
}

impl GameEngine {
    /// Register assets from `config`, preload sounds and open the menu.
    pub fn new(config: GameConfig, audio: AudioBridge) -> Self {
        let ctx = GameContext::new(config, audio);
        ctx.audio.load_all(&ctx.assets);
        let menu = MenuScene::new(&ctx);
        let mut engine = Self {
            ctx,
            scenes: FxHashMap::default(),
            current: SceneKind::Menu,
        };
        engine.change_scene(SceneKind::Menu, Box::new(menu), true);
        engine
    }

    /// Make `scene` the active scene under `kind`. With `end_current`, the
    /// previously active scene is dropped first.
    pub fn change_scene(&mut self, kind: SceneKind, scene: Box<dyn Scene>, end_current: bool) {
        info!("Changing scene from {} to {}", self.current, kind);
        if end_current {
            self.scenes.remove(&self.current);
        }
        self.scenes.insert(kind, scene);
        self.current = kind;
    }

    /// Load the level at `path` and switch to it right away.
    pub fn start_level(&mut self, path: &Path) -> Result<(), AssetError> {
        let scene = PlayScene::new(path, &self.ctx)?;
        self.change_scene(SceneKind::Play, Box::new(scene), false);
        Ok(())
    }

    fn apply_pending_scene(&mut self) -> Result<(), AssetError> {
        match self.ctx.next_scene.take() {
            Some(SceneRequest::Menu) => {
                let menu = MenuScene::new(&self.ctx);
                self.change_scene(SceneKind::Menu, Box::new(menu), true);
            }
            Some(SceneRequest::Play(path)) => self.start_level(&path)?,
            None => {}
        }
        Ok(())
    }

    /// Advance one frame: apply any pending scene change, then update the
    /// active scene. Missing assets abort the frame with an error.
    pub fn update(&mut self) -> Result<(), AssetError> {
        if !self.ctx.is_running() {
            return Ok(());
        }
        self.apply_pending_scene()?;
        if let Some(scene) = self.scenes.get_mut(&self.current) {
            scene.update(&mut self.ctx)?;
        }
        Ok(())
    }

    /// Send an action straight to the active scene.
    pub fn do_action(&mut self, name: &str, kind: ActionKind) {
        let action = Action::new(name, kind);
        if let Some(scene) = self.scenes.get_mut(&self.current) {
            scene.do_action(&action, &mut self.ctx);
        }
    }

    /// Translate a key event through the active scene's bindings. Returns
    /// `false` for unbound keys.
    pub fn key_event(&mut self, key: &str, kind: ActionKind) -> bool {
        let Some(name) = self
            .current_scene()
            .and_then(|s| s.action_map().action_for(key))
            .map(str::to_owned)
        else {
            warn!("key {key} is not bound in {}", self.current);
            return false;
        };
        self.do_action(&name, kind);
        true
    }

    pub fn render(&self) -> Option<Frame> {
        self.current_scene().map(|s| s.render(&self.ctx))
    }

    pub fn current_kind(&self) -> SceneKind {
        self.current
    }

    pub fn current_scene(&self) -> Option<&dyn Scene> {
        self.scenes.get(&self.current).map(|s| s.as_ref())
    }

    /// The running level, if the active scene is one.
    pub fn play_scene(&self) -> Option<&PlayScene> {
        self.current_scene().and_then(|s| s.as_play())
    }

    pub fn play_scene_mut(&mut self) -> Option<&mut PlayScene> {
        self.scenes
            .get_mut(&self.current)
            .and_then(|s| s.as_play_mut())
    }

    pub fn has_scene(&self, kind: SceneKind) -> bool {
        self.scenes.contains_key(&kind)
    }

    pub fn context(&self) -> &GameContext {
        &self.ctx
    }

    pub fn is_running(&self) -> bool {
        self.ctx.is_running()
    }

    pub fn quit(&mut self) {
        info!("Quitting");
        self.ctx.quit();
        self.ctx.audio.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::action;
    use crate::testutil;

    fn engine() -> GameEngine {
        GameEngine::new(testutil::config(), AudioBridge::disconnected())
    }

    #[test]
    fn starts_on_menu() {
        let engine = engine();
        assert_eq!(engine.current_kind(), SceneKind::Menu);
        assert!(engine.play_scene().is_none());
        assert!(engine.is_running());
    }

    #[test]
    fn level_request_is_applied_on_next_update() {
        let mut engine = engine();
        engine.ctx.next_scene.set(SceneRequest::Play("missing.txt".into()));
        assert_eq!(engine.current_kind(), SceneKind::Menu);
        engine.update().expect("assets registered");
        assert_eq!(engine.current_kind(), SceneKind::Play);
        assert!(engine.has_scene(SceneKind::Menu));
        assert_eq!(engine.play_scene().map(|p| p.current_frame()), Some(1));
    }

    #[test]
    fn quit_from_play_returns_to_fresh_menu() {
        let mut engine = engine();
        engine.start_level(Path::new("missing.txt")).expect("ok");
        assert!(engine.key_event("Escape", ActionKind::Start));
        engine.update().expect("ok");
        assert_eq!(engine.current_kind(), SceneKind::Menu);
        assert!(!engine.has_scene(SceneKind::Play));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut engine = engine();
        assert!(!engine.key_event("F12", ActionKind::Start));
        engine.do_action(action::QUIT, ActionKind::Start);
        assert!(!engine.is_running());
    }

    #[test]
    fn missing_asset_is_fatal() {
        let mut config = testutil::config();
        config.animations.retain(|a| a.name != "Idle");
        let mut engine = GameEngine::new(config, AudioBridge::disconnected());
        let err = engine.start_level(Path::new("missing.txt"));
        assert_eq!(err, Err(AssetError::MissingAnimation("Idle".into())));
    }
}
