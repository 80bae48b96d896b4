//! Long-lived state shared by every scene.

use crate::resources::assetstore::AssetStore;
use crate::resources::audio::AudioBridge;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenestate::NextScene;
use crate::resources::screensize::ScreenSize;

/// Everything a scene may read, plus the two requests it may raise: a scene
/// change and quitting the game.
#[derive(Debug)]
pub struct GameContext {
    pub config: GameConfig,
    pub assets: AssetStore,
    pub audio: AudioBridge,
    pub screen: ScreenSize,
    pub next_scene: NextScene,
    running: bool,
}

impl GameContext {
    /// Build the asset store from `config` and size the screen from its window.
    pub fn new(config: GameConfig, audio: AudioBridge) -> Self {
        let assets = AssetStore::from_config(&config);
        let (w, h) = config.window_size();
        Self {
            config,
            assets,
            audio,
            screen: ScreenSize::new(w, h),
            next_scene: NextScene::new(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
