//! Shared fixtures for unit tests.

use glam::Vec2;

use crate::level::{ElementKind, LevelElement};
use crate::resources::audio::AudioBridge;
use crate::resources::context::GameContext;
use crate::resources::gameconfig::GameConfig;

pub const CONFIG: &str = "\
[window]
width = 1280
height = 768

[player]
x = 2
y = 1
speed = 5
jump = 12
gravity = 0.75
max_fall_speed = 20
jump_duration = 15
jump_frame_strength = 1

[bullet]
speed = 10
radius = 16
lifespan = 60
refire = 15

[animation.Idle]
width = 64
height = 64
[animation.IdleShoot]
width = 64
height = 64
[animation.Run]
frames = 3
speed = 4
width = 64
height = 64
[animation.RunShoot]
frames = 3
speed = 4
width = 64
height = 64
[animation.Air]
width = 64
height = 64
[animation.AirShoot]
width = 64
height = 64
[animation.Buster]
width = 16
height = 16
[animation.Ground]
width = 64
height = 64
[animation.Brick]
width = 64
height = 64
[animation.Question]
width = 64
height = 64
[animation.QuestionHit]
width = 64
height = 64
[animation.BrickDebris]
width = 64
height = 64
[animation.Explosion]
frames = 4
speed = 2
width = 64
height = 64
[animation.CoinSpin]
frames = 4
speed = 4
width = 64
height = 64

[sound.Shoot]
path = shoot.wav
[sound.Jump]
path = jump.wav
[sound.Explosion]
path = explosion.wav
[sound.Debris]
path = debris.wav
[sound.Coin]
path = coin.wav
";

pub fn config() -> GameConfig {
    let mut config = GameConfig::new();
    if let Err(err) = config.load_from_str(CONFIG) {
        panic!("test config must parse: {err}");
    }
    config
}

pub fn context() -> GameContext {
    GameContext::new(config(), AudioBridge::disconnected())
}

pub fn tile(animation: &str, x: f32, y: f32) -> LevelElement {
    LevelElement {
        kind: ElementKind::Tile,
        animation: animation.to_owned(),
        grid: Vec2::new(x, y),
        line: 0,
    }
}

/// A floor of `Ground` tiles along row 0, columns `0..width`.
pub fn floor(width: usize) -> Vec<LevelElement> {
    (0..width).map(|x| tile("Ground", x as f32, 0.0)).collect()
}
