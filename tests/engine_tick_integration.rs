//! Frame pipeline integration tests: deferred commit, jump, landing,
//! lifespan, animation swaps, pause, and loading levels from disk.

use std::io::Write;
use std::path::Path;

use megamario::components::animation::Animation;
use megamario::components::input::Input;
use megamario::components::jump::Jump;
use megamario::components::state::{PlayerState, State};
use megamario::components::transform::Transform;
use megamario::events::action::{self, ActionKind};
use megamario::game::GameEngine;
use megamario::resources::audio::AudioBridge;
use megamario::resources::gameconfig::GameConfig;
use megamario::scenes::{PlayScene, SceneKind};

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

const ASSETS: &str = "\
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
[animation.Cloud]
width = 128
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

const FLOOR: &str = "\
Tile Ground 0 0
Tile Ground 1 0
Tile Ground 2 0
Tile Ground 3 0
Tile Ground 4 0
Tile Ground 5 0
Tile Ground 6 0
Tile Ground 7 0
";

struct Fixture {
    _dir: tempfile::TempDir,
    engine: GameEngine,
}

impl Fixture {
    fn with_level(level: &str) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        write_file(&dir.path().join("level1.txt"), level);
        let config_text = format!("{ASSETS}\n[level.1]\nname = World 1-1\npath = level1.txt\n");
        let config_path = dir.path().join("config.ini");
        write_file(&config_path, &config_text);

        let mut config = GameConfig::with_path(&config_path);
        config.load_from_file().expect("config loads");
        let mut engine = GameEngine::new(config, AudioBridge::disconnected());
        engine.do_action(action::PLAY, ActionKind::Start);
        Self { _dir: dir, engine }
    }

    fn update(&mut self) {
        self.engine.update().expect("assets registered");
    }

    fn run(&mut self, frames: usize) {
        for _ in 0..frames {
            self.update();
        }
    }

    fn play(&self) -> &PlayScene {
        self.engine.play_scene().expect("a level is running")
    }

    fn player_transform(&self) -> Transform {
        *self
            .play()
            .world()
            .player()
            .expect("player")
            .get::<Transform>()
    }

    fn player<T: megamario::components::storage::Component + Copy>(&self) -> T {
        *self.play().world().player().expect("player").get::<T>()
    }

    fn press(&mut self, name: &str) {
        self.engine.do_action(name, ActionKind::Start);
    }

    fn release(&mut self, name: &str) {
        self.engine.do_action(name, ActionKind::End);
    }
}

fn write_file(path: &Path, text: &str) {
    let mut file = std::fs::File::create(path).expect("create");
    file.write_all(text.as_bytes()).expect("write");
}

#[test]
fn menu_play_loads_level_from_disk() {
    let mut fx = Fixture::with_level(FLOOR);
    assert_eq!(fx.engine.current_kind(), SceneKind::Menu);
    fx.update();
    assert_eq!(fx.engine.current_kind(), SceneKind::Play);
    assert_eq!(fx.play().world().entities.entities_by_tag("tile").len(), 8);
    assert_eq!(fx.play().world().entities.entities_by_tag("player").len(), 1);
}

#[test]
fn malformed_level_lines_are_skipped() {
    let level = "Tile Ground 0 0\nTile Ground zero 0\nDec Cloud 4 9\nDec Cloud\nLava Ground 1 1\n\nTile Ground 1 0\n";
    let mut fx = Fixture::with_level(level);
    fx.update();
    let entities = &fx.play().world().entities;
    assert_eq!(entities.entities_by_tag("tile").len(), 2);
    assert_eq!(entities.entities_by_tag("dec").len(), 1);

    let cloud = entities
        .get(entities.entities_by_tag("dec")[0])
        .expect("cloud");
    // grid (4, 9) with a 128x64 frame: x = 4*64 + 64, y = 768 - (9*64 + 32)
    assert_eq!(cloud.get::<Transform>().pos, glam::Vec2::new(320.0, 160.0));
}

#[test]
fn missing_level_file_gives_player_only() {
    let mut engine = GameEngine::new(
        {
            let mut config = GameConfig::new();
            config.load_from_str(ASSETS).expect("valid");
            config
        },
        AudioBridge::disconnected(),
    );
    engine
        .start_level(Path::new("/nope/level.txt"))
        .expect("assets registered");
    engine.update().expect("ok");
    let play = engine.play_scene().expect("running");
    assert_eq!(play.world().entities.len(), 1);
}

#[test]
fn player_settles_on_floor() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(3);
    let t = fx.player_transform();
    assert!(approx_eq(t.pos.y, 672.0), "{t:?}");
    assert!(approx_eq(t.velocity.y, 0.0));
    assert!(fx.player::<Input>().can_jump);
    assert_eq!(fx.player::<State>().state, PlayerState::Idle);
}

#[test]
fn jump_boost_lasts_max_duration_frames() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(2);
    let start = fx.play().current_frame();

    fx.press(action::JUMP);
    fx.update();
    let jump = fx.player::<Jump>();
    assert!(jump.jumping);
    assert_eq!(jump.start_frame, start);
    assert!(!fx.player::<Input>().can_jump);
    // -initial strength, then one frame of gravity
    let mut vy = fx.player_transform().velocity.y;
    assert!(approx_eq(vy, -12.0 + 0.75), "{vy}");

    // 15 more frames of held boost: -1 strength +0.75 gravity each
    for frame in 1..=15 {
        fx.update();
        let now = fx.player_transform().velocity.y;
        assert!(approx_eq(now - vy, -0.25), "boost frame {frame}: {vy} -> {now}");
        vy = now;
    }

    fx.update();
    let now = fx.player_transform().velocity.y;
    assert!(approx_eq(now - vy, 0.75), "boost should have stopped: {vy} -> {now}");
}

#[test]
fn jump_lands_back_and_rearms() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(2);
    fx.press(action::JUMP);
    fx.update();
    fx.release(action::JUMP);

    let mut landed = false;
    for _ in 0..200 {
        fx.update();
        if fx.player::<Input>().can_jump {
            landed = true;
            break;
        }
    }
    assert!(landed, "player never landed");
    let t = fx.player_transform();
    assert!(approx_eq(t.pos.y, 672.0), "{t:?}");
    assert!(!fx.player::<Jump>().jumping);
    assert_eq!(fx.player::<State>().state, PlayerState::Idle);
}

#[test]
fn animation_swaps_once_per_state_change() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(2);
    fx.press(action::JUMP);
    fx.update();

    let state = fx.player::<State>();
    assert_eq!(state.state, PlayerState::Air);
    assert_eq!(state.previous_state, PlayerState::Idle);
    assert!(state.change_animation);

    let tick_after_swap = {
        let player = fx.play().world().player().expect("player");
        let anim = player.get::<Animation>();
        assert_eq!(anim.name, "Air");
        anim.current_tick
    };

    fx.update();
    assert!(!fx.player::<State>().change_animation);
    let player = fx.play().world().player().expect("player");
    assert_eq!(player.get::<Animation>().current_tick, tick_after_swap + 1);
}

#[test]
fn bullets_appear_one_frame_late_and_expire_on_schedule() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(2);
    let fired_at = fx.play().current_frame();

    fx.press(action::SHOOT);
    fx.update();
    fx.release(action::SHOOT);
    assert!(fx.play().world().entities.entities_by_tag("bullet").is_empty());
    assert_eq!(fx.play().world().bullet_count, 1);

    fx.update();
    let bullets = fx.play().world().entities.entities_by_tag("bullet").to_vec();
    assert_eq!(bullets.len(), 1);
    let bullet = bullets[0];

    // updates already run for frames fired_at and fired_at + 1
    while fx.play().current_frame() < fired_at + 60 {
        fx.update();
        let b = fx.play().world().entities.get(bullet).expect("visible");
        assert!(b.is_alive(), "died early at frame {}", fx.play().current_frame());
    }

    fx.update(); // frame fired_at + 60 flags it
    let b = fx.play().world().entities.get(bullet).expect("still listed");
    assert!(!b.is_alive());
    assert_eq!(fx.play().world().bullet_count, 0);

    fx.update(); // next commit prunes it
    assert!(fx.play().world().entities.get(bullet).is_none());
    assert!(fx.play().world().entities.entities_by_tag("bullet").is_empty());
    assert!(!fx.play().world().entities.entities().contains(&bullet));
}

#[test]
fn holding_shoot_refires_after_refire_frames() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(2);
    fx.press(action::SHOOT);
    fx.run(16);
    assert_eq!(fx.play().world().bullet_count, 1);
    fx.run(2);
    assert_eq!(fx.play().world().bullet_count, 2);
}

#[test]
fn pause_stops_the_pipeline() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.run(2);
    fx.press(action::RIGHT);
    fx.press(action::PAUSE);
    let frame = fx.play().current_frame();
    let before = fx.player_transform();
    fx.run(10);
    assert_eq!(fx.play().current_frame(), frame);
    assert_eq!(fx.player_transform(), before);

    fx.press(action::PAUSE);
    fx.update();
    assert!(approx_eq(fx.player_transform().pos.x, before.pos.x + 5.0));
    assert_eq!(fx.player::<State>().state, PlayerState::Run);
}

#[test]
fn quit_returns_to_menu_and_quit_again_stops_game() {
    let mut fx = Fixture::with_level(FLOOR);
    fx.update();
    assert!(fx.engine.key_event("Escape", ActionKind::Start));
    fx.update();
    assert_eq!(fx.engine.current_kind(), SceneKind::Menu);
    assert!(fx.engine.play_scene().is_none());

    fx.engine.key_event("Escape", ActionKind::Start);
    assert!(!fx.engine.is_running());
}
