//! Game configuration resource.
//!
//! Settings are read from an INI file. Every value has a safe default and a
//! missing key keeps its current value, so a partial file is valid.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 768
//! title = Mega Mario
//! framerate = 60
//!
//! [player]
//! x = 2
//! y = 2
//! speed = 5
//! jump = 12
//! gravity = 0.75
//! max_fall_speed = 20
//! jump_duration = 15
//! jump_frame_strength = 1
//!
//! [bullet]
//! speed = 10
//! radius = 16
//! lifespan = 60
//! refire = 15
//!
//! [audio]
//! sound_volume = 0.5
//!
//! [level.1]
//! name = Level 1
//! path = assets/level1.txt
//!
//! [animation.Idle]
//! frames = 1
//! speed = 1
//! width = 64
//! height = 64
//!
//! [sound.Jump]
//! path = assets/sounds/jump.wav
//! ```
//!
//! Section and key names are case-sensitive because animation and sound
//! names are.

use configparser::ini::Ini;
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 768;
const DEFAULT_TITLE: &str = "Mega Mario";
const DEFAULT_FRAMERATE: u32 = 60;
const DEFAULT_SOUND_VOLUME: f32 = 0.5;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

const LEVEL_PREFIX: &str = "level.";
const ANIMATION_PREFIX: &str = "animation.";
const SOUND_PREFIX: &str = "sound.";

/// Player tuning. `x`/`y` are the spawn cell in grid units.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerConfig {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub jump: f32,
    pub gravity: f32,
    pub max_fall_speed: f32,
    pub jump_duration: u64,
    pub jump_frame_strength: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            x: 2.0,
            y: 2.0,
            speed: 5.0,
            jump: 12.0,
            gravity: 0.75,
            max_fall_speed: 20.0,
            jump_duration: 15,
            jump_frame_strength: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BulletConfig {
    pub speed: f32,
    /// Side of the square collision box.
    pub radius: f32,
    /// Frames before the bullet expires.
    pub lifespan: u64,
    /// Age at which the newest bullet re-enables firing.
    pub refire: u64,
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            radius: 16.0,
            lifespan: 60,
            refire: 15,
        }
    }
}

/// A playable level listed in the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelConfig {
    pub key: String,
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    pub name: String,
    pub frames: u32,
    pub speed: u32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoundConfig {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,
    pub framerate: u32,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub sound_volume: f32,
    /// Menu entries sorted by section key.
    pub levels: Vec<LevelConfig>,
    pub animations: Vec<AnimationConfig>,
    pub sounds: Vec<SoundConfig>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn get_f32(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, ConfigError> {
    config
        .getfloat(section, key)
        .map(|v| v.map(|v| v as f32))
        .map_err(|reason| invalid(section, key, reason))
}

fn get_u64(config: &Ini, section: &str, key: &str) -> Result<Option<u64>, ConfigError> {
    config
        .getuint(section, key)
        .map_err(|reason| invalid(section, key, reason))
}

fn get_u32(config: &Ini, section: &str, key: &str) -> Result<Option<u32>, ConfigError> {
    get_u64(config, section, key)?
        .map(|v| u32::try_from(v).map_err(|e| invalid(section, key, format!("{v}: {e}"))))
        .transpose()
}

fn invalid(section: &str, key: &str, reason: String) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_owned(),
        key: key.to_owned(),
        reason,
    }
}

fn set_f32(target: &mut f32, value: Option<f32>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl GameConfig {
    /// Create a configuration with safe default values and no assets.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_owned(),
            framerate: DEFAULT_FRAMERATE,
            player: PlayerConfig::default(),
            bullet: BulletConfig::default(),
            sound_volume: DEFAULT_SOUND_VOLUME,
            levels: Vec::new(),
            animations: Vec::new(),
            sounds: Vec::new(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from [`config_path`](Self::config_path).
    ///
    /// Missing values retain their current values. Relative level and sound
    /// paths are resolved against the config file's directory.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new_cs();
        config.load(&self.config_path).map_err(|reason| ConfigError::Load {
            path: self.config_path.clone(),
            reason,
        })?;
        let base = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        self.apply(&config, &base)?;
        info!(
            "Loaded config {:?}: {}x{} window, {} levels, {} animations, {} sounds",
            self.config_path,
            self.window_width,
            self.window_height,
            self.levels.len(),
            self.animations.len(),
            self.sounds.len()
        );
        Ok(())
    }

    /// Load configuration from INI text. Paths stay as written.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new_cs();
        config.read(text.to_owned()).map_err(ConfigError::Parse)?;
        self.apply(&config, Path::new(""))
    }

    fn apply(&mut self, config: &Ini, base: &Path) -> Result<(), ConfigError> {
        // [window]
        if let Some(width) = get_u32(config, "window", "width")? {
            self.window_width = width;
        }
        if let Some(height) = get_u32(config, "window", "height")? {
            self.window_height = height;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = get_u32(config, "window", "framerate")? {
            self.framerate = fps;
        }

        // [player]
        let p = &mut self.player;
        set_f32(&mut p.x, get_f32(config, "player", "x")?);
        set_f32(&mut p.y, get_f32(config, "player", "y")?);
        set_f32(&mut p.speed, get_f32(config, "player", "speed")?);
        set_f32(&mut p.jump, get_f32(config, "player", "jump")?);
        set_f32(&mut p.gravity, get_f32(config, "player", "gravity")?);
        set_f32(&mut p.max_fall_speed, get_f32(config, "player", "max_fall_speed")?);
        if let Some(duration) = get_u64(config, "player", "jump_duration")? {
            p.jump_duration = duration;
        }
        set_f32(
            &mut p.jump_frame_strength,
            get_f32(config, "player", "jump_frame_strength")?,
        );

        // [bullet]
        let b = &mut self.bullet;
        set_f32(&mut b.speed, get_f32(config, "bullet", "speed")?);
        set_f32(&mut b.radius, get_f32(config, "bullet", "radius")?);
        if let Some(lifespan) = get_u64(config, "bullet", "lifespan")? {
            b.lifespan = lifespan;
        }
        if let Some(refire) = get_u64(config, "bullet", "refire")? {
            b.refire = refire;
        }

        // [audio]
        set_f32(&mut self.sound_volume, get_f32(config, "audio", "sound_volume")?);

        let mut sections = config.sections();
        sections.sort();
        for section in &sections {
            if let Some(key) = section.strip_prefix(LEVEL_PREFIX) {
                let Some(path) = config.get(section, "path") else {
                    warn!("Config section [{section}] has no path, skipped");
                    continue;
                };
                let level = LevelConfig {
                    key: key.to_owned(),
                    name: config.get(section, "name").unwrap_or_else(|| key.to_owned()),
                    path: base.join(path),
                };
                upsert(&mut self.levels, level, |l| &l.key);
            } else if let Some(name) = section.strip_prefix(ANIMATION_PREFIX) {
                let frames = get_u32(config, section, "frames")?.unwrap_or(1);
                let speed = get_u32(config, section, "speed")?.unwrap_or(1);
                if frames == 0 || speed == 0 {
                    return Err(invalid(section, "frames/speed", "must be at least 1".into()));
                }
                let animation = AnimationConfig {
                    name: name.to_owned(),
                    frames,
                    speed,
                    width: get_f32(config, section, "width")?.unwrap_or(0.0),
                    height: get_f32(config, section, "height")?.unwrap_or(0.0),
                };
                upsert(&mut self.animations, animation, |a| &a.name);
            } else if let Some(name) = section.strip_prefix(SOUND_PREFIX) {
                let Some(path) = config.get(section, "path") else {
                    warn!("Config section [{section}] has no path, skipped");
                    continue;
                };
                let sound = SoundConfig {
                    name: name.to_owned(),
                    path: base.join(path),
                };
                upsert(&mut self.sounds, sound, |s| &s.name);
            }
        }
        self.levels.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> &String) {
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}
