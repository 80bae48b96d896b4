//! Play scene.
//!
//! Holds a [`PlayWorld`] and runs the frame pipeline:
//!
//! 1. commit pending entity changes
//! 2. [`movement_system`]
//! 3. [`sound_system`]
//! 4. [`lifespan_system`]
//! 5. [`collision_system`]
//! 6. [`animation_system`]
//! 7. advance the frame counter
//!
//! While paused none of this runs and the frame counter stays put; input is
//! still accepted so the game can be unpaused. Every system can be switched
//! off individually through [`SystemToggles`] for debugging.

use std::path::{Path, PathBuf};

use glam::Vec2;
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::boundingbox::BoundingBox;
use crate::components::input::Input;
use crate::components::transform::Transform;
use crate::error::AssetError;
use crate::events::action::{self, Action, ActionKind, ActionMap};
use crate::level::{LevelElement, load_level};
use crate::resources::context::GameContext;
use crate::resources::scenestate::SceneRequest;
use crate::scenes::{DrawCmd, Frame, Scene, SceneKind};
use crate::systems::animation::animation_system;
use crate::systems::collision::collision_system;
use crate::systems::debug::{EntityRow, TagTable, entity_table, tag_tables};
use crate::systems::lifespan::lifespan_system;
use crate::systems::movement::movement_system;
use crate::systems::sound::sound_system;
use crate::world::PlayWorld;

const BACKGROUND_RUN: [u8; 3] = [100, 100, 255];
const BACKGROUND_PAUSE: [u8; 3] = [50, 50, 150];

/// Which pipeline stages run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemToggles {
    pub action: bool,
    pub movement: bool,
    pub sound: bool,
    pub lifespan: bool,
    pub collision: bool,
    pub animation: bool,
    pub render: bool,
}

impl Default for SystemToggles {
    fn default() -> Self {
        Self {
            action: true,
            movement: true,
            sound: true,
            lifespan: true,
            collision: true,
            animation: true,
            render: true,
        }
    }
}

/// What [`PlayScene::render`] includes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawToggles {
    pub textures: bool,
    pub collision: bool,
    pub grid: bool,
}

impl Default for DrawToggles {
    fn default() -> Self {
        Self {
            textures: true,
            collision: false,
            grid: false,
        }
    }
}

#[derive(Debug)]
pub struct PlayScene {
    world: PlayWorld,
    level_path: PathBuf,
    paused: bool,
    pub systems: SystemToggles,
    pub draw: DrawToggles,
    action_map: ActionMap,
}

fn play_action_map() -> ActionMap {
    let mut map = ActionMap::new();
    map.register("Up", action::JUMP);
    map.register("Left", action::LEFT);
    map.register("Right", action::RIGHT);
    map.register("Space", action::SHOOT);
    map.register("W", action::JUMP);
    map.register("A", action::LEFT);
    map.register("D", action::RIGHT);
    map.register("P", action::PAUSE);
    map.register("Escape", action::QUIT);
    map.register("T", action::TOGGLE_TEXTURE);
    map.register("C", action::TOGGLE_COLLISION);
    map.register("G", action::TOGGLE_GRID);
    map
}

impl PlayScene {
    /// Load the level at `path`. A missing file gives an empty level with
    /// just the player.
    pub fn new(path: &Path, ctx: &GameContext) -> Result<Self, AssetError> {
        let elements = load_level(path);
        let mut scene = Self::from_elements(&elements, ctx)?;
        scene.level_path = path.to_path_buf();
        Ok(scene)
    }

    pub fn from_elements(elements: &[LevelElement], ctx: &GameContext) -> Result<Self, AssetError> {
        let world = PlayWorld::load(elements, ctx)?;
        info!("Play scene started with {} entities pending", world.entities.pending_len());
        Ok(Self {
            world,
            level_path: PathBuf::new(),
            paused: false,
            systems: SystemToggles::default(),
            draw: DrawToggles::default(),
            action_map: play_action_map(),
        })
    }

    pub fn world(&self) -> &PlayWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PlayWorld {
        &mut self.world
    }

    pub fn level_path(&self) -> &Path {
        &self.level_path
    }

    pub fn current_frame(&self) -> u64 {
        self.world.current_frame
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn entity_table(&self) -> Vec<EntityRow> {
        entity_table(&self.world)
    }

    pub fn tag_tables(&self) -> Vec<TagTable> {
        tag_tables(&self.world)
    }

    /// Flag the entity with `id` dead, as the debug table's destroy button does.
    pub fn destroy_by_id(&mut self, id: u64) -> bool {
        let handle = self
            .world
            .entities
            .iter()
            .find(|e| e.id() == id)
            .map(|e| e.handle());
        handle.is_some_and(|h| self.world.destroy(h))
    }

    fn set_input(&mut self, name: &str, pressed: bool) {
        let Some(player) = self.world.player_mut() else {
            return;
        };
        if !player.has::<Input>() {
            return;
        }
        let input = player.get_mut::<Input>();
        match name {
            action::JUMP if pressed => {
                if input.can_jump {
                    input.up = true;
                }
            }
            action::JUMP => input.up = false,
            action::LEFT => input.left = pressed,
            action::RIGHT => input.right = pressed,
            action::SHOOT => input.shoot = pressed,
            _ => {}
        }
    }

    fn render_grid(&self, camera: Vec2, width: f32, commands: &mut Vec<DrawCmd>) {
        let cell = self.world.grid;
        let height = self.world.screen_height();
        let left = camera.x - 0.5 * width;
        let right = left + width + cell.x;
        let first = left - left.rem_euclid(cell.x);

        let mut x = first;
        while x < right {
            commands.push(DrawCmd::Line {
                from: Vec2::new(x, 0.0),
                to: Vec2::new(x, height),
            });
            x += cell.x;
        }
        let mut y = 0.0;
        while y < height {
            commands.push(DrawCmd::Line {
                from: Vec2::new(left, height - y),
                to: Vec2::new(right, height - y),
            });
            let mut x = first;
            while x < right {
                commands.push(DrawCmd::Text {
                    text: format!("({},{})", (x / cell.x) as i32, (y / cell.y) as i32),
                    pos: Vec2::new(x + 3.0, height - y - cell.y + 2.0),
                    size: 12,
                    highlighted: false,
                });
                x += cell.x;
            }
            y += cell.y;
        }
    }
}

impl Scene for PlayScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Play
    }

    fn action_map(&self) -> &ActionMap {
        &self.action_map
    }

    fn update(&mut self, ctx: &mut GameContext) -> Result<(), AssetError> {
        if self.paused {
            return Ok(());
        }
        let world = &mut self.world;
        world.entities.commit();
        if self.systems.movement {
            movement_system(world, ctx)?;
        }
        if self.systems.sound {
            sound_system(world, &ctx.audio);
        }
        if self.systems.lifespan {
            lifespan_system(world, ctx.config.bullet.refire);
        }
        if self.systems.collision {
            collision_system(world, ctx)?;
        }
        if self.systems.animation {
            animation_system(world, &ctx.assets)?;
        }
        world.current_frame += 1;
        Ok(())
    }

    fn do_action(&mut self, action: &Action, ctx: &mut GameContext) {
        if !self.systems.action {
            return;
        }
        debug!("play action {} {}", action.name, action.kind);
        match action.kind {
            ActionKind::Start => match action.name.as_str() {
                action::TOGGLE_TEXTURE => self.draw.textures = !self.draw.textures,
                action::TOGGLE_COLLISION => self.draw.collision = !self.draw.collision,
                action::TOGGLE_GRID => self.draw.grid = !self.draw.grid,
                action::PAUSE => self.paused = !self.paused,
                action::QUIT => ctx.next_scene.set(SceneRequest::Menu),
                name => self.set_input(name, true),
            },
            ActionKind::End => self.set_input(&action.name, false),
        }
    }

    fn render(&self, ctx: &GameContext) -> Frame {
        let screen = ctx.screen.as_vec2();
        let background = if self.paused {
            BACKGROUND_PAUSE
        } else {
            BACKGROUND_RUN
        };
        let mut commands = vec![DrawCmd::Clear { color: background }];

        let player_x = self
            .world
            .player()
            .map(|p| p.get::<Transform>().pos.x)
            .unwrap_or(0.0);
        let camera = Vec2::new((0.5 * screen.x).max(player_x), 0.5 * screen.y);
        if !self.systems.render {
            return Frame { camera, commands };
        }

        if self.draw.textures {
            for e in self.world.entities.iter().filter(|e| e.has::<Animation>()) {
                let t = e.get::<Transform>();
                let anim = e.get::<Animation>();
                commands.push(DrawCmd::Sprite {
                    animation: anim.name.clone(),
                    frame: anim.frame_index(),
                    pos: t.pos,
                    scale: t.scale,
                    angle: t.angle,
                });
            }
        }
        if self.draw.collision {
            for e in self.world.entities.iter().filter(|e| e.has::<BoundingBox>()) {
                commands.push(DrawCmd::Rect {
                    pos: e.get::<Transform>().pos,
                    size: e.get::<BoundingBox>().size,
                });
            }
        }
        if self.draw.grid {
            self.render_grid(camera, screen.x, &mut commands);
        }
        Frame { camera, commands }
    }

    fn as_play(&self) -> Option<&PlayScene> {
        Some(self)
    }

    fn as_play_mut(&mut self) -> Option<&mut PlayScene> {
        Some(self)
    }
}
