//! Play-scene world.
//!
//! [`PlayWorld`] owns the entity manager of a running level together with the
//! frame counter, the player handle and the live bullet count. The spawn
//! helpers here are the only place entities are assembled from components,
//! so every system creates bullets, debris and coins the same way.
//!
//! Coordinates are pixels with y growing downward. Level grid coordinates
//! count cells from the bottom-left corner; [`PlayWorld::grid_to_mid_pixel`]
//! converts between the two.

use glam::{IVec2, Vec2};
use log::{debug, info};

use crate::components::animation::Animation;
use crate::components::boundingbox::BoundingBox;
use crate::components::gravity::Gravity;
use crate::components::input::Input;
use crate::components::jump::Jump;
use crate::components::lifespan::LifeSpan;
use crate::components::sound::Sound;
use crate::components::state::{PlayerState, State};
use crate::components::transform::Transform;
use crate::entities::{Entity, EntityHandle, EntityManager};
use crate::error::AssetError;
use crate::level::{ElementKind, LevelElement};
use crate::resources::context::GameContext;

/// Size of one level grid cell in pixels.
pub const GRID_CELL: Vec2 = Vec2::new(64.0, 64.0);
pub const PLAYER_BOX: Vec2 = Vec2::new(48.0, 64.0);
/// Horizontal distance from the player center to the muzzle.
pub const GUN_OFFSET: f32 = 24.0;
pub const DEBRIS_LIFESPAN: u64 = 15;
pub const COIN_LIFESPAN: u64 = 30;

pub const PLAYER_TAG: &str = "player";
pub const TILE_TAG: &str = "tile";
pub const BULLET_TAG: &str = "bullet";
pub const COIN_TAG: &str = "coin";

pub const BRICK: &str = "Brick";
pub const QUESTION: &str = "Question";

#[derive(Debug)]
pub struct PlayWorld {
    pub entities: EntityManager,
    pub player: EntityHandle,
    /// Frames simulated so far. Advanced once per unpaused update.
    pub current_frame: u64,
    /// Bullets alive right now.
    pub bullet_count: u32,
    pub grid: Vec2,
    screen_height: f32,
}

impl PlayWorld {
    /// Build a world from parsed level elements and spawn the player.
    ///
    /// Fails if an element or the player names an unregistered animation.
    pub fn load(elements: &[LevelElement], ctx: &GameContext) -> Result<Self, AssetError> {
        let mut world = Self {
            entities: EntityManager::new(),
            player: EntityHandle::DANGLING,
            current_frame: 0,
            bullet_count: 0,
            grid: GRID_CELL,
            screen_height: ctx.screen.h as f32,
        };
        for element in elements {
            world.spawn_element(element, ctx)?;
        }
        world.player = world.spawn_player(ctx)?;
        info!(
            "Level ready: {} elements, player at {:?}",
            elements.len(),
            world
                .entities
                .get(world.player)
                .map(|p| p.get::<Transform>().pos)
        );
        Ok(world)
    }

    /// Pixel center of an object of `size` whose bottom-left corner sits on grid cell `grid`.
    pub fn grid_to_mid_pixel(&self, grid: Vec2, size: Vec2) -> Vec2 {
        let mut pos = grid * self.grid + 0.5 * size;
        pos.y = self.screen_height - pos.y;
        pos
    }

    /// Grid cell containing a pixel position.
    pub fn pixel_to_grid(&self, pos: Vec2) -> IVec2 {
        let cell = self.grid.as_ivec2().max(IVec2::ONE);
        IVec2::new(
            pos.x as i32 / cell.x,
            (self.screen_height as i32 - pos.y as i32) / cell.y,
        )
    }

    pub fn screen_height(&self) -> f32 {
        self.screen_height
    }

    pub fn player(&self) -> Option<&Entity> {
        self.entities.get(self.player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        self.entities.get_mut(self.player)
    }

    /// Flag `handle` dead, keeping the bullet count in step. Returns `true`
    /// only if the entity was alive.
    pub fn destroy(&mut self, handle: EntityHandle) -> bool {
        let is_bullet = self
            .entities
            .get(handle)
            .is_some_and(|e| e.tag() == BULLET_TAG);
        let destroyed = self.entities.destroy(handle);
        if destroyed && is_bullet {
            self.bullet_count = self.bullet_count.saturating_sub(1);
        }
        destroyed
    }

    fn spawn_element(&mut self, element: &LevelElement, ctx: &GameContext) -> Result<(), AssetError> {
        let resource = ctx.assets.animation(&element.animation)?;
        let pos = self.grid_to_mid_pixel(element.grid, resource.frame_size);
        let entity = self.entities.spawn(element.kind.tag());
        entity.add(Animation::new(&element.animation, resource, true));
        entity.add(Transform::new(pos));
        if element.kind == ElementKind::Tile {
            entity.add(BoundingBox::new(resource.frame_size));
        }
        Ok(())
    }

    pub fn spawn_player(&mut self, ctx: &GameContext) -> Result<EntityHandle, AssetError> {
        let conf = &ctx.config.player;
        let resource = ctx.assets.animation(PlayerState::Idle.animation_name())?;
        let pos = self.grid_to_mid_pixel(Vec2::new(conf.x, conf.y), resource.frame_size);

        let player = self.entities.spawn(PLAYER_TAG);
        player.add(Animation::new(PlayerState::Idle.animation_name(), resource, true));
        player.add(Transform::new(pos));
        player.add(BoundingBox::new(PLAYER_BOX));
        player.add(Input::default());
        player.add(Gravity::new(conf.gravity));
        player.add(State::new(PlayerState::Idle));
        player.add(Jump::new(conf.jump, conf.jump_duration, conf.jump_frame_strength));
        Ok(player.handle())
    }

    /// Where the player respawns after falling off the screen.
    pub fn player_spawn_point(&self, ctx: &GameContext) -> Vec2 {
        let conf = &ctx.config.player;
        let size = self
            .player()
            .filter(|p| p.has::<Animation>())
            .map(|p| p.get::<Animation>().size)
            .unwrap_or(Vec2::ZERO);
        self.grid_to_mid_pixel(Vec2::new(conf.x, conf.y), size)
    }

    /// Fire a bullet from `shooter` in the direction it faces.
    pub fn spawn_bullet(&mut self, shooter: &Transform, ctx: &GameContext) -> Result<EntityHandle, AssetError> {
        let conf = &ctx.config.bullet;
        let resource = ctx.assets.animation("Buster")?;
        let facing = shooter.facing();
        let frame = self.current_frame;

        let bullet = self.entities.spawn(BULLET_TAG);
        bullet.add(Transform::with_motion(
            shooter.pos + Vec2::new(GUN_OFFSET * facing, 0.0),
            Vec2::new(conf.speed * facing, 0.0),
            shooter.scale,
            0.0,
        ));
        bullet.add(Animation::new("Buster", resource, true));
        bullet.add(BoundingBox::new(Vec2::splat(conf.radius)));
        bullet.add(LifeSpan::new(conf.lifespan, frame));
        let handle = bullet.handle();

        self.bullet_count += 1;
        debug!("Bullet spawned at frame {frame}, {} alive", self.bullet_count);
        Ok(handle)
    }

    /// Attach a one-shot sound to `handle`. The sound system plays it.
    pub fn play_sound(&mut self, handle: EntityHandle, name: &str, ctx: &GameContext) -> Result<(), AssetError> {
        ctx.assets.sound(name)?;
        if let Some(entity) = self.entities.get_mut(handle) {
            entity.add(Sound::new(name, false, ctx.config.sound_volume));
        }
        Ok(())
    }

    /// Swap the animation of `handle` to `name`, keeping its repeat flag unless given.
    pub fn set_animation(
        &mut self,
        handle: EntityHandle,
        name: &str,
        repeat: Option<bool>,
        ctx: &GameContext,
    ) -> Result<(), AssetError> {
        let resource = ctx.assets.animation(name)?;
        if let Some(entity) = self.entities.get_mut(handle) {
            let repeat = repeat.unwrap_or(entity.get::<Animation>().repeat);
            entity.add(Animation::new(name, resource, repeat));
        }
        Ok(())
    }

    /// A bullet hit a brick: play the explosion once and stop colliding.
    pub fn explode_tile(&mut self, tile: EntityHandle, ctx: &GameContext) -> Result<(), AssetError> {
        self.set_animation(tile, "Explosion", Some(false), ctx)?;
        if let Some(entity) = self.entities.get_mut(tile) {
            entity.remove::<BoundingBox>();
        }
        self.play_sound(tile, "Explosion", ctx)
    }

    /// The player headbutted a brick: leave debris for a few frames.
    pub fn break_brick(&mut self, tile: EntityHandle, ctx: &GameContext) -> Result<(), AssetError> {
        self.set_animation(tile, "BrickDebris", Some(true), ctx)?;
        let frame = self.current_frame;
        if let Some(entity) = self.entities.get_mut(tile) {
            entity.remove::<BoundingBox>();
            entity.add(LifeSpan::new(DEBRIS_LIFESPAN, frame));
        }
        self.play_sound(tile, "Debris", ctx)
    }

    /// The player headbutted a question block: spend it and pop a coin above it.
    pub fn hit_question(&mut self, tile: EntityHandle, ctx: &GameContext) -> Result<(), AssetError> {
        self.set_animation(tile, "QuestionHit", None, ctx)?;
        let Some(pos) = self.entities.get(tile).map(|t| t.get::<Transform>().pos) else {
            return Ok(());
        };
        self.spawn_coin(pos - Vec2::new(0.0, self.grid.y), ctx)?;
        Ok(())
    }

    pub fn spawn_coin(&mut self, pos: Vec2, ctx: &GameContext) -> Result<EntityHandle, AssetError> {
        let resource = ctx.assets.animation("CoinSpin")?;
        ctx.assets.sound("Coin")?;
        let frame = self.current_frame;
        let coin = self.entities.spawn(COIN_TAG);
        coin.add(Animation::new("CoinSpin", resource, true));
        coin.add(Transform::new(pos));
        coin.add(LifeSpan::new(COIN_LIFESPAN, frame));
        coin.add(Sound::new("Coin", false, ctx.config.sound_volume));
        Ok(coin.handle())
    }
}
