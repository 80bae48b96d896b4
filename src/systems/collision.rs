//! Collision system.
//!
//! Runs three passes after movement:
//!
//! 1. Bullet vs tile. The first tile a live bullet touches stops it; a
//!    `Brick` tile explodes.
//! 2. Player vs tile. Each overlapping tile is resolved along one axis:
//!    - the axis that did not overlap last frame, when exactly one did not
//!    - otherwise the axis with the smaller current overlap
//!
//!    Pushing the player up out of a tile lands it (jump re-armed, gravity
//!    off until the next frame). Pushing it down out of a tile is a headbutt,
//!    which breaks a `Brick` and spends a `Question` block.
//! 3. Boundaries. The player cannot leave through the left edge, and falling
//!    below the screen respawns it.
//!
//! Coordinates are y-down, so "tile above the player" means the player's
//! center has the larger y.

use glam::Vec2;
use log::debug;

use crate::components::animation::Animation;
use crate::components::boundingbox::BoundingBox;
use crate::components::gravity::Gravity;
use crate::components::input::Input;
use crate::components::jump::Jump;
use crate::components::transform::Transform;
use crate::entities::{Entity, EntityHandle};
use crate::error::AssetError;
use crate::physics::aabb::{current_overlap, is_colliding, previous_axis_overlap};
use crate::physics::shapes_collide;
use crate::resources::context::GameContext;
use crate::world::{BRICK, BULLET_TAG, PlayWorld, QUESTION, TILE_TAG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Pick the resolution axis from the current and previous signed overlaps.
pub fn resolution_axis(overlap: Vec2, previous: Vec2) -> Axis {
    if previous.x <= 0.0 && previous.y > 0.0 {
        Axis::X
    } else if previous.y <= 0.0 && previous.x > 0.0 {
        Axis::Y
    } else if overlap.x < overlap.y {
        Axis::X
    } else {
        Axis::Y
    }
}

/// What the tile does after the player was pushed out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Headbutt {
    None,
    Brick,
    Question,
}

fn animation_name(entity: &Entity) -> Option<&str> {
    entity
        .has::<Animation>()
        .then(|| entity.get::<Animation>().name.as_str())
}

fn bullet_tile(world: &mut PlayWorld, ctx: &GameContext) -> Result<(), AssetError> {
    for b in 0..world.entities.entities_by_tag(BULLET_TAG).len() {
        let bullet = world.entities.entities_by_tag(BULLET_TAG)[b];
        for t in 0..world.entities.entities_by_tag(TILE_TAG).len() {
            let tile = world.entities.entities_by_tag(TILE_TAG)[t];
            let (Some(be), Some(te)) = (world.entities.get(bullet), world.entities.get(tile)) else {
                continue;
            };
            if !be.is_alive() || !te.has::<Animation>() || !shapes_collide(be, te) {
                continue;
            }
            let is_brick = animation_name(te) == Some(BRICK);
            if is_brick {
                world.explode_tile(tile, ctx)?;
            }
            world.destroy(bullet);
            break;
        }
    }
    Ok(())
}

fn push_out(player: &mut Entity, tile: &Entity) -> Option<Headbutt> {
    if !player.has::<BoundingBox>() || !tile.has::<BoundingBox>() {
        return None;
    }
    let overlap = current_overlap(player, tile);
    if !is_colliding(overlap) {
        return None;
    }
    let previous = previous_axis_overlap(player, tile);
    let tile_pos = tile.get::<Transform>().pos;
    let transform = player.get_mut::<Transform>();
    let delta = transform.pos - tile_pos;

    match resolution_axis(overlap, previous) {
        Axis::X => {
            if delta.x > 0.0 {
                transform.pos.x += overlap.x;
            } else {
                transform.pos.x -= overlap.x;
            }
            Some(Headbutt::None)
        }
        Axis::Y if delta.y > 0.0 => {
            transform.pos.y += overlap.y;
            transform.velocity.y = 0.0;
            Some(match animation_name(tile) {
                Some(BRICK) => Headbutt::Brick,
                Some(QUESTION) => Headbutt::Question,
                _ => Headbutt::None,
            })
        }
        Axis::Y => {
            transform.pos.y -= overlap.y;
            transform.velocity.y = 0.0;
            player.get_mut::<Input>().can_jump = true;
            player.get_mut::<Gravity>().gravity = 0.0;
            player.get_mut::<Jump>().jumping = false;
            Some(Headbutt::None)
        }
    }
}

fn player_tile(world: &mut PlayWorld, ctx: &GameContext) -> Result<(), AssetError> {
    let player = world.player;
    for t in 0..world.entities.entities_by_tag(TILE_TAG).len() {
        let tile: EntityHandle = world.entities.entities_by_tag(TILE_TAG)[t];
        let Some((p, te)) = world.entities.get_pair_mut(player, tile) else {
            continue;
        };
        match push_out(p, te) {
            Some(Headbutt::Brick) => {
                debug!("brick {tile:?} broken");
                world.break_brick(tile, ctx)?;
            }
            Some(Headbutt::Question) => {
                debug!("question block {tile:?} hit");
                world.hit_question(tile, ctx)?;
            }
            Some(Headbutt::None) | None => {}
        }
    }
    Ok(())
}

fn boundaries(world: &mut PlayWorld, ctx: &GameContext) {
    let spawn = world.player_spawn_point(ctx);
    let height = world.screen_height();
    let Some(player) = world.player_mut() else {
        return;
    };
    if !player.has::<Transform>() || !player.has::<BoundingBox>() {
        return;
    }
    let half_width = player.get::<BoundingBox>().half_size.x;
    let transform = player.get_mut::<Transform>();
    if transform.pos.x < half_width {
        transform.pos.x = half_width;
    }
    if transform.pos.y > height {
        debug!("player fell out at {:?}, respawning", transform.pos);
        transform.pos = spawn;
    }
}

pub fn collision_system(world: &mut PlayWorld, ctx: &GameContext) -> Result<(), AssetError> {
    bullet_tile(world, ctx)?;
    player_tile(world, ctx)?;
    boundaries(world, ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::lifespan::LifeSpan;
    use crate::testutil;

    fn setup(level: &[crate::level::LevelElement]) -> (PlayWorld, GameContext) {
        let ctx = testutil::context();
        let mut world = PlayWorld::load(level, &ctx).expect("assets registered");
        world.entities.commit();
        (world, ctx)
    }

    fn place_player(world: &mut PlayWorld, pos: Vec2, previous: Vec2, velocity: Vec2) {
        let t = world.player_mut().expect("player").get_mut::<Transform>();
        t.pos = pos;
        t.previous_pos = previous;
        t.velocity = velocity;
    }

    fn tile_pos(world: &PlayWorld, index: usize) -> Vec2 {
        let h = world.entities.entities_by_tag(TILE_TAG)[index];
        world.entities.get(h).expect("tile").get::<Transform>().pos
    }

    #[test]
    fn axis_choice_follows_previous_overlap() {
        assert_eq!(resolution_axis(Vec2::new(4.0, 10.0), Vec2::new(-1.0, 10.0)), Axis::X);
        assert_eq!(resolution_axis(Vec2::new(10.0, 4.0), Vec2::new(10.0, -1.0)), Axis::Y);
        assert_eq!(resolution_axis(Vec2::new(3.0, 5.0), Vec2::new(3.0, 5.0)), Axis::X);
        assert_eq!(resolution_axis(Vec2::new(5.0, 3.0), Vec2::new(-1.0, -1.0)), Axis::Y);
        assert_eq!(resolution_axis(Vec2::new(4.0, 4.0), Vec2::new(2.0, 2.0)), Axis::Y);
    }

    #[test]
    fn landing_on_a_tile_grounds_the_player() {
        let (mut world, ctx) = setup(&[testutil::tile("Ground", 3.0, 0.0)]);
        let ground = tile_pos(&world, 0);
        // player box is 64 tall, tile 64: touching distance is 64
        let above = ground - Vec2::new(0.0, 70.0);
        let inside = ground - Vec2::new(0.0, 60.0);
        place_player(&mut world, inside, above, Vec2::new(0.0, 10.0));
        {
            let p = world.player_mut().expect("player");
            p.get_mut::<Input>().can_jump = false;
            p.get_mut::<Jump>().jumping = true;
        }

        collision_system(&mut world, &ctx).expect("ok");

        let p = world.player().expect("player");
        assert_eq!(p.get::<Transform>().pos, ground - Vec2::new(0.0, 64.0));
        assert_eq!(p.get::<Transform>().velocity.y, 0.0);
        assert!(p.get::<Input>().can_jump);
        assert!(!p.get::<Jump>().jumping);
        assert_eq!(p.get::<Gravity>().gravity, 0.0);
    }

    #[test]
    fn walking_into_a_wall_pushes_back_horizontally() {
        let (mut world, ctx) = setup(&[testutil::tile("Ground", 5.0, 1.0)]);
        let wall = tile_pos(&world, 0);
        // half widths 24 + 32 = 56
        let before = wall - Vec2::new(60.0, 0.0);
        let after = wall - Vec2::new(52.0, 0.0);
        place_player(&mut world, after, before, Vec2::new(5.0, 0.0));

        collision_system(&mut world, &ctx).expect("ok");
        let p = world.player().expect("player").get::<Transform>();
        assert_eq!(p.pos, wall - Vec2::new(56.0, 0.0));
        assert!(world.player().expect("player").get::<Input>().can_jump);
    }

    #[test]
    fn headbutting_a_brick_turns_it_into_debris() {
        let (mut world, ctx) = setup(&[testutil::tile("Brick", 3.0, 4.0)]);
        let brick = tile_pos(&world, 0);
        let below = brick + Vec2::new(0.0, 70.0);
        let inside = brick + Vec2::new(0.0, 60.0);
        place_player(&mut world, inside, below, Vec2::new(0.0, -8.0));

        collision_system(&mut world, &ctx).expect("ok");

        let p = world.player().expect("player").get::<Transform>();
        assert_eq!(p.pos, brick + Vec2::new(0.0, 64.0));
        assert_eq!(p.velocity.y, 0.0);
        let tile = world.entities.entities_by_tag(TILE_TAG)[0];
        let tile = world.entities.get(tile).expect("tile");
        assert_eq!(tile.get::<Animation>().name, "BrickDebris");
        assert!(!tile.has::<BoundingBox>());
        assert!(tile.has::<LifeSpan>());
    }

    #[test]
    fn question_block_spawns_one_coin() {
        let (mut world, ctx) = setup(&[testutil::tile("Question", 3.0, 4.0)]);
        let block = tile_pos(&world, 0);
        place_player(
            &mut world,
            block + Vec2::new(0.0, 60.0),
            block + Vec2::new(0.0, 70.0),
            Vec2::new(0.0, -8.0),
        );
        collision_system(&mut world, &ctx).expect("ok");
        world.entities.commit();
        let coins = world.entities.entities_by_tag("coin");
        assert_eq!(coins.len(), 1);
        let coin = world.entities.get(coins[0]).expect("coin");
        assert_eq!(coin.get::<Transform>().pos, block - Vec2::new(0.0, 64.0));

        // spent block gives nothing more
        place_player(
            &mut world,
            block + Vec2::new(0.0, 60.0),
            block + Vec2::new(0.0, 70.0),
            Vec2::new(0.0, -8.0),
        );
        collision_system(&mut world, &ctx).expect("ok");
        world.entities.commit();
        assert_eq!(world.entities.entities_by_tag("coin").len(), 1);
    }

    #[test]
    fn bullet_explodes_brick_and_dies_once() {
        let (mut world, ctx) = setup(&[
            testutil::tile("Brick", 8.0, 3.0),
            testutil::tile("Ground", 8.0, 3.0),
        ]);
        let brick = tile_pos(&world, 0);
        let shooter = Transform::new(brick - Vec2::new(24.0, 0.0));
        world.spawn_bullet(&shooter, &ctx).expect("bullet");
        world.entities.commit();
        assert_eq!(world.bullet_count, 1);

        collision_system(&mut world, &ctx).expect("ok");
        assert_eq!(world.bullet_count, 0);
        let bullet = world.entities.entities_by_tag(BULLET_TAG)[0];
        assert!(!world.entities.get(bullet).expect("bullet").is_alive());

        let tiles = world.entities.entities_by_tag(TILE_TAG);
        let brick = world.entities.get(tiles[0]).expect("brick");
        assert_eq!(brick.get::<Animation>().name, "Explosion");
        assert!(!brick.get::<Animation>().repeat);
        assert!(!brick.has::<BoundingBox>());
        let ground = world.entities.get(tiles[1]).expect("ground");
        assert_eq!(ground.get::<Animation>().name, "Ground");
    }

    #[test]
    fn player_is_kept_inside_left_edge_and_respawned_below_screen() {
        let (mut world, ctx) = setup(&[]);
        place_player(&mut world, Vec2::new(3.0, 100.0), Vec2::new(3.0, 100.0), Vec2::ZERO);
        collision_system(&mut world, &ctx).expect("ok");
        assert_eq!(world.player().expect("player").get::<Transform>().pos.x, 24.0);

        place_player(&mut world, Vec2::new(300.0, 800.0), Vec2::new(300.0, 790.0), Vec2::ZERO);
        collision_system(&mut world, &ctx).expect("ok");
        let spawn = world.player_spawn_point(&ctx);
        assert_eq!(world.player().expect("player").get::<Transform>().pos, spawn);
    }
}
