//! Lifespan system.
//!
//! Destroys every entity whose [`LifeSpan`] has run out, i.e. once
//! `current_frame - frame_created >= lifespan`. An entity created at frame `F`
//! with lifespan `L` is therefore alive for frames `F..F+L-1` and flagged at
//! frame `F+L`.
//!
//! Before expiring anything it evaluates the fire gate: the player may shoot
//! again as soon as a live bullet is exactly `refire` frames old, or when no
//! bullet is alive at all.

use log::trace;

use crate::components::input::Input;
use crate::components::lifespan::LifeSpan;
use crate::world::{BULLET_TAG, PlayWorld};

fn refire_ready(world: &PlayWorld, refire: u64) -> bool {
    if world.bullet_count == 0 {
        return true;
    }
    let frame = world.current_frame;
    world
        .entities
        .entities_by_tag(BULLET_TAG)
        .iter()
        .filter_map(|h| world.entities.get(*h))
        .filter(|b| b.has::<LifeSpan>())
        .any(|b| b.get::<LifeSpan>().age(frame) == refire)
}

pub fn lifespan_system(world: &mut PlayWorld, refire: u64) {
    if refire_ready(world, refire) {
        if let Some(player) = world.player_mut().filter(|p| p.has::<Input>()) {
            player.get_mut::<Input>().can_shoot = true;
        }
    }

    let frame = world.current_frame;
    for i in 0..world.entities.len() {
        let handle = world.entities.entities()[i];
        let expired = world
            .entities
            .get(handle)
            .is_some_and(|e| e.has::<LifeSpan>() && e.get::<LifeSpan>().is_expired(frame));
        if expired && world.destroy(handle) {
            trace!("entity {handle:?} expired at frame {frame}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::transform::Transform;
    use crate::testutil;

    fn setup() -> (PlayWorld, crate::resources::context::GameContext) {
        let ctx = testutil::context();
        let mut world = PlayWorld::load(&[], &ctx).expect("assets registered");
        world.entities.commit();
        (world, ctx)
    }

    fn close_gate(world: &mut PlayWorld) {
        world.player_mut().expect("player").get_mut::<Input>().can_shoot = false;
    }

    fn can_shoot(world: &PlayWorld) -> bool {
        world.player().expect("player").get::<Input>().can_shoot
    }

    #[test]
    fn expires_exactly_at_created_plus_lifespan() {
        let (mut world, ctx) = setup();
        world.current_frame = 10;
        let coin = world.spawn_coin(glam::Vec2::ZERO, &ctx).expect("coin");
        world.entities.commit();

        for frame in 10..40 {
            world.current_frame = frame;
            lifespan_system(&mut world, 15);
            assert!(world.entities.get(coin).is_some_and(|c| c.is_alive()), "frame {frame}");
        }
        world.current_frame = 40;
        lifespan_system(&mut world, 15);
        assert!(!world.entities.get(coin).expect("still visible").is_alive());
    }

    #[test]
    fn bullet_expiry_decrements_count_once() {
        let (mut world, ctx) = setup();
        let shooter = Transform::default();
        world.spawn_bullet(&shooter, &ctx).expect("bullet");
        world.entities.commit();
        assert_eq!(world.bullet_count, 1);

        world.current_frame = 60;
        lifespan_system(&mut world, 15);
        lifespan_system(&mut world, 15);
        assert_eq!(world.bullet_count, 0);
    }

    #[test]
    fn gate_reopens_when_newest_bullet_reaches_refire_age() {
        let (mut world, ctx) = setup();
        world.spawn_bullet(&Transform::default(), &ctx).expect("bullet");
        world.entities.commit();
        close_gate(&mut world);

        world.current_frame = 14;
        lifespan_system(&mut world, 15);
        assert!(!can_shoot(&world));

        world.current_frame = 15;
        lifespan_system(&mut world, 15);
        assert!(can_shoot(&world));
    }

    #[test]
    fn gate_reopens_without_bullets() {
        let (mut world, _ctx) = setup();
        close_gate(&mut world);
        lifespan_system(&mut world, 15);
        assert!(can_shoot(&world));
    }
}
