//! Animation systems.
//!
//! - [`player_state_system`] runs the player state machine and swaps the
//!   player's animation when, and only when, the state changed.
//! - [`advance_animations`] ticks every [`Animation`] and destroys entities
//!   whose non-repeating animation has finished.
//!
//! # State selection
//!
//! Priority is airborne > moving > idle, each with a shooting variant:
//!
//! | airborne | moving | shoot | state        |
//! |----------|--------|-------|--------------|
//! | yes      | any    | no    | `air`        |
//! | yes      | any    | yes   | `air_shoot`  |
//! | no       | yes    | no    | `run`        |
//! | no       | yes    | yes   | `run_shoot`  |
//! | no       | no     | no    | `idle`       |
//! | no       | no     | yes   | `idle_shoot` |
//!
//! Airborne means any of: vertical speed above [`EPSILON`], jump gate
//! closed, jump pressed while the gate is open, or mid-jump.
//!
//! # Related
//!
//! - [`crate::components::state::State`] – transition bookkeeping
//! - [`crate::components::animation::Animation`] – playback state

use crate::components::animation::Animation;
use crate::components::input::Input;
use crate::components::jump::Jump;
use crate::components::state::{PlayerState, State};
use crate::components::transform::Transform;
use crate::error::AssetError;
use crate::resources::assetstore::AssetStore;
use crate::world::PlayWorld;

pub const EPSILON: f32 = 0.1;

/// Pick the player state for this frame.
pub fn next_player_state(transform: &Transform, input: &Input, jump: &Jump) -> PlayerState {
    let just_jumped = input.up && input.can_jump;
    let in_air = transform.velocity.y.abs() > EPSILON
        || !input.can_jump
        || just_jumped
        || jump.jumping;
    let moving = transform.velocity.x.abs() > EPSILON;

    match (in_air, moving, input.shoot) {
        (true, _, false) => PlayerState::Air,
        (true, _, true) => PlayerState::AirShoot,
        (false, true, false) => PlayerState::Run,
        (false, true, true) => PlayerState::RunShoot,
        (false, false, false) => PlayerState::Idle,
        (false, false, true) => PlayerState::IdleShoot,
    }
}

pub fn player_state_system(world: &mut PlayWorld, assets: &AssetStore) -> Result<(), AssetError> {
    let Some(player) = world.player_mut() else {
        return Ok(());
    };
    if !(player.has::<Transform>()
        && player.has::<State>()
        && player.has::<Input>()
        && player.has::<Jump>())
    {
        return Ok(());
    }

    let next = next_player_state(player.get::<Transform>(), player.get::<Input>(), player.get::<Jump>());
    let state = player.get_mut::<State>();
    state.change_to(next);
    if state.change_animation {
        let name = next.animation_name();
        player.add(Animation::new(name, assets.animation(name)?, true));
    }
    Ok(())
}

pub fn advance_animations(world: &mut PlayWorld) {
    for i in 0..world.entities.len() {
        let handle = world.entities.entities()[i];
        let Some(entity) = world.entities.get_mut(handle) else {
            continue;
        };
        if !entity.has::<Animation>() {
            continue;
        }
        let animation = entity.get_mut::<Animation>();
        if animation.has_ended() && !animation.repeat {
            world.destroy(handle);
        } else {
            animation.update();
        }
    }
}

pub fn animation_system(world: &mut PlayWorld, assets: &AssetStore) -> Result<(), AssetError> {
    player_state_system(world, assets)?;
    advance_animations(world);
    Ok(())
}
