//! Movement system.
//!
//! Two passes per frame:
//!
//! 1. Player control. Horizontal velocity and gravity are reset from the
//!    configuration, then rebuilt from the [`Input`] flags: left/right set
//!    the velocity and facing (right wins when both are held), `up` starts a
//!    jump while grounded or keeps boosting it for up to `max_duration`
//!    frames, and `shoot` fires while the gate is open.
//! 2. Integration. Every entity with a [`Transform`] gets gravity (clamped
//!    to the maximum fall speed), stores its previous position, and moves by
//!    its velocity.
//!
//! Bullets fired here sit in the manager's pending queue, so they are not
//! integrated until the next frame.

use log::trace;

use crate::components::gravity::Gravity;
use crate::components::input::Input;
use crate::components::jump::Jump;
use crate::components::transform::Transform;
use crate::error::AssetError;
use crate::resources::context::GameContext;
use crate::world::PlayWorld;

/// What player control decided this frame.
#[derive(Debug, Default)]
struct ControlOutcome {
    jumped: bool,
    fire_from: Option<Transform>,
}

fn control_player(world: &mut PlayWorld, ctx: &GameContext) -> ControlOutcome {
    let conf = &ctx.config.player;
    let frame = world.current_frame;
    let mut outcome = ControlOutcome::default();
    let Some(player) = world.entities.get_mut(world.player) else {
        return outcome;
    };
    if !(player.has::<Input>()
        && player.has::<Transform>()
        && player.has::<Gravity>()
        && player.has::<Jump>())
    {
        return outcome;
    }

    let mut input = *player.get::<Input>();
    let mut jump = *player.get::<Jump>();
    let mut transform = *player.get::<Transform>();

    transform.velocity.x = 0.0;
    player.get_mut::<Gravity>().gravity = conf.gravity;

    if input.left {
        transform.velocity.x = -conf.speed;
        transform.scale.x = -transform.scale.x.abs();
    }
    if input.right {
        transform.velocity.x = conf.speed;
        transform.scale.x = transform.scale.x.abs();
    }

    if input.up {
        if input.can_jump {
            transform.velocity.y = -jump.initial_strength;
            input.can_jump = false;
            jump.jumping = true;
            jump.start_frame = frame;
            outcome.jumped = true;
            trace!("jump start at frame {frame}");
        } else if jump.jumping && frame.saturating_sub(jump.start_frame) <= jump.max_duration {
            transform.velocity.y -= jump.frame_strength;
        }
    }

    if input.shoot && input.can_shoot {
        input.can_shoot = false;
        outcome.fire_from = Some(transform);
    }

    *player.get_mut::<Input>() = input;
    *player.get_mut::<Jump>() = jump;
    *player.get_mut::<Transform>() = transform;
    outcome
}

fn integrate(world: &mut PlayWorld, max_fall_speed: f32) {
    for i in 0..world.entities.len() {
        let handle = world.entities.entities()[i];
        let Some(entity) = world.entities.get_mut(handle) else {
            continue;
        };
        if !entity.has::<Transform>() {
            continue;
        }
        let gravity = entity
            .has::<Gravity>()
            .then(|| entity.get::<Gravity>().gravity);
        let transform = entity.get_mut::<Transform>();
        if let Some(g) = gravity {
            transform.velocity.y = (transform.velocity.y + g).min(max_fall_speed);
        }
        transform.previous_pos = transform.pos;
        transform.pos += transform.velocity;
    }
}

pub fn movement_system(world: &mut PlayWorld, ctx: &GameContext) -> Result<(), AssetError> {
    let outcome = control_player(world, ctx);
    let player = world.player;
    if outcome.jumped {
        world.play_sound(player, "Jump", ctx)?;
    }
    if let Some(shooter) = outcome.fire_from {
        world.spawn_bullet(&shooter, ctx)?;
        world.play_sound(player, "Shoot", ctx)?;
    }
    integrate(world, ctx.config.player.max_fall_speed);
    Ok(())
}
