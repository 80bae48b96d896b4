//! Player animation state.
//!
//! The animation system computes a [`PlayerState`] every frame and hands it to
//! [`State::change_to`]. The `change_animation` flag is raised only on an
//! actual transition so the animation swap happens once per change.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
    #[default]
    Idle,
    IdleShoot,
    Run,
    RunShoot,
    Air,
    AirShoot,
}

impl PlayerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerState::Idle => "idle",
            PlayerState::IdleShoot => "idle_shoot",
            PlayerState::Run => "run",
            PlayerState::RunShoot => "run_shoot",
            PlayerState::Air => "air",
            PlayerState::AirShoot => "air_shoot",
        }
    }

    /// Animation asset shown while in this state.
    pub fn animation_name(&self) -> &'static str {
        match self {
            PlayerState::Idle => "Idle",
            PlayerState::IdleShoot => "IdleShoot",
            PlayerState::Run => "Run",
            PlayerState::RunShoot => "RunShoot",
            PlayerState::Air => "Air",
            PlayerState::AirShoot => "AirShoot",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct State {
    pub state: PlayerState,
    pub previous_state: PlayerState,
    /// One-shot flag consumed by the animation swap.
    pub change_animation: bool,
}

impl State {
    pub fn new(state: PlayerState) -> Self {
        Self {
            state,
            previous_state: state,
            change_animation: false,
        }
    }

    /// Transition to `next`. Raises `change_animation` only if the state differs,
    /// otherwise clears it.
    pub fn change_to(&mut self, next: PlayerState) {
        if self.state != next {
            self.previous_state = self.state;
            self.state = next;
            self.change_animation = true;
        } else {
            self.change_animation = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_raises_flag_once() {
        let mut state = State::new(PlayerState::Idle);
        state.change_to(PlayerState::Run);
        assert!(state.change_animation);
        assert_eq!(state.previous_state, PlayerState::Idle);

        state.change_to(PlayerState::Run);
        assert!(!state.change_animation);
        assert_eq!(state.previous_state, PlayerState::Idle);
        assert_eq!(state.state, PlayerState::Run);
    }

    #[test]
    fn repeated_same_state_never_raises() {
        let mut state = State::new(PlayerState::Air);
        for _ in 0..5 {
            state.change_to(PlayerState::Air);
            assert!(!state.change_animation);
        }
    }
}
