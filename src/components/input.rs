//! Player intent flags written by action dispatch and read by the movement
//! and animation systems.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub shoot: bool,
    /// Gate re-opened by the lifespan system once a shot has travelled long enough.
    pub can_shoot: bool,
    /// Gate re-opened on landing.
    pub can_jump: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            shoot: false,
            can_shoot: true,
            can_jump: true,
        }
    }
}
