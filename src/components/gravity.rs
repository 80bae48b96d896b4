use serde::{Deserialize, Serialize};

/// Downward acceleration added to vertical velocity every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gravity {
    pub gravity: f32,
}

impl Gravity {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}
