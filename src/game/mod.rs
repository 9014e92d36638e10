//! Core game module containing shared components, resources, events, errors and constants.

mod components;
mod constants;
mod error;
mod events;
mod resources;

pub use components::*;
pub use constants::*;
pub use error::*;
pub use events::*;
pub use resources::*;

use bevy::prelude::*;

/// Fixed stages of one game tick, run in this order every frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Actions scheduled by the previous tick (growth, food respawn, restart).
    Deferred,
    /// Keyboard input turned into steering.
    Input,
    /// Head integration and body resampling.
    Movement,
    /// Contact detection.
    Physics,
    /// Contact classification and boundary check.
    Resolve,
}
