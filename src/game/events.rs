//! Game messages, queued during a frame and drained at fixed points of the tick.

use bevy::prelude::*;

use super::Direction;

/// A steering request from the player, applied before the next move.
#[derive(Message, Clone, Copy, Debug)]
pub struct TurnRequested(pub Direction);

/// Two colliders started overlapping this frame.
///
/// `entity` is always the solid collider (the snake head), `other` the thing it touched.
#[derive(Message, Clone, Copy, Debug)]
pub struct BeginContact {
    pub entity: Entity,
    pub other: Entity,
}

/// Message triggered when food is eaten (for visual effects).
#[derive(Message, Clone, Copy, Debug)]
pub struct FoodEaten {
    pub position: Vec2,
}

/// Why a session ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameOverCause {
    SelfCollision,
    OutOfBounds,
}

/// Sent once per session when the game ends.
#[derive(Message, Clone, Copy, Debug)]
pub struct GameOver {
    pub final_score: u32,
    pub cause: GameOverCause,
}
