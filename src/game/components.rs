//! ECS components shared by the snake, food, physics and rendering plugins.

use bevy::prelude::*;

use crate::snake::Trail;

/// World-space position of a head, body segment or food item.
///
/// This is the authoritative position; `Transform` is derived from it by the
/// rendering plugin.
#[derive(Component, Deref, DerefMut, Clone, Copy, PartialEq, Debug, Default)]
pub struct Position(pub Vec2);

/// Axis-aligned heading of the snake.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector pointing along this direction.
    pub fn as_vec2(&self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
        }
    }

    /// Maps a steering key (arrows or WASD) to a direction.
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
            KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
            KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
            KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Marks the snake's head.
#[derive(Component)]
pub struct SnakeHead;

/// Movement state of one snake, stored on its head entity.
///
/// `segments[0]` is the head itself; every other entry is a tail segment whose
/// position is resampled from `trail` each frame.
#[derive(Component, Debug)]
pub struct SnakeController {
    pub direction: Direction,
    pub segments: Vec<Entity>,
    pub trail: Trail,
}

impl SnakeController {
    pub fn new(head: Entity, origin: Vec2, direction: Direction) -> Self {
        SnakeController {
            direction,
            segments: vec![head],
            trail: Trail::new(origin),
        }
    }

    /// Number of units including the head.
    pub fn unit_count(&self) -> usize {
        self.segments.len()
    }
}

/// A tail segment, `index` counted from the head (which is 0).
#[derive(Component, Clone, Copy, Debug)]
pub struct SnakeSegment {
    pub index: usize,
}

/// Marks food entities.
#[derive(Component)]
pub struct Food;

/// What a collider represents when it is reported in a contact.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tag {
    SnakeHead,
    SnakeBody,
    Food,
}

/// Axis-aligned box collider centred on the entity's `Position`.
///
/// Contacts are only reported when at least one side is solid, so two sensors
/// never touch each other.
#[derive(Component, Clone, Copy, Debug)]
pub struct Collider {
    pub half_extents: Vec2,
    pub sensor: bool,
}

impl Collider {
    pub fn solid(size: f32) -> Self {
        Collider {
            half_extents: Vec2::splat(size / 2.0),
            sensor: false,
        }
    }

    pub fn sensor(size: f32) -> Self {
        Collider {
            half_extents: Vec2::splat(size / 2.0),
            sensor: true,
        }
    }

    /// Strict overlap test; boxes that merely share an edge do not touch.
    pub fn overlaps(&self, at: Vec2, other: &Collider, other_at: Vec2) -> bool {
        let reach = self.half_extents + other.half_extents;
        let delta = (at - other_at).abs();
        delta.x < reach.x && delta.y < reach.y
    }
}

/// Component for the short flash left behind where food was eaten.
#[derive(Component)]
pub struct PulseEffect {
    pub timer: Timer,
    pub start_scale: f32,
    pub end_scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_ne!(dir, dir.opposite());
            assert_eq!(dir, dir.opposite().opposite());
            assert_eq!(dir.as_vec2(), -dir.opposite().as_vec2());
        }
    }

    #[test]
    fn test_steering_keys() {
        assert_eq!(Direction::from_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::Space), None);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Collider::solid(40.0);
        let b = Collider::sensor(40.0);

        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(40.0, 0.0)));
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(39.0, 10.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, -45.0)));
    }
}
