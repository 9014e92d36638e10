//! Game constants for the play field, movement, scoring, colors and rendering layers.

use bevy::prelude::*;

pub const WINDOW_TITLE: &str = "Trail Snake";

// Play field: the head may not leave [-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT] on either axis
pub const ARENA_HALF_EXTENT: f32 = 400.0;

// Food is placed on a grid of FOOD_GRID_STEP units, FOOD_GRID_CELLS cells each side of the origin
pub const FOOD_GRID_STEP: f32 = 40.0;
pub const FOOD_GRID_CELLS: i32 = 10;

// Scoring
pub const SCORE_PER_FOOD: u32 = 10;

// Movement
pub const DEFAULT_MOVE_SPEED: f32 = 200.0;
pub const DEFAULT_BODY_SPACING: f32 = 40.0;

// Visual / collider size of one snake unit or food item
pub const SEGMENT_SIZE: f32 = 40.0;
pub const CORNER_RADIUS: f32 = 6.0;

// Segments closer to the head than this index never count as a self-collision
pub const NECK_SEGMENTS: usize = 2;

// Initial positions
pub const SNAKE_START: Vec2 = Vec2::ZERO;

// Colors
pub const SNAKE_HEAD_COLOR: Color = Color::srgba(0.9, 0.9, 0.9, 1.0);
pub const SNAKE_SEGMENT_COLOR: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
pub const FOOD_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 1.0);
pub const FOOD_EATEN_COLOR: Color = Color::srgba(1.0, 1.0, 0.3, 0.8);
pub const ARENA_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 1.0);
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);

// Z-index constants for rendering layers
pub const Z_BACKGROUND: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_SNAKE_SEGMENT: f32 = 1.5;
pub const Z_SNAKE_HEAD: f32 = 2.0;
