//! Game resources (singleton state and configuration).

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use super::{
    DEFAULT_BODY_SPACING, DEFAULT_MOVE_SPEED, FOOD_COLOR, GameError, SEGMENT_SIZE,
    SNAKE_HEAD_COLOR, SNAKE_SEGMENT_COLOR,
};

/// Score and session state, owned by the game manager.
#[derive(Resource, Default, Debug)]
pub struct GameState {
    pub score: u32,
    pub is_game_over: bool,
    /// The single live food item, if any.
    pub food: Option<Entity>,
}

/// Tunable movement settings of the snake.
#[derive(Resource, Clone, Copy, Debug)]
pub struct SnakeSettings {
    /// Head speed in units per second.
    pub move_speed: f32,
    /// Path length kept between neighbouring units.
    pub body_spacing: f32,
}

impl Default for SnakeSettings {
    fn default() -> Self {
        SnakeSettings {
            move_speed: DEFAULT_MOVE_SPEED,
            body_spacing: DEFAULT_BODY_SPACING,
        }
    }
}

/// Look and size of a spawnable entity. The size is also its collider size.
#[derive(Clone, Copy, Debug)]
pub struct EntityTemplate {
    pub color: Color,
    pub size: f32,
}

/// Templates used to spawn the snake head, body segments and food.
#[derive(Resource, Clone, Debug)]
pub struct SpawnTemplates {
    pub snake: Option<EntityTemplate>,
    pub body: Option<EntityTemplate>,
    pub food: Option<EntityTemplate>,
}

impl Default for SpawnTemplates {
    fn default() -> Self {
        SpawnTemplates {
            snake: Some(EntityTemplate {
                color: SNAKE_HEAD_COLOR,
                size: SEGMENT_SIZE,
            }),
            body: Some(EntityTemplate {
                color: SNAKE_SEGMENT_COLOR,
                size: SEGMENT_SIZE,
            }),
            food: Some(EntityTemplate {
                color: FOOD_COLOR,
                size: SEGMENT_SIZE,
            }),
        }
    }
}

impl SpawnTemplates {
    pub fn snake(&self) -> Result<EntityTemplate, GameError> {
        self.snake.ok_or(GameError::MissingTemplate("snake"))
    }

    pub fn body(&self) -> Result<EntityTemplate, GameError> {
        self.body.ok_or(GameError::MissingTemplate("body"))
    }

    pub fn food(&self) -> Result<EntityTemplate, GameError> {
        self.food.ok_or(GameError::MissingTemplate("food"))
    }

    /// Fails on the first template that is not configured.
    pub fn validate(&self) -> Result<(), GameError> {
        self.snake()?;
        self.body()?;
        self.food()?;
        Ok(())
    }
}

/// Work scheduled for the start of the next tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DeferredAction {
    Grow,
    SpawnFood,
}

/// One-shot actions queued during a tick and run at the start of the next one.
#[derive(Resource, Default, Debug)]
pub struct DeferredActions {
    queue: Vec<DeferredAction>,
}

impl DeferredActions {
    pub fn schedule(&mut self, action: DeferredAction) {
        self.queue.push(action);
    }

    /// Takes every queued action, oldest first.
    pub fn take(&mut self) -> Vec<DeferredAction> {
        std::mem::take(&mut self.queue)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

/// Random source for food placement.
#[derive(Resource)]
pub struct FoodRng(pub StdRng);

impl Default for FoodRng {
    fn default() -> Self {
        FoodRng(StdRng::from_os_rng())
    }
}
