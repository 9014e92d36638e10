//! Manager plugin - owns score and session state, spawns the snake and food,
//! runs deferred actions and restarts finished games.

use bevy::{ecs::system::SystemParam, prelude::*};

use crate::food;
use crate::game::{
    DeferredAction, DeferredActions, Food, FoodEaten, FoodRng, GameError, GameOver, GameOverCause,
    GameState, Position, SCORE_PER_FOOD, SNAKE_START, SnakeController, SnakeHead, SnakeSegment,
    SnakeSettings, SpawnTemplates, TickSet,
};
use crate::snake::{grow, spawn_snake_head};

/// Plugin for game flow systems.
pub struct ManagerPlugin;

impl Plugin for ManagerPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TickSet::Deferred,
                TickSet::Input,
                TickSet::Movement,
                TickSet::Physics,
                TickSet::Resolve,
            )
                .chain(),
        )
        .init_resource::<GameState>()
        .init_resource::<DeferredActions>()
        .init_resource::<SpawnTemplates>()
        .init_resource::<SnakeSettings>()
        .init_resource::<FoodRng>()
        .add_message::<FoodEaten>()
        .add_message::<GameOver>()
        .add_systems(Startup, setup_game)
        .add_systems(
            Update,
            (restart_game, run_deferred_actions)
                .chain()
                .in_set(TickSet::Deferred),
        );
    }
}

// Type alias for querying everything a game session spawns
type SessionEntityQuery<'w, 's> = Query<
    'w,
    's,
    Entity,
    Or<(With<SnakeHead>, With<SnakeSegment>, With<Food>)>,
>;

/// Score, game-over and food lifecycle operations.
#[derive(SystemParam)]
pub struct GameManager<'w, 's> {
    commands: Commands<'w, 's>,
    state: ResMut<'w, GameState>,
    deferred: ResMut<'w, DeferredActions>,
    templates: Res<'w, SpawnTemplates>,
    rng: ResMut<'w, FoodRng>,
    food_eaten: MessageWriter<'w, FoodEaten>,
    game_over: MessageWriter<'w, GameOver>,
}

impl<'w, 's> GameManager<'w, 's> {
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn commands(&mut self) -> &mut Commands<'w, 's> {
        &mut self.commands
    }

    pub fn templates(&self) -> &SpawnTemplates {
        &self.templates
    }

    /// Resets score and game-over, then spawns the snake head and the first food.
    pub fn init_game(&mut self) -> Result<Entity, GameError> {
        let snake = self.templates.snake()?;

        self.state.score = 0;
        self.state.is_game_over = false;
        self.state.food = None;
        if !self.deferred.is_empty() {
            debug!("Discarding actions left over from the previous game");
            self.deferred.clear();
        }

        let head = spawn_snake_head(&mut self.commands, snake, SNAKE_START);
        self.spawn_food()?;
        info!("New game started");
        Ok(head)
    }

    /// Places a new food item on a random grid cell.
    pub fn spawn_food(&mut self) -> Result<Entity, GameError> {
        let template = self.templates.food()?;
        let entity = food::spawn_food(&mut self.commands, template, &mut self.rng.0);
        self.state.food = Some(entity);
        Ok(entity)
    }

    /// Scores the eaten food, removes it and schedules a respawn for the next tick.
    pub fn add_score(&mut self, food: Entity, position: Vec2) {
        self.state.score += SCORE_PER_FOOD;
        self.commands.entity(food).despawn();
        if self.state.food == Some(food) {
            self.state.food = None;
        }
        self.food_eaten.write(FoodEaten { position });
        self.deferred.schedule(DeferredAction::SpawnFood);
    }

    pub fn schedule(&mut self, action: DeferredAction) {
        self.deferred.schedule(action);
    }

    /// Ends the session. Only the first call has any effect.
    pub fn game_over(&mut self, cause: GameOverCause) {
        if self.state.is_game_over {
            return;
        }

        self.state.is_game_over = true;
        info!("Game Over! Final score: {}", self.state.score);
        self.game_over.write(GameOver {
            final_score: self.state.score,
            cause,
        });
    }

    fn take_deferred(&mut self) -> Vec<DeferredAction> {
        self.deferred.take()
    }
}

/// Startup system - validates the configuration and starts the first game.
fn setup_game(mut manager: GameManager) -> Result {
    manager.templates().validate()?;
    manager.init_game()?;
    Ok(())
}

/// System to run the actions scheduled by the previous tick.
fn run_deferred_actions(
    mut manager: GameManager,
    mut snakes: Query<(&mut SnakeController, &Position), With<SnakeHead>>,
    segments: Query<&Position, (With<SnakeSegment>, Without<SnakeHead>)>,
    settings: Res<SnakeSettings>,
) -> Result {
    for action in manager.take_deferred() {
        if manager.is_game_over() {
            let action = match action {
                DeferredAction::Grow => "grow",
                DeferredAction::SpawnFood => "spawn food",
            };
            warn!("{}", GameError::InvalidStateTransition(action));
            continue;
        }

        match action {
            DeferredAction::SpawnFood => {
                manager.spawn_food()?;
            }
            DeferredAction::Grow => {
                let Ok((mut controller, head)) = snakes.single_mut() else {
                    continue;
                };
                let last_position = controller
                    .segments
                    .last()
                    .and_then(|&last| segments.get(last).ok())
                    .map_or(head.0, |position| position.0);
                let template = manager.templates().body()?;
                grow(
                    manager.commands(),
                    template,
                    &mut controller,
                    last_position,
                    settings.body_spacing,
                );
            }
        }
    }
    Ok(())
}

/// System to start over when Space is pressed after a game over.
fn restart_game(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut manager: GameManager,
    session: SessionEntityQuery,
) -> Result {
    if !manager.is_game_over() || !keyboard_input.just_pressed(KeyCode::Space) {
        return Ok(());
    }

    for entity in session.iter() {
        manager.commands().entity(entity).despawn();
    }
    manager.init_game()?;
    Ok(())
}
