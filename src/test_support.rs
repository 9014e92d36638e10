//! Headless app helpers shared by the plugin tests.

use std::time::Duration;

use bevy::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

use crate::food::random_food_position;
use crate::game::{
    FoodRng, GameOver, GameOverCause, GameState, Position, SnakeHead, SnakeSegment,
};
use crate::manager::ManagerPlugin;
use crate::physics::PhysicsPlugin;
use crate::snake::SnakePlugin;

/// Every cause reported through `GameOver` messages, in order.
#[derive(Resource, Default)]
pub struct GameOverLog {
    pub causes: Vec<GameOverCause>,
}

fn record_game_over(mut reader: MessageReader<GameOver>, mut log: ResMut<GameOverLog>) {
    log.causes.extend(reader.read().map(|message| message.cause));
}

/// Seed whose first food positions all stay well away from the x axis, so the
/// randomly placed food never lands in the path of a snake moving along it.
fn off_axis_seed() -> u64 {
    (0..)
        .find(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..8).all(|_| random_food_position(&mut rng).y.abs() >= 80.0)
        })
        .expect("some seed keeps food off the axis")
}

pub fn add_game_plugins(app: &mut App) {
    app.init_resource::<Time>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins((ManagerPlugin, SnakePlugin, PhysicsPlugin));
}

/// App with the core plugins, after the startup frame has run.
pub fn test_app() -> App {
    let mut app = App::new();
    app.insert_resource(FoodRng(StdRng::seed_from_u64(off_axis_seed())))
        .init_resource::<GameOverLog>()
        .add_systems(Last, record_game_over);
    add_game_plugins(&mut app);
    app.update();
    app
}

/// Advances time by `secs` and runs one frame.
pub fn tick(app: &mut App, secs: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(secs));
    app.update();

    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release_all();
    keyboard.clear();
}

/// Presses `key` for the next frame.
pub fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

pub fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(
        actual.distance(expected) < 1e-3,
        "expected {expected}, got {actual}"
    );
}

pub fn head_entity(app: &mut App) -> Entity {
    let world = app.world_mut();
    world
        .query_filtered::<Entity, With<SnakeHead>>()
        .single(world)
        .expect("exactly one snake head")
}

pub fn head_position(app: &mut App) -> Vec2 {
    let world = app.world_mut();
    world
        .query_filtered::<&Position, With<SnakeHead>>()
        .single(world)
        .expect("exactly one snake head")
        .0
}

/// Tail segment positions ordered from the head backwards.
pub fn segment_positions(app: &mut App) -> Vec<Vec2> {
    let world = app.world_mut();
    let mut segments: Vec<(usize, Vec2)> = world
        .query::<(&SnakeSegment, &Position)>()
        .iter(world)
        .map(|(segment, position)| (segment.index, position.0))
        .collect();
    segments.sort_by_key(|(index, _)| *index);
    segments.into_iter().map(|(_, position)| position).collect()
}

pub fn entity_count<T: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<(), With<T>>().iter(world).count()
}

pub fn food_position(app: &mut App) -> Vec2 {
    let food = app
        .world()
        .resource::<GameState>()
        .food
        .expect("food is alive");
    app.world()
        .get::<Position>(food)
        .expect("food has a position")
        .0
}

/// Moves the live food item to `position`.
pub fn place_food(app: &mut App, position: Vec2) {
    let food = app
        .world()
        .resource::<GameState>()
        .food
        .expect("food is alive");
    app.world_mut()
        .get_mut::<Position>(food)
        .expect("food has a position")
        .0 = position;
}
