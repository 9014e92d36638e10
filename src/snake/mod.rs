//! Snake plugin - handles steering input, movement along the trail, growth and
//! interpretation of the head's contacts.

mod trail;

pub use trail::Trail;

use bevy::prelude::*;

use crate::game::{
    ARENA_HALF_EXTENT, BeginContact, Collider, DeferredAction, Direction, EntityTemplate,
    GameOverCause, GameState, NECK_SEGMENTS, Position, SnakeController, SnakeHead, SnakeSegment,
    SnakeSettings, Tag, TickSet, TurnRequested,
};
use crate::manager::GameManager;

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SnakeSettings>()
            .add_message::<TurnRequested>()
            .add_message::<BeginContact>()
            .add_systems(
                Update,
                (
                    read_turn_input
                        .run_if(game_running.and(any_with_component::<SnakeHead>))
                        .in_set(TickSet::Input),
                    apply_turns.in_set(TickSet::Movement),
                    move_snake.run_if(game_running).in_set(TickSet::Movement),
                    resolve_contacts.in_set(TickSet::Resolve),
                    check_bounds.in_set(TickSet::Resolve),
                )
                    .chain(),
            );
    }
}

fn game_running(state: Res<GameState>) -> bool {
    !state.is_game_over
}

/// Spawns the snake head at `origin`, heading right.
pub fn spawn_snake_head(commands: &mut Commands, template: EntityTemplate, origin: Vec2) -> Entity {
    let head = commands
        .spawn((
            SnakeHead,
            Tag::SnakeHead,
            Position(origin),
            Collider::solid(template.size),
            Name::new("SnakeHead"),
        ))
        .id();

    commands
        .entity(head)
        .insert(SnakeController::new(head, origin, Direction::Right));
    head
}

/// Spawns a body segment at the given position.
pub fn spawn_snake_segment(
    commands: &mut Commands,
    template: EntityTemplate,
    index: usize,
    position: Vec2,
) -> Entity {
    commands
        .spawn((
            SnakeSegment { index },
            Tag::SnakeBody,
            Position(position),
            Collider::sensor(template.size),
            Name::new(format!("SnakeBody{index}")),
        ))
        .id()
}

/// Appends one segment `spacing` behind the last unit, opposite to the heading.
///
/// The trail is cut at the current last unit and extended to the new one, so the
/// next resample puts the new segment exactly one spacing further along the path.
pub fn grow(
    commands: &mut Commands,
    template: EntityTemplate,
    controller: &mut SnakeController,
    last_position: Vec2,
    spacing: f32,
) -> Entity {
    let index = controller.unit_count();
    let position = last_position - controller.direction.as_vec2() * spacing;

    controller.trail.cut_at((index - 1) as f32 * spacing);
    controller.trail.extend_tail(position);

    let segment = spawn_snake_segment(commands, template, index, position);
    controller.segments.push(segment);
    debug!(
        "Snake grew to {} units, trail holds {} samples over {:.1}",
        controller.unit_count(),
        controller.trail.samples(),
        controller.trail.length()
    );
    segment
}

/// Applies queued steering requests to `current`.
///
/// Any request for the opposite of `current` is dropped, so the heading at the
/// end of a frame never reverses the heading it started the frame with.
pub fn resolve_turn(current: Direction, requests: impl IntoIterator<Item = Direction>) -> Direction {
    requests.into_iter().fold(current, |heading, requested| {
        if requested == current.opposite() {
            heading
        } else {
            requested
        }
    })
}

pub fn is_out_of_bounds(position: Vec2) -> bool {
    position.x.abs() > ARENA_HALF_EXTENT || position.y.abs() > ARENA_HALF_EXTENT
}

/// System to turn steering key presses into turn requests.
fn read_turn_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut turns: MessageWriter<TurnRequested>,
) {
    for key in keyboard_input.get_just_pressed() {
        if let Some(direction) = Direction::from_key(*key) {
            turns.write(TurnRequested(direction));
        }
    }
}

/// System to drain turn requests into the snake's heading.
fn apply_turns(
    mut turns: MessageReader<TurnRequested>,
    mut snakes: Query<&mut SnakeController, With<SnakeHead>>,
) {
    let Ok(mut controller) = snakes.single_mut() else {
        // Requests made while no snake exists are dropped with it
        turns.clear();
        return;
    };

    let direction = resolve_turn(controller.direction, turns.read().map(|turn| turn.0));
    if direction != controller.direction {
        controller.direction = direction;
    }
}

/// System to move the head and resample every body segment from the trail.
fn move_snake(
    time: Res<Time>,
    settings: Res<SnakeSettings>,
    mut heads: Query<(&mut SnakeController, &mut Position), With<SnakeHead>>,
    mut segments: Query<&mut Position, (With<SnakeSegment>, Without<SnakeHead>)>,
) {
    for (mut controller, mut head) in heads.iter_mut() {
        head.0 += controller.direction.as_vec2() * settings.move_speed * time.delta_secs();
        controller.trail.push_head(head.0);

        for (index, &segment) in controller.segments.iter().enumerate().skip(1) {
            if let Ok(mut position) = segments.get_mut(segment) {
                position.0 = controller.trail.sample(index as f32 * settings.body_spacing);
            }
        }

        let covered = (controller.unit_count() - 1) as f32 * settings.body_spacing;
        controller.trail.trim(covered);
    }
}

/// System to classify the head's new contacts.
fn resolve_contacts(
    mut contacts: MessageReader<BeginContact>,
    mut manager: GameManager,
    heads: Query<(), With<SnakeHead>>,
    touched: Query<(&Tag, &Position, Option<&SnakeSegment>)>,
) {
    for contact in contacts.read() {
        if manager.is_game_over() || !heads.contains(contact.entity) {
            continue;
        }
        let Ok((tag, position, segment)) = touched.get(contact.other) else {
            continue;
        };

        match tag {
            Tag::Food => {
                manager.add_score(contact.other, position.0);
                manager.schedule(DeferredAction::Grow);
            }
            Tag::SnakeBody => {
                if segment.is_some_and(|segment| segment.index >= NECK_SEGMENTS) {
                    manager.game_over(GameOverCause::SelfCollision);
                }
            }
            Tag::SnakeHead => {}
        }
    }
}

/// System to end the game when the head leaves the play field.
fn check_bounds(mut manager: GameManager, heads: Query<&Position, With<SnakeHead>>) {
    for head in heads.iter() {
        if is_out_of_bounds(head.0) {
            manager.game_over(GameOverCause::OutOfBounds);
        }
    }
}
