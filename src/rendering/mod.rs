//! Rendering plugin - attaches visuals to game entities, syncs `Position` into
//! `Transform`, and plays the food-eaten flash.

use bevy::{prelude::*, window::PrimaryWindow};
use bevy_vector_shapes::prelude::*;

use crate::game::{
    ARENA_COLOR, ARENA_HALF_EXTENT, CORNER_RADIUS, Direction, EntityTemplate, FOOD_EATEN_COLOR,
    Food, FoodEaten, GameOver, Position, PulseEffect, SEGMENT_SIZE, SnakeController, SnakeHead,
    SnakeSegment, SpawnTemplates, TickSet, WINDOW_TITLE, Z_BACKGROUND, Z_FOOD, Z_SNAKE_HEAD, Z_SNAKE_SEGMENT,
};

/// Plugin for rendering and visual effects.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene).add_systems(
            Update,
            (
                attach_visuals,
                position_translation,
                update_head_rotation,
                spawn_food_eaten_effect,
                pulse_effect_system,
                update_window_title,
            )
                .chain()
                .after(TickSet::Resolve),
        );
    }
}

// Type alias for entities that still need a visual
type NewVisualQuery<'w, 's> = Query<
    'w,
    's,
    (Entity, Option<&'static SnakeHead>, Option<&'static SnakeSegment>),
    Or<(Added<SnakeHead>, Added<SnakeSegment>, Added<Food>)>,
>;

// Type alias for transform sync query
type TransformSyncQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static Position,
        &'static mut Transform,
        Option<&'static SnakeHead>,
        Option<&'static SnakeSegment>,
    ),
>;

/// Startup system - camera and arena background.
fn setup_scene(mut commands: Commands) {
    commands.spawn(Camera2d);

    let side = ARENA_HALF_EXTENT * 2.0 + SEGMENT_SIZE;
    commands.spawn((
        Sprite {
            color: ARENA_COLOR,
            custom_size: Some(Vec2::splat(side)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
    ));
}

fn rounded_rect(template: EntityTemplate, z: f32) -> impl Bundle {
    // Normalize corner radius relative to the shape size (0.0 to 1.0 range)
    let corner_radius_normalized = CORNER_RADIUS / (template.size / 2.0);

    ShapeBundle::rect(
        &ShapeConfig {
            color: template.color,
            corner_radii: Vec4::splat(corner_radius_normalized),
            transform: Transform::from_xyz(0.0, 0.0, z),
            ..ShapeConfig::default_2d()
        },
        Vec2::splat(template.size),
    )
}

/// System to give freshly spawned heads, segments and food their shapes.
fn attach_visuals(mut commands: Commands, templates: Res<SpawnTemplates>, added: NewVisualQuery) {
    for (entity, head, segment) in added.iter() {
        if head.is_some() {
            let Some(template) = templates.snake else {
                continue;
            };
            let eye_offset = template.size * 0.15;
            let eye_radius = template.size * 0.08;

            commands
                .entity(entity)
                .insert(rounded_rect(template, Z_SNAKE_HEAD))
                .with_children(|parent| {
                    for side in [1.0, -1.0] {
                        parent.spawn(ShapeBundle::circle(
                            &ShapeConfig {
                                color: Color::srgba(0.0, 0.0, 0.0, 1.0),
                                transform: Transform::from_xyz(eye_offset, side * eye_offset, 0.1),
                                ..ShapeConfig::default_2d()
                            },
                            eye_radius,
                        ));
                    }
                });
        } else if segment.is_some() {
            if let Some(template) = templates.body {
                commands
                    .entity(entity)
                    .insert(rounded_rect(template, Z_SNAKE_SEGMENT));
            }
        } else if let Some(template) = templates.food {
            commands.entity(entity).insert(ShapeBundle::circle(
                &ShapeConfig {
                    color: template.color,
                    transform: Transform::from_xyz(0.0, 0.0, Z_FOOD),
                    ..ShapeConfig::default_2d()
                },
                template.size / 2.0,
            ));
        }
    }
}

/// System to copy game positions into transforms, layered by entity type.
fn position_translation(mut transforms: TransformSyncQuery) {
    for (position, mut transform, head, segment) in transforms.iter_mut() {
        let z = if head.is_some() {
            Z_SNAKE_HEAD
        } else if segment.is_some() {
            Z_SNAKE_SEGMENT
        } else {
            Z_FOOD
        };

        transform.translation = position.extend(z);
    }
}

/// System to update snake head rotation based on direction.
fn update_head_rotation(mut heads: Query<(&SnakeController, &mut Transform), With<SnakeHead>>) {
    for (controller, mut transform) in heads.iter_mut() {
        let rotation = match controller.direction {
            Direction::Right => 0.0,
            Direction::Up => std::f32::consts::FRAC_PI_2,
            Direction::Left => std::f32::consts::PI,
            Direction::Down => -std::f32::consts::FRAC_PI_2,
        };

        transform.rotation = Quat::from_rotation_z(rotation);
    }
}

/// System to spawn visual effect when food is eaten.
fn spawn_food_eaten_effect(
    mut commands: Commands,
    templates: Res<SpawnTemplates>,
    mut food_eaten_reader: MessageReader<FoodEaten>,
) {
    let radius = templates.food.map_or(20.0, |template| template.size / 2.0);

    for event in food_eaten_reader.read() {
        commands.spawn((
            ShapeBundle::circle(
                &ShapeConfig {
                    color: FOOD_EATEN_COLOR,
                    transform: Transform::from_translation(event.position.extend(Z_FOOD + 0.5)),
                    ..ShapeConfig::default_2d()
                },
                radius,
            ),
            PulseEffect {
                timer: Timer::from_seconds(0.3, TimerMode::Once),
                start_scale: 1.0,
                end_scale: 2.5,
            },
        ));
    }
}

/// System to show the final score in the window title until the next game starts.
fn update_window_title(
    mut game_over_reader: MessageReader<GameOver>,
    new_heads: Query<(), Added<SnakeHead>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };

    if !new_heads.is_empty() {
        window.title = WINDOW_TITLE.to_string();
    }
    for event in game_over_reader.read() {
        window.title = format!(
            "{WINDOW_TITLE} - Game Over! Score: {} - Press SPACE to restart",
            event.final_score
        );
    }
}

/// System to handle pulse effects (for eaten food flash).
fn pulse_effect_system(
    mut commands: Commands,
    time: Res<Time>,
    mut effects: Query<(Entity, &mut Transform, &mut PulseEffect)>,
) {
    for (entity, mut transform, mut effect) in effects.iter_mut() {
        effect.timer.tick(time.delta());

        if effect.timer.is_finished() {
            commands.entity(entity).despawn();
        } else {
            let progress = effect.timer.fraction();
            let scale = effect.start_scale + (effect.end_scale - effect.start_scale) * progress;
            transform.scale = Vec3::splat(scale);
        }
    }
}
