mod food;
mod game;
mod manager;
mod physics;
mod rendering;
mod snake;
#[cfg(test)]
mod test_support;

use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

use game::{ARENA_HALF_EXTENT, BACKGROUND_COLOR, SEGMENT_SIZE, WINDOW_TITLE};
use manager::ManagerPlugin;
use physics::PhysicsPlugin;
use rendering::RenderingPlugin;
use snake::SnakePlugin;

fn main() {
    let side = (ARENA_HALF_EXTENT * 2.0 + SEGMENT_SIZE * 2.0) as u32;

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(side, side),
                    title: WINDOW_TITLE.to_string(),
                    ..Default::default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
        ))
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        .add_plugins((ManagerPlugin, SnakePlugin, PhysicsPlugin, RenderingPlugin))
        .run();
}
