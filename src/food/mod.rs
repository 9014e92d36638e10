//! Food spawning on the play-field grid.

use bevy::prelude::*;
use rand::prelude::*;

use crate::game::{
    Collider, EntityTemplate, FOOD_GRID_CELLS, FOOD_GRID_STEP, Food, Position, Tag,
};

/// Picks a random grid cell in `[-FOOD_GRID_CELLS, FOOD_GRID_CELLS)` on each axis.
///
/// The snake is not taken into account; food may appear under its body.
pub fn random_food_position(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.random_range(-FOOD_GRID_CELLS..FOOD_GRID_CELLS) as f32 * FOOD_GRID_STEP,
        rng.random_range(-FOOD_GRID_CELLS..FOOD_GRID_CELLS) as f32 * FOOD_GRID_STEP,
    )
}

/// Spawns food at a random grid position.
pub fn spawn_food(commands: &mut Commands, template: EntityTemplate, rng: &mut impl Rng) -> Entity {
    let position = random_food_position(rng);
    debug!("Spawning food at {position}");

    commands
        .spawn((
            Food,
            Tag::Food,
            Position(position),
            Collider::sensor(template.size),
            Name::new("Food"),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_food_lands_on_grid_inside_field() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let position = random_food_position(&mut rng);
            for axis in [position.x, position.y] {
                assert_eq!(axis % FOOD_GRID_STEP, 0.0);
                assert!((-400.0..=360.0).contains(&axis));
            }
        }
    }

    #[test]
    fn test_food_covers_whole_grid_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let xs: Vec<f32> = (0..2000)
            .map(|_| random_food_position(&mut rng).x)
            .collect();

        assert!(xs.contains(&-400.0));
        assert!(xs.contains(&360.0));
        assert!(!xs.contains(&400.0));
    }
}
