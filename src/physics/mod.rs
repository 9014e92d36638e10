//! Physics plugin - box overlap detection that reports begin-contact messages.
//!
//! Only pairs with at least one solid collider are tested, and a pair is
//! reported once when it starts touching, not again while it stays in contact.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::game::{BeginContact, Collider, Position, TickSet};

/// Plugin for contact detection.
pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ContactPairs>()
            .add_message::<BeginContact>()
            .add_systems(Update, detect_contacts.in_set(TickSet::Physics));
    }
}

/// Pairs that were touching at the end of the last detection pass.
#[derive(Resource, Default, Debug)]
pub struct ContactPairs {
    touching: HashSet<(Entity, Entity)>,
}

impl ContactPairs {
    pub fn is_touching(&self, entity: Entity, other: Entity) -> bool {
        self.touching.contains(&(entity, other))
    }
}

/// System to detect colliders that started overlapping this frame.
fn detect_contacts(
    colliders: Query<(Entity, &Position, &Collider)>,
    mut pairs: ResMut<ContactPairs>,
    mut contacts: MessageWriter<BeginContact>,
) {
    let mut touching = HashSet::new();

    for (entity, position, collider) in colliders.iter() {
        if collider.sensor {
            continue;
        }
        for (other, other_position, other_collider) in colliders.iter() {
            // Solid pairs are visited twice; keep one ordering
            if other == entity || (!other_collider.sensor && other < entity) {
                continue;
            }
            if !collider.overlaps(position.0, other_collider, other_position.0) {
                continue;
            }

            touching.insert((entity, other));
            if !pairs.is_touching(entity, other) {
                contacts.write(BeginContact { entity, other });
            }
        }
    }

    pairs.touching = touching;
}
