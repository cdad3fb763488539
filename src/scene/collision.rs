use glam::Vec3;
use hecs::{Component, Entity, World};

use crate::components::{Collider, LocalTransform};

/// Narrow test: does the actor's bounding sphere overlap this collider?
fn sphere_hits(collider: &Collider, collider_pos: Vec3, center: Vec3, radius: f32) -> bool {
    match collider {
        Collider::Sphere { radius: other } => {
            (collider_pos - center).length_squared() < (radius + other) * (radius + other)
        }
        Collider::Aabb { half_extents } => {
            let closest = center.clamp(collider_pos - *half_extents, collider_pos + *half_extents);
            (closest - center).length_squared() < radius * radius
        }
    }
}

/// `check_for_collision` over one spatial collection: every entity carrying
/// the marker `M`. True as soon as any member overlaps the probe sphere.
pub fn check_marked<M: Component>(world: &World, center: Vec3, radius: f32) -> bool {
    world
        .query::<(&LocalTransform, &Collider)>()
        .with::<&M>()
        .iter()
        .any(|(_entity, (local, collider))| sphere_hits(collider, local.position, center, radius))
}

/// `check_for_collision` over an explicit roster of entity ids. Despawned or
/// collider-less entries simply report no contact.
pub fn check_entities(world: &World, entities: &[Entity], center: Vec3, radius: f32) -> bool {
    entities
        .iter()
        .any(|&entity| check_entity(world, entity, center, radius))
}

/// `check_for_collision` against a single entity.
pub fn check_entity(world: &World, entity: Entity, center: Vec3, radius: f32) -> bool {
    let Ok(local) = world.get::<&LocalTransform>(entity) else {
        return false;
    };
    let Ok(collider) = world.get::<&Collider>(entity) else {
        return false;
    };
    sphere_hits(&collider, local.position, center, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Platform, Scenery};

    #[test]
    fn sphere_overlap_and_miss() {
        let near = Collider::Sphere { radius: 1.0 };
        assert!(sphere_hits(&near, Vec3::ZERO, Vec3::new(1.2, 0.0, 0.0), 0.5));
        assert!(!sphere_hits(&near, Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 0.5));
    }

    #[test]
    fn aabb_overlap_face_and_corner() {
        let slab = Collider::Aabb {
            half_extents: Vec3::new(2.0, 0.5, 2.0),
        };
        // Resting on the top face.
        assert!(sphere_hits(&slab, Vec3::ZERO, Vec3::new(0.0, 0.9, 0.0), 0.5));
        // Past the corner.
        assert!(!sphere_hits(&slab, Vec3::ZERO, Vec3::new(2.5, 1.0, 2.5), 0.5));
    }

    #[test]
    fn touching_is_not_colliding() {
        let ball = Collider::Sphere { radius: 1.0 };
        assert!(!sphere_hits(&ball, Vec3::ZERO, Vec3::new(1.5, 0.0, 0.0), 0.5));
    }

    #[test]
    fn marked_query_ignores_other_collections() {
        let mut world = World::new();
        world.spawn((
            LocalTransform::new(Vec3::ZERO),
            Collider::Sphere { radius: 1.0 },
            Scenery,
        ));

        assert!(check_marked::<Scenery>(&world, Vec3::new(0.5, 0.0, 0.0), 0.5));
        assert!(!check_marked::<Platform>(&world, Vec3::new(0.5, 0.0, 0.0), 0.5));
    }

    #[test]
    fn roster_hits_when_any_member_overlaps() {
        let mut world = World::new();
        let far = world.spawn((
            LocalTransform::new(Vec3::new(50.0, 0.0, 0.0)),
            Collider::Sphere { radius: 1.0 },
        ));
        let near = world.spawn((
            LocalTransform::new(Vec3::ZERO),
            Collider::Sphere { radius: 1.0 },
        ));

        assert!(check_entities(&world, &[far, near], Vec3::ZERO, 0.5));
        assert!(!check_entities(&world, &[far], Vec3::ZERO, 0.5));
        assert!(!check_entities(&world, &[], Vec3::ZERO, 0.5));
    }

    #[test]
    fn colliderless_entity_reports_no_contact() {
        let mut world = World::new();
        let ghost = world.spawn((LocalTransform::new(Vec3::ZERO),));
        assert!(!check_entity(&world, ghost, Vec3::ZERO, 0.5));
    }

    #[test]
    fn despawned_entity_reports_no_contact() {
        let mut world = World::new();
        let gone = world.spawn((
            LocalTransform::new(Vec3::ZERO),
            Collider::Sphere { radius: 1.0 },
        ));
        world.despawn(gone).unwrap();
        assert!(!check_entity(&world, gone, Vec3::ZERO, 0.5));
    }
}
