use glam::Vec3;
use hecs::{Entity, World};

use crate::actor::Actor;
use crate::components::{
    Collider, Color, Interactable, InteractKind, LocalTransform, MeshHandle, Platform, Scenery,
};
use crate::renderer::{mesh, MeshStore};

fn spawn_box(
    world: &mut World,
    cube: MeshHandle,
    position: Vec3,
    size: Vec3,
    color: Vec3,
) -> Entity {
    let mut local = LocalTransform::new(position);
    local.scale = size;
    world.spawn((
        local,
        cube,
        Color(color),
        Collider::Aabb {
            half_extents: size * 0.5,
        },
    ))
}

/// Build and populate the demo island: ground and float platforms, the coin,
/// the gumball machine, and the ship. Binds the coin handle on the actor.
/// Returns the mesh store (owns all GPU mesh data) and the shared cube mesh,
/// which the frame loop reuses for conjured blocks.
pub fn load_demo_scene(world: &mut World, actor: &mut Actor) -> (MeshStore, MeshHandle) {
    let mut meshes = MeshStore::new();
    let cube = meshes.add(mesh::create_cube());

    let ground_green = Vec3::new(0.25, 0.45, 0.3);
    let stone = Vec3::new(0.5, 0.5, 0.55);

    // Walkable geometry.
    let ground = spawn_box(
        world,
        cube,
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(50.0, 1.0, 50.0),
        ground_green,
    );
    world.insert_one(ground, Platform).unwrap();
    for &(x, y, z) in &[(4.0_f32, 0.75_f32, -3.0_f32), (-4.0, 1.5, 2.0)] {
        let slab = spawn_box(
            world,
            cube,
            Vec3::new(x, y, z),
            Vec3::new(3.0, 0.5, 3.0),
            stone,
        );
        world.insert_one(slab, Platform).unwrap();
    }

    // The coin, perched on the first float platform. The actor tracks it by
    // handle for its own collision poll.
    let mut coin_local = LocalTransform::new(Vec3::new(4.0, 1.4, -3.0));
    coin_local.scale = Vec3::splat(0.4);
    let coin = world.spawn((
        coin_local,
        cube,
        Color(Vec3::new(0.95, 0.8, 0.2)),
        Collider::Sphere { radius: 0.4 },
        Interactable {
            kind: InteractKind::Coin,
        },
    ));
    actor.bind_coin(Some(coin));

    // The gumball machine: step close and activate at your peril.
    let machine = spawn_box(
        world,
        cube,
        Vec3::new(-3.0, 0.6, -4.0),
        Vec3::new(0.8, 1.2, 0.8),
        Vec3::new(0.8, 0.2, 0.4),
    );
    world
        .insert(machine, (Scenery, Interactable { kind: InteractKind::GumballMachine }))
        .unwrap();

    // The ship, the way off the island.
    let ship = spawn_box(
        world,
        cube,
        Vec3::new(8.0, 1.0, 8.0),
        Vec3::new(4.0, 2.0, 2.0),
        Vec3::new(0.6, 0.55, 0.35),
    );
    world
        .insert(ship, (Scenery, Interactable { kind: InteractKind::Ship }))
        .unwrap();

    (meshes, cube)
}
