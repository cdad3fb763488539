use glam::{Mat4, Quat, Vec3};

/// Spatial transform with position, rotation, and scale.
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl LocalTransform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Collision shape attached to a scene entity. Queried yes/no against the
/// actor's bounding sphere; there is no collision response here.
pub enum Collider {
    Sphere { radius: f32 },
    Aabb { half_extents: Vec3 },
}

/// Marker: general scene solid (props, interactable bodies).
pub struct Scenery;

/// Marker: walkable platform geometry.
pub struct Platform;

/// Index into the MeshStore resource.
#[derive(Clone, Copy)]
pub struct MeshHandle(pub usize);

/// RGB color applied to an entity for rendering.
pub struct Color(pub Vec3);

/// Marker: entity is hidden from rendering (a picked-up coin stays spawned).
pub struct Hidden;

/// What activating this entity does to the actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractKind {
    /// Sets the actor's one-way pickup flag and stops colliding.
    Coin,
    /// Springs the gumball hazard on the actor.
    GumballMachine,
    /// The way out. Needs the coin, and refuses while destroyed.
    Ship,
}

/// Attached to entities the actor can focus and activate. The focus system
/// polls collision for every one of these each frame on the entity's behalf.
pub struct Interactable {
    pub kind: InteractKind,
}
