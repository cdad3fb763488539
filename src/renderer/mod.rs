pub mod mesh;
pub mod shader;

use glam::{Mat4, Vec3};
use hecs::World;
use mesh::Mesh;
use shader::{ShaderError, ShaderProgram};

use crate::actor::DrawQueue;
use crate::components::{Color, Hidden, LocalTransform, MeshHandle};

const VERT_SRC: &str = include_str!("../../shaders/flat.vert");
const FRAG_SRC: &str = include_str!("../../shaders/flat.frag");

const CLEAR_COLOR: Vec3 = Vec3::new(0.08, 0.09, 0.14);
const LIGHT_DIR: Vec3 = Vec3::new(-0.5, -1.0, -0.3);
/// Gumball pink; the overlay's opacity comes from the draw submission.
const OVERLAY_COLOR: Vec3 = Vec3::new(0.85, 0.25, 0.55);
/// The overlay plate sits one unit in front of the eye, as the original did.
const OVERLAY_DEPTH: f32 = -1.0;

/// Holds all loaded meshes. Entities reference meshes by MeshHandle index.
pub struct MeshStore {
    meshes: Vec<Mesh>,
}

impl MeshStore {
    pub fn new() -> Self {
        Self { meshes: Vec::new() }
    }

    pub fn add(&mut self, mesh: Mesh) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len());
        self.meshes.push(mesh);
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> &Mesh {
        &self.meshes[handle.0]
    }
}

pub struct Renderer {
    program: ShaderProgram,
    overlay_quad: Mesh,
}

impl Renderer {
    pub fn init() -> Result<Self, ShaderError> {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);
            gl::ClearColor(CLEAR_COLOR.x, CLEAR_COLOR.y, CLEAR_COLOR.z, 1.0);
        }

        let program = ShaderProgram::from_sources(VERT_SRC, FRAG_SRC)?;
        let overlay_quad = mesh::create_overlay_quad();

        Ok(Self {
            program,
            overlay_quad,
        })
    }

    pub fn draw_scene(&mut self, world: &World, meshes: &MeshStore, view: &Mat4, proj: &Mat4) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        self.program.bind();
        self.program.set_mat4("u_view", view);
        self.program.set_mat4("u_projection", proj);
        self.program.set_vec3("u_light_dir", LIGHT_DIR);

        for (_entity, (local, handle, color, hidden)) in world
            .query::<(&LocalTransform, &MeshHandle, &Color, Option<&Hidden>)>()
            .iter()
        {
            if hidden.is_some() {
                continue;
            }
            self.program.set_mat4("u_model", &local.matrix());
            self.program
                .set_vec4("u_color", [color.0.x, color.0.y, color.0.z, 1.0]);
            meshes.get(*handle).draw();
        }
    }

    /// Draw the actor's overlay submissions in camera space, on top of the
    /// scene, with alpha blending.
    pub fn draw_overlays(&mut self, draws: &DrawQueue, proj: &Mat4) {
        if draws.overlays().is_empty() {
            return;
        }

        unsafe {
            gl::Disable(gl::DEPTH_TEST);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        self.program.bind();
        self.program.set_mat4("u_view", &Mat4::IDENTITY);
        self.program.set_mat4("u_projection", proj);
        self.program.set_vec3("u_light_dir", -Vec3::Z);

        for frame in draws.overlays() {
            let model = Mat4::from_translation(Vec3::new(0.0, 0.0, OVERLAY_DEPTH))
                * Mat4::from_scale(frame.scale);
            self.program.set_mat4("u_model", &model);
            self.program.set_vec4(
                "u_color",
                [OVERLAY_COLOR.x, OVERLAY_COLOR.y, OVERLAY_COLOR.z, frame.opacity],
            );
            self.overlay_quad.draw();
        }

        unsafe {
            gl::Disable(gl::BLEND);
            gl::Enable(gl::DEPTH_TEST);
        }
    }
}
