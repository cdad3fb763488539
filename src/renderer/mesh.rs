use gl::types::*;
use std::mem;
use std::ptr;

pub struct Mesh {
    vao: GLuint,
    vbo: GLuint,
    ebo: GLuint,
    index_count: i32,
}

impl Mesh {
    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(gl::TRIANGLES, self.index_count, gl::UNSIGNED_INT, ptr::null());
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteBuffers(1, &self.ebo);
        }
    }
}

/// Vertices are interleaved position (location 0) + normal (location 1).
fn upload_mesh(vertices: &[f32], indices: &[u32]) -> Mesh {
    let mut vao = 0;
    let mut vbo = 0;
    let mut ebo = 0;

    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::GenBuffers(1, &mut vbo);
        gl::GenBuffers(1, &mut ebo);

        gl::BindVertexArray(vao);

        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (vertices.len() * mem::size_of::<f32>()) as GLsizeiptr,
            vertices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            (indices.len() * mem::size_of::<u32>()) as GLsizeiptr,
            indices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );

        let stride = 6 * mem::size_of::<f32>() as GLsizei;
        gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, stride, ptr::null());
        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(
            1,
            3,
            gl::FLOAT,
            gl::FALSE,
            stride,
            (3 * mem::size_of::<f32>()) as *const _,
        );
        gl::EnableVertexAttribArray(1);

        gl::BindVertexArray(0);
    }

    Mesh {
        vao,
        vbo,
        ebo,
        index_count: indices.len() as i32,
    }
}

/// Unit cube centered on the origin, one flat normal per face.
pub fn create_cube() -> Mesh {
    #[rustfmt::skip]
    let vertices: [f32; 144] = [
        // +Z face
        -0.5, -0.5,  0.5,  0.0, 0.0, 1.0,
         0.5, -0.5,  0.5,  0.0, 0.0, 1.0,
         0.5,  0.5,  0.5,  0.0, 0.0, 1.0,
        -0.5,  0.5,  0.5,  0.0, 0.0, 1.0,
        // -Z face
         0.5, -0.5, -0.5,  0.0, 0.0, -1.0,
        -0.5, -0.5, -0.5,  0.0, 0.0, -1.0,
        -0.5,  0.5, -0.5,  0.0, 0.0, -1.0,
         0.5,  0.5, -0.5,  0.0, 0.0, -1.0,
        // +X face
         0.5, -0.5,  0.5,  1.0, 0.0, 0.0,
         0.5, -0.5, -0.5,  1.0, 0.0, 0.0,
         0.5,  0.5, -0.5,  1.0, 0.0, 0.0,
         0.5,  0.5,  0.5,  1.0, 0.0, 0.0,
        // -X face
        -0.5, -0.5, -0.5, -1.0, 0.0, 0.0,
        -0.5, -0.5,  0.5, -1.0, 0.0, 0.0,
        -0.5,  0.5,  0.5, -1.0, 0.0, 0.0,
        -0.5,  0.5, -0.5, -1.0, 0.0, 0.0,
        // +Y face
        -0.5,  0.5,  0.5,  0.0, 1.0, 0.0,
         0.5,  0.5,  0.5,  0.0, 1.0, 0.0,
         0.5,  0.5, -0.5,  0.0, 1.0, 0.0,
        -0.5,  0.5, -0.5,  0.0, 1.0, 0.0,
        // -Y face
        -0.5, -0.5, -0.5,  0.0, -1.0, 0.0,
         0.5, -0.5, -0.5,  0.0, -1.0, 0.0,
         0.5, -0.5,  0.5,  0.0, -1.0, 0.0,
        -0.5, -0.5,  0.5,  0.0, -1.0, 0.0,
    ];

    let mut indices = Vec::with_capacity(36);
    for face in 0..6u32 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    upload_mesh(&vertices, &indices)
}

/// Camera-facing quad for the hazard overlay, matching the original plate's
/// 4:3 footprint. Normal faces +Z (toward the eye).
pub fn create_overlay_quad() -> Mesh {
    #[rustfmt::skip]
    let vertices: [f32; 24] = [
        -1.0, -0.75, 0.0,  0.0, 0.0, 1.0,
         1.0, -0.75, 0.0,  0.0, 0.0, 1.0,
         1.0,  0.75, 0.0,  0.0, 0.0, 1.0,
        -1.0,  0.75, 0.0,  0.0, 0.0, 1.0,
    ];
    let indices = [0u32, 1, 2, 0, 2, 3];
    upload_mesh(&vertices, &indices)
}
