use gl::types::*;
use glam::{Mat4, Vec3};
use std::collections::HashMap;
use std::ffi::CString;
use std::ptr;

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("{stage} shader compile error: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("shader link error: {0}")]
    Link(String),
}

pub struct ShaderProgram {
    id: GLuint,
    uniform_cache: HashMap<String, GLint>,
}

impl ShaderProgram {
    pub fn from_sources(vert_src: &str, frag_src: &str) -> Result<Self, ShaderError> {
        unsafe {
            let vert = compile_shader(vert_src, gl::VERTEX_SHADER, "vertex")?;
            let frag = compile_shader(frag_src, gl::FRAGMENT_SHADER, "fragment")?;

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);
            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success == 0 {
                let log = info_log(program, true);
                gl::DeleteProgram(program);
                return Err(ShaderError::Link(log));
            }

            Ok(Self {
                id: program,
                uniform_cache: HashMap::new(),
            })
        }
    }

    pub fn bind(&self) {
        unsafe {
            gl::UseProgram(self.id);
        }
    }

    fn location(&mut self, name: &str) -> GLint {
        if let Some(&loc) = self.uniform_cache.get(name) {
            return loc;
        }
        let cname = CString::new(name).unwrap();
        let loc = unsafe { gl::GetUniformLocation(self.id, cname.as_ptr()) };
        self.uniform_cache.insert(name.to_string(), loc);
        loc
    }

    pub fn set_mat4(&mut self, name: &str, mat: &Mat4) {
        let loc = self.location(name);
        unsafe {
            gl::UniformMatrix4fv(loc, 1, gl::FALSE, mat.to_cols_array().as_ptr());
        }
    }

    pub fn set_vec3(&mut self, name: &str, v: Vec3) {
        let loc = self.location(name);
        unsafe {
            gl::Uniform3f(loc, v.x, v.y, v.z);
        }
    }

    pub fn set_vec4(&mut self, name: &str, v: [f32; 4]) {
        let loc = self.location(name);
        unsafe {
            gl::Uniform4f(loc, v[0], v[1], v[2], v[3]);
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

unsafe fn info_log(id: GLuint, program: bool) -> String {
    let mut len = 0;
    if program {
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    } else {
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }
    let mut buf = vec![0u8; len as usize];
    if program {
        gl::GetProgramInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    } else {
        gl::GetShaderInfoLog(id, len, ptr::null_mut(), buf.as_mut_ptr() as *mut _);
    }
    buf.pop(); // trailing null
    String::from_utf8_lossy(&buf).to_string()
}

unsafe fn compile_shader(
    src: &str,
    shader_type: GLenum,
    stage: &'static str,
) -> Result<GLuint, ShaderError> {
    let shader = gl::CreateShader(shader_type);
    let c_src = CString::new(src).unwrap();
    gl::ShaderSource(shader, 1, &c_src.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = 0;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success == 0 {
        let log = info_log(shader, false);
        gl::DeleteShader(shader);
        return Err(ShaderError::Compile { stage, log });
    }
    Ok(shader)
}
