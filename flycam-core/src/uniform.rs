use crate::camera::FlyCamera;

//
// ──────────────────────────────────────────────────────────────
//   Camera Uniform (GPU side)
//
//   WGSL layout (scene.wgsl):
//     view    : mat4x4<f32>   → 64 bytes
//     proj    : mat4x4<f32>   → 64 bytes
//     eye_pos : vec3<f32>     → 12 bytes (+4 pad)
//   Total: 144 bytes
//
//   View and projection are uploaded separately (the fragment
//   shader needs the eye position for specular highlights, and
//   keeping the matrices apart matches how the shader consumes
//   them).
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform
{
  pub view: [[f32; 4]; 4],
  pub proj: [[f32; 4]; 4],
  pub eye_pos: [f32; 3],
  pub _pad: f32,
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 144);

impl CameraUniform
{
  pub fn from_camera(camera: &FlyCamera, aspect: f32) -> Self
  {
    Self {
      view: camera.view_matrix().to_cols_array_2d(),
      proj: camera.projection_matrix(aspect).to_cols_array_2d(),
      eye_pos: camera.position().to_array(),
      _pad: 0.0,
    }
  }
}
