use wgpu::util::DeviceExt;

//
// ──────────────────────────────────────────────────────────────
//   Vertex layout: position, normal, uv — shared by the cube and
//   loaded models (matches scene.wgsl locations 0..2)
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex
{
  pub position: [f32; 3],
  pub normal: [f32; 3],
  pub uv: [f32; 2],
}

impl Vertex
{
  const ATTRIBS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3,  // position
    1 => Float32x3,  // normal
    2 => Float32x2,  // uv
  ];

  pub fn layout() -> wgpu::VertexBufferLayout<'static>
  {
    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<Vertex>() as u64,
      step_mode: wgpu::VertexStepMode::Vertex,
      attributes: &Self::ATTRIBS,
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   CPU / GPU mesh pair
// ──────────────────────────────────────────────────────────────
//

pub struct CpuMesh
{
  pub vertices: Vec<Vertex>,
  pub indices: Vec<u32>,
}

pub struct GpuMesh
{
  pub vertex_buffer: wgpu::Buffer,
  pub index_buffer: wgpu::Buffer,
  pub index_count: u32,
}

impl GpuMesh
{
  pub fn upload(device: &wgpu::Device, label: &str, mesh: &CpuMesh) -> Self
  {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some(&format!("{label} Vertex Buffer")),
      contents: bytemuck::cast_slice(&mesh.vertices),
      usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some(&format!("{label} Index Buffer")),
      contents: bytemuck::cast_slice(&mesh.indices),
      usage: wgpu::BufferUsages::INDEX,
    });

    Self { vertex_buffer, index_buffer, index_count: mesh.indices.len() as u32 }
  }
}
