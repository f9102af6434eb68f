use std::sync::Arc;

use anyhow::Context;
use winit::window::Window;

use flycam_core::{CameraUniform, FlyCamera};

use crate::config::DemoConfig;

use super::cube;
use super::depth::{self, DEPTH_FORMAT};
use super::light::LightUniform;
use super::mesh::{GpuMesh, Vertex};
use super::model;
use super::texture::{create_texture_bind_group_layout, SceneTexture};

pub struct Renderer
{
  surface: wgpu::Surface<'static>,
  device: wgpu::Device,
  queue: wgpu::Queue,
  config: wgpu::SurfaceConfiguration,
  aspect: f32,

  depth_view: wgpu::TextureView,
  camera_buffer: wgpu::Buffer,
  scene_bind_group: wgpu::BindGroup,
  texture: SceneTexture,

  pipeline: wgpu::RenderPipeline,
  mesh: GpuMesh,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Renderer
{
  pub async fn new(
    window: Arc<Window>,
    camera: &FlyCamera,
    demo: &DemoConfig,
  ) -> anyhow::Result<Self>
  {
    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(window.clone())?;

    let adapter = request_adapter(&instance, &surface).await?;
    log::info!("adapter: {}", adapter.get_info().name);

    let (device, queue) = request_device(&adapter).await?;

    let config = configure_surface(&window, &surface, &adapter, &device);
    let depth_view = depth::create_depth_view(&device, config.width, config.height);
    let aspect = config.width as f32 / config.height as f32;

    let (camera_buffer, light_buffer, scene_bgl, scene_bind_group) =
      create_scene_resources(&device);

    let texture_bgl = create_texture_bind_group_layout(&device);
    let texture = match &demo.scene.texture
    {
      Some(path) => SceneTexture::from_file(&device, &queue, &texture_bgl, path)?,
      None => SceneTexture::white(&device, &queue, &texture_bgl),
    };

    // The configured model replaces the built-in cube
    let cpu_mesh = match &demo.scene.model
    {
      Some(path) => model::load_obj_mesh(path)?,
      None => cube::cube_mesh(),
    };
    let mesh = GpuMesh::upload(&device, "Scene", &cpu_mesh);

    // The light is static; upload its uniform once
    let light = demo.scene.light.build();
    queue.write_buffer(&light_buffer, 0, bytemuck::bytes_of(&LightUniform::from_light(&light)));

    // Initial camera uniform
    let uniform = CameraUniform::from_camera(camera, aspect);
    queue.write_buffer(&camera_buffer, 0, bytemuck::bytes_of(&uniform));

    let pipeline = create_scene_pipeline(&device, &config, &scene_bgl, &texture_bgl);

    Ok(Self {
      surface,
      device,
      queue,
      config,
      aspect,
      depth_view,
      camera_buffer,
      scene_bind_group,
      texture,
      pipeline,
      mesh,
    })
  }

  pub fn resize(&mut self, width: u32, height: u32)
  {
    self.config.width = width;
    self.config.height = height;
    self.surface.configure(&self.device, &self.config);

    self.depth_view = depth::create_depth_view(&self.device, width, height);
    self.aspect = width as f32 / height as f32;
  }

  pub fn update_camera(&mut self, camera: &FlyCamera)
  {
    let uniform = CameraUniform::from_camera(camera, self.aspect);
    self.queue.write_buffer(&self.camera_buffer, 0, bytemuck::bytes_of(&uniform));
  }

  pub fn render(&mut self)
  {
    // A lost/outdated surface gets one reconfigure-and-retry
    let frame = match self.surface.get_current_texture()
    {
      Ok(frame) => frame,
      Err(_) =>
      {
        self.surface.configure(&self.device, &self.config);

        match self.surface.get_current_texture()
        {
          Ok(frame) => frame,
          Err(err) =>
          {
            log::error!("failed to acquire frame: {err}");
            return;
          }
        }
      }
    };

    let view = frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let mut encoder = self
      .device
      .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });

    record_render_pass(
      &mut encoder,
      &view,
      &self.depth_view,
      &self.pipeline,
      &self.scene_bind_group,
      &self.texture.bind_group,
      &self.mesh,
    );

    self.queue.submit(Some(encoder.finish()));
    frame.present();
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Initialization Helpers
// ──────────────────────────────────────────────────────────────
//

async fn request_adapter(
  instance: &wgpu::Instance,
  surface: &wgpu::Surface<'_>,
) -> anyhow::Result<wgpu::Adapter>
{
  instance
    .request_adapter(&wgpu::RequestAdapterOptions {
      power_preference: wgpu::PowerPreference::HighPerformance,
      compatible_surface: Some(surface),
      force_fallback_adapter: false,
    })
    .await
    .context("no suitable GPU adapter found")
}

async fn request_device(adapter: &wgpu::Adapter) -> anyhow::Result<(wgpu::Device, wgpu::Queue)>
{
  adapter
    .request_device(&wgpu::DeviceDescriptor {
      label: Some("Flycam Device"),
      required_features: wgpu::Features::empty(),
      required_limits: wgpu::Limits::default(),
      ..Default::default()
    })
    .await
    .context("failed to create device")
}

fn configure_surface(
  window: &Window,
  surface: &wgpu::Surface<'_>,
  adapter: &wgpu::Adapter,
  device: &wgpu::Device,
) -> wgpu::SurfaceConfiguration
{
  let size = window.inner_size();
  let caps = surface.get_capabilities(adapter);
  let format = caps.formats[0];

  let config = wgpu::SurfaceConfiguration {
    usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
    format,
    width: size.width,
    height: size.height,
    present_mode: wgpu::PresentMode::Fifo,
    alpha_mode: wgpu::CompositeAlphaMode::Auto,
    view_formats: vec![],
    desired_maximum_frame_latency: 2,
  };

  surface.configure(device, &config);
  config
}

fn create_scene_resources(
  device: &wgpu::Device,
) -> (wgpu::Buffer, wgpu::Buffer, wgpu::BindGroupLayout, wgpu::BindGroup)
{
  let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
    label: Some("Camera Buffer"),
    size: std::mem::size_of::<CameraUniform>() as u64,
    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    mapped_at_creation: false,
  });

  let light_buffer = device.create_buffer(&wgpu::BufferDescriptor {
    label: Some("Light Buffer"),
    size: std::mem::size_of::<LightUniform>() as u64,
    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    mapped_at_creation: false,
  });

  let uniform_entry = |binding| wgpu::BindGroupLayoutEntry {
    binding,
    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
    ty: wgpu::BindingType::Buffer {
      ty: wgpu::BufferBindingType::Uniform,
      has_dynamic_offset: false,
      min_binding_size: None,
    },
    count: None,
  };

  let scene_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Scene BGL"),
    entries: &[uniform_entry(0), uniform_entry(1)],
  });

  let scene_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
    label: Some("Scene BG"),
    layout: &scene_bgl,
    entries: &[
      wgpu::BindGroupEntry { binding: 0, resource: camera_buffer.as_entire_binding() },
      wgpu::BindGroupEntry { binding: 1, resource: light_buffer.as_entire_binding() },
    ],
  });

  (camera_buffer, light_buffer, scene_bgl, scene_bind_group)
}

fn create_scene_pipeline(
  device: &wgpu::Device,
  config: &wgpu::SurfaceConfiguration,
  scene_bgl: &wgpu::BindGroupLayout,
  texture_bgl: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline
{
  let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
    label: Some("Scene Shader"),
    source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/scene.wgsl").into()),
  });

  let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
    label: Some("Scene Pipeline Layout"),
    bind_group_layouts: &[scene_bgl, texture_bgl],
    push_constant_ranges: &[],
  });

  device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
    label: Some("Scene Pipeline"),
    layout: Some(&layout),
    vertex: wgpu::VertexState {
      module: &shader,
      entry_point: Some("vs_main"),
      buffers: &[Vertex::layout()],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    },
    fragment: Some(wgpu::FragmentState {
      module: &shader,
      entry_point: Some("fs_main"),
      targets: &[Some(wgpu::ColorTargetState {
        format: config.format,
        blend: Some(wgpu::BlendState::REPLACE),
        write_mask: wgpu::ColorWrites::ALL,
      })],
      compilation_options: wgpu::PipelineCompilationOptions::default(),
    }),
    primitive: wgpu::PrimitiveState {
      topology: wgpu::PrimitiveTopology::TriangleList,
      strip_index_format: None,
      front_face: wgpu::FrontFace::Ccw,
      cull_mode: Some(wgpu::Face::Back),
      unclipped_depth: false,
      polygon_mode: wgpu::PolygonMode::Fill,
      conservative: false,
    },
    depth_stencil: Some(wgpu::DepthStencilState {
      format: DEPTH_FORMAT,
      depth_write_enabled: true,
      depth_compare: wgpu::CompareFunction::Less,
      stencil: wgpu::StencilState::default(),
      bias: wgpu::DepthBiasState::default(),
    }),
    multisample: wgpu::MultisampleState::default(),
    multiview: None,
    cache: None,
  })
}

//
// ──────────────────────────────────────────────────────────────
//   Render Pass
// ──────────────────────────────────────────────────────────────
//

fn record_render_pass(
  encoder: &mut wgpu::CommandEncoder,
  color_view: &wgpu::TextureView,
  depth_view: &wgpu::TextureView,
  pipeline: &wgpu::RenderPipeline,
  scene_bg: &wgpu::BindGroup,
  texture_bg: &wgpu::BindGroup,
  mesh: &GpuMesh,
)
{
  let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
    label: Some("Scene Render Pass"),
    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
      view: color_view,
      resolve_target: None,
      depth_slice: None,
      ops: wgpu::Operations {
        load: wgpu::LoadOp::Clear(wgpu::Color { r: 0.02, g: 0.02, b: 0.03, a: 1.0 }),
        store: wgpu::StoreOp::Store,
      },
    })],
    depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
      view: depth_view,
      depth_ops: Some(wgpu::Operations {
        load: wgpu::LoadOp::Clear(1.0),
        store: wgpu::StoreOp::Store,
      }),
      stencil_ops: None,
    }),
    occlusion_query_set: None,
    timestamp_writes: None,
  });

  pass.set_pipeline(pipeline);
  pass.set_bind_group(0, scene_bg, &[]);
  pass.set_bind_group(1, texture_bg, &[]);
  pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
  pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
  pass.draw_indexed(0..mesh.index_count, 0, 0..1);
}
