use std::path::Path;

use anyhow::Context;

//
// ──────────────────────────────────────────────────────────────
//   Base-colour texture: decode with `image`, upload as sRGB,
//   repeat-wrap linear sampling
// ──────────────────────────────────────────────────────────────
//

pub struct SceneTexture
{
  pub bind_group: wgpu::BindGroup,
}

pub fn create_texture_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout
{
  device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
    label: Some("Texture BGL"),
    entries: &[
      wgpu::BindGroupLayoutEntry {
        binding: 0,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
          sample_type: wgpu::TextureSampleType::Float { filterable: true },
          view_dimension: wgpu::TextureViewDimension::D2,
          multisampled: false,
        },
        count: None,
      },
      wgpu::BindGroupLayoutEntry {
        binding: 1,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
      },
    ],
  })
}

impl SceneTexture
{
  pub fn from_file(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    path: &Path,
  ) -> anyhow::Result<Self>
  {
    let image = image::open(path)
      .with_context(|| format!("load texture: {}", path.display()))?
      .to_rgba8();

    let (width, height) = image.dimensions();
    log::info!("texture {} ({width}×{height})", path.display());

    Ok(Self::from_rgba(device, queue, layout, width, height, &image))
  }

  /// 1×1 white fallback so the scene pipeline always has something to sample.
  pub fn white(device: &wgpu::Device, queue: &wgpu::Queue, layout: &wgpu::BindGroupLayout)
    -> Self
  {
    Self::from_rgba(device, queue, layout, 1, 1, &[255, 255, 255, 255])
  }

  fn from_rgba(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    width: u32,
    height: u32,
    pixels: &[u8],
  ) -> Self
  {
    let size = wgpu::Extent3d { width, height, depth_or_array_layers: 1 };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
      label: Some("Scene Texture"),
      size,
      mip_level_count: 1,
      sample_count: 1,
      dimension: wgpu::TextureDimension::D2,
      format: wgpu::TextureFormat::Rgba8UnormSrgb,
      usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
      view_formats: &[],
    });

    queue.write_texture(
      wgpu::TexelCopyTextureInfo {
        texture: &texture,
        mip_level: 0,
        origin: wgpu::Origin3d::ZERO,
        aspect: wgpu::TextureAspect::All,
      },
      pixels,
      wgpu::TexelCopyBufferLayout {
        offset: 0,
        bytes_per_row: Some(4 * width),
        rows_per_image: Some(height),
      },
      size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
      label: Some("Scene Sampler"),
      address_mode_u: wgpu::AddressMode::Repeat,
      address_mode_v: wgpu::AddressMode::Repeat,
      address_mode_w: wgpu::AddressMode::Repeat,
      mag_filter: wgpu::FilterMode::Linear,
      min_filter: wgpu::FilterMode::Linear,
      mipmap_filter: wgpu::FilterMode::Linear,
      ..Default::default()
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
      label: Some("Texture BG"),
      layout,
      entries: &[
        wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(&view) },
        wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::Sampler(&sampler) },
      ],
    });

    Self { bind_group }
  }
}
