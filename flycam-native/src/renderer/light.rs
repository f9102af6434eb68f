use glam::Vec3;

//
// ──────────────────────────────────────────────────────────────
//   Light — directional / point / spot, Phong attribute set
//
//   Attenuation follows 1 / (constant + linear·d + quadratic·d²);
//   spot cone edges are stored as cosines so the shader compares
//   against a dot product directly.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind
{
  Directional = 0,
  Point = 1,
  Spot = 2,
}

#[derive(Debug, Clone, Copy)]
pub struct Light
{
  pub kind: LightKind,
  pub position: Vec3,
  pub direction: Vec3,

  pub diffuse: Vec3,
  pub specular: Vec3,
  pub ambient: Vec3,

  pub constant: f32,
  pub linear: f32,
  pub quadratic: f32,

  pub cos_cutoff_inner: f32,
  pub cos_cutoff_outer: f32,
}

impl Light
{
  pub fn directional(direction: Vec3, diffuse: Vec3, specular: Vec3, ambient: Vec3) -> Self
  {
    Self {
      kind: LightKind::Directional,
      position: Vec3::ZERO,
      direction,
      diffuse,
      specular,
      ambient,
      constant: 1.0,
      linear: 0.0,
      quadratic: 0.0,
      cos_cutoff_inner: 0.0,
      cos_cutoff_outer: 0.0,
    }
  }

  pub fn point(
    position: Vec3,
    diffuse: Vec3,
    specular: Vec3,
    ambient: Vec3,
    linear: f32,
    quadratic: f32,
  ) -> Self
  {
    Self {
      kind: LightKind::Point,
      position,
      direction: Vec3::ZERO,
      diffuse,
      specular,
      ambient,
      constant: 1.0,
      linear,
      quadratic,
      cos_cutoff_inner: 0.0,
      cos_cutoff_outer: 0.0,
    }
  }

  /// Cone angles in degrees, measured from the spot axis.
  pub fn spot(
    position: Vec3,
    direction: Vec3,
    inner_angle: f32,
    outer_angle: f32,
    diffuse: Vec3,
    specular: Vec3,
    ambient: Vec3,
    linear: f32,
    quadratic: f32,
  ) -> Self
  {
    Self {
      kind: LightKind::Spot,
      position,
      direction,
      diffuse,
      specular,
      ambient,
      constant: 1.0,
      linear,
      quadratic,
      cos_cutoff_inner: inner_angle.to_radians().cos(),
      cos_cutoff_outer: outer_angle.to_radians().cos(),
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Light Uniform (GPU side)
//
//   WGSL layout (scene.wgsl) — seven vec4 rows:
//     position_kind : xyz = position, w = kind
//     direction     : xyz
//     diffuse / specular / ambient : rgb
//     attenuation   : constant, linear, quadratic, cos_inner
//     cutoff        : x = cos_outer
//   Total: 112 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform
{
  pub position_kind: [f32; 4],
  pub direction: [f32; 4],
  pub diffuse: [f32; 4],
  pub specular: [f32; 4],
  pub ambient: [f32; 4],
  pub attenuation: [f32; 4],
  pub cutoff: [f32; 4],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<LightUniform>() == 112);

impl LightUniform
{
  pub fn from_light(light: &Light) -> Self
  {
    let p = light.position;
    let d = light.direction;

    Self {
      position_kind: [p.x, p.y, p.z, light.kind as i32 as f32],
      direction: [d.x, d.y, d.z, 0.0],
      diffuse: extend(light.diffuse),
      specular: extend(light.specular),
      ambient: extend(light.ambient),
      attenuation: [light.constant, light.linear, light.quadratic, light.cos_cutoff_inner],
      cutoff: [light.cos_cutoff_outer, 0.0, 0.0, 0.0],
    }
  }
}

fn extend(v: Vec3) -> [f32; 4]
{
  [v.x, v.y, v.z, 0.0]
}

//
// ──────────────────────────────────────────────────────────────
//   Tests
// ──────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn directional_light_has_no_attenuation()
  {
    let light =
      Light::directional(Vec3::new(0.0, -1.0, 0.0), Vec3::ONE, Vec3::ONE, Vec3::splat(0.1));

    assert_eq!(light.constant, 1.0);
    assert_eq!(light.linear, 0.0);
    assert_eq!(light.quadratic, 0.0);
  }

  #[test]
  fn spot_light_stores_cosine_cutoffs()
  {
    let light = Light::spot(
      Vec3::ZERO,
      Vec3::NEG_Y,
      12.5,
      17.5,
      Vec3::ONE,
      Vec3::ONE,
      Vec3::splat(0.1),
      0.09,
      0.032,
    );

    assert!((light.cos_cutoff_inner - 12.5_f32.to_radians().cos()).abs() < 1e-6);
    assert!((light.cos_cutoff_outer - 17.5_f32.to_radians().cos()).abs() < 1e-6);
    assert!(light.cos_cutoff_inner > light.cos_cutoff_outer); // narrower cone, larger cosine
  }

  #[test]
  fn uniform_encodes_kind_in_position_w()
  {
    let point = Light::point(Vec3::X, Vec3::ONE, Vec3::ONE, Vec3::ZERO, 0.09, 0.032);
    let uniform = LightUniform::from_light(&point);

    assert_eq!(uniform.position_kind, [1.0, 0.0, 0.0, 1.0]);

    let sun = Light::directional(Vec3::NEG_Y, Vec3::ONE, Vec3::ONE, Vec3::ZERO);
    assert_eq!(LightUniform::from_light(&sun).position_kind[3], 0.0);
  }

  #[test]
  fn uniform_packs_attenuation_row()
  {
    let light = Light::point(Vec3::ZERO, Vec3::ONE, Vec3::ONE, Vec3::ZERO, 0.09, 0.032);
    let uniform = LightUniform::from_light(&light);

    assert_eq!(uniform.attenuation[0], 1.0);
    assert_eq!(uniform.attenuation[1], 0.09);
    assert_eq!(uniform.attenuation[2], 0.032);
  }
}
