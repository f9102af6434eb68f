use std::path::{Path, PathBuf};

use anyhow::Context;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use flycam_core::Pose;

use crate::renderer::light::Light;

//
// ──────────────────────────────────────────────────────────────
//   DemoConfig — optional JSON file, first CLI argument
//
//   Every field has a default so an empty file (or no file at
//   all) produces a runnable demo: 800×600 window, camera a few
//   units back from a textured cube under a white point light.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig
{
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub scene: SceneConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig
{
  pub title: String,
  pub width: u32,
  pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig
{
  pub pose: Pose,
  pub look_sensitivity: f32,
  pub zoom_sensitivity: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig
{
  /// Base-colour texture; a 1×1 white texture is used when absent.
  pub texture: Option<PathBuf>,

  /// Wavefront OBJ to draw instead of the built-in cube.
  pub model: Option<PathBuf>,

  pub light: LightConfig,
}

//
// ──────────────────────────────────────────────────────────────
//   Light configuration
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKindConfig
{
  Directional,
  Point,
  Spot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightConfig
{
  pub kind: LightKindConfig,
  pub position: [f32; 3],
  pub direction: [f32; 3],
  pub diffuse: [f32; 3],
  pub specular: [f32; 3],
  pub ambient: [f32; 3],
  pub linear: f32,
  pub quadratic: f32,

  /// Spot cone angles in degrees (ignored for other kinds).
  pub inner_angle: f32,
  pub outer_angle: f32,
}

//
// ──────────────────────────────────────────────────────────────
//   Defaults
// ──────────────────────────────────────────────────────────────
//

impl Default for WindowConfig
{
  fn default() -> Self
  {
    Self { title: "flycam".to_string(), width: 800, height: 600 }
  }
}

impl Default for CameraConfig
{
  fn default() -> Self
  {
    // Spawn a few units up the Z axis so the scene mesh (which sits at
    // the origin) starts in view rather than around the eye
    let pose = Pose { position: Vec3::new(0.0, 0.0, 3.0), ..Pose::default() };

    Self { pose, look_sensitivity: 0.1, zoom_sensitivity: 1.5 }
  }
}

impl Default for LightConfig
{
  fn default() -> Self
  {
    Self {
      kind: LightKindConfig::Point,
      position: [1.2, 1.0, 2.0],
      direction: [0.0, -1.0, 0.0],
      diffuse: [1.0, 1.0, 1.0],
      specular: [1.0, 1.0, 1.0],
      ambient: [0.1, 0.1, 0.1],
      linear: 0.09,
      quadratic: 0.032,
      inner_angle: 12.5,
      outer_angle: 17.5,
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Loading
// ──────────────────────────────────────────────────────────────
//

pub fn load(path: Option<&Path>) -> anyhow::Result<DemoConfig>
{
  let path = match path
  {
    Some(p) => p,
    None => return Ok(DemoConfig::default()),
  };

  let text = std::fs::read_to_string(path)
    .with_context(|| format!("read config: {}", path.display()))?;

  let config: DemoConfig = serde_json::from_str(&text)
    .with_context(|| format!("parse config: {}", path.display()))?;

  config.validate().with_context(|| format!("invalid config: {}", path.display()))?;

  Ok(config)
}

impl DemoConfig
{
  /// Zero-sized surfaces fail wgpu validation; reject them up front.
  pub fn validate(&self) -> anyhow::Result<()>
  {
    if self.window.width == 0 || self.window.height == 0
    {
      anyhow::bail!(
        "window dimensions must be non-zero (got {}×{})",
        self.window.width,
        self.window.height
      );
    }

    Ok(())
  }
}

impl LightConfig
{
  pub fn build(&self) -> Light
  {
    let diffuse = Vec3::from(self.diffuse);
    let specular = Vec3::from(self.specular);
    let ambient = Vec3::from(self.ambient);

    match self.kind
    {
      LightKindConfig::Directional =>
      {
        Light::directional(Vec3::from(self.direction), diffuse, specular, ambient)
      }

      LightKindConfig::Point => Light::point(
        Vec3::from(self.position),
        diffuse,
        specular,
        ambient,
        self.linear,
        self.quadratic,
      ),

      LightKindConfig::Spot => Light::spot(
        Vec3::from(self.position),
        Vec3::from(self.direction),
        self.inner_angle,
        self.outer_angle,
        diffuse,
        specular,
        ambient,
        self.linear,
        self.quadratic,
      ),
    }
  }
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
  use crate::renderer::light::LightKind;

  #[test]
  fn empty_json_yields_defaults()
  {
    let config: DemoConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.camera.look_sensitivity, 0.1);
    assert_eq!(config.camera.pose.position, Vec3::new(0.0, 0.0, 3.0));
    assert!(config.scene.texture.is_none());
    assert!(config.scene.model.is_none());
  }

  #[test]
  fn partial_json_overrides_selected_fields()
  {
    let text = r#"
    {
      "window": { "title": "demo", "width": 1280, "height": 720 },
      "camera": { "pose": { "yaw": 90.0 } },
      "scene": { "light": { "kind": "directional", "direction": [0.0, -1.0, -1.0] } }
    }"#;

    let config: DemoConfig = serde_json::from_str(text).unwrap();

    assert_eq!(config.window.title, "demo");
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.camera.pose.yaw, 90.0);
    assert_eq!(config.camera.pose.fov, 45.0); // untouched default
    assert_eq!(config.scene.light.kind, LightKindConfig::Directional);
  }

  #[test]
  fn default_config_is_valid()
  {
    assert!(DemoConfig::default().validate().is_ok());
  }

  #[test]
  fn zero_window_dimensions_are_rejected()
  {
    let config: DemoConfig =
      serde_json::from_str(r#"{ "window": { "width": 0 } }"#).unwrap();

    assert!(config.validate().is_err());
  }

  #[test]
  fn light_config_builds_matching_kind()
  {
    let mut config = LightConfig::default();

    assert_eq!(config.build().kind, LightKind::Point);

    config.kind = LightKindConfig::Spot;
    assert_eq!(config.build().kind, LightKind::Spot);
  }
}
