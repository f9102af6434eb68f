use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ──────────────────────────────────────────────────────────────
//   Pose — a serialisable camera spawn point
//
//   Angles are in degrees. Out-of-range values are normalised by
//   the camera constructor; only non-finite values are rejected.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pose
{
  pub position: Vec3,
  pub yaw: f32,
  pub pitch: f32,
  pub fov: f32,
}

#[derive(Debug, Error)]
pub enum PoseError
{
  #[error("pose field `{0}` is not finite")]
  NonFinite(&'static str),
}

impl Default for Pose
{
  fn default() -> Self
  {
    Self { position: Vec3::ZERO, yaw: 0.0, pitch: 0.0, fov: 45.0 }
  }
}

impl Pose
{
  pub fn validate(&self) -> Result<(), PoseError>
  {
    if !self.position.is_finite()
    {
      return Err(PoseError::NonFinite("position"));
    }
    if !self.yaw.is_finite()
    {
      return Err(PoseError::NonFinite("yaw"));
    }
    if !self.pitch.is_finite()
    {
      return Err(PoseError::NonFinite("pitch"));
    }
    if !self.fov.is_finite()
    {
      return Err(PoseError::NonFinite("fov"));
    }

    Ok(())
  }
}
