use glam::{Mat4, Vec2, Vec3};

use crate::pose::{Pose, PoseError};

//
// ──────────────────────────────────────────────────────────────
//   FlyCamera (free-fly, Y-up right-hand rule)
//
//   Coordinate system:
//     X → right
//     Y → up
//     Z → toward the viewer (yaw 0, pitch 0 looks down −Z)
//
//   Orientation is stored as (yaw, pitch) in degrees; the view
//   direction is derived spherical-to-Cartesian every frame.
// ──────────────────────────────────────────────────────────────
//

pub struct FlyCamera
{
  position: Vec3,
  yaw: f32,   // degrees, wrapped into (-180, 180]
  pitch: f32, // degrees, clamped to [-89, 89]

  // Local-space speed: x = strafe, y = forward. Set while a movement
  // key is held, zero otherwise.
  velocity: Vec2,

  fov: f32, // vertical field of view, degrees, clamped to [40, 80]
  active: bool,

  look_sensitivity: f32, // degrees per pixel of mouse motion
  zoom_sensitivity: f32, // degrees of fov per scroll line
}

//
// ──────────────────────────────────────────────────────────────
//   Constants
// ──────────────────────────────────────────────────────────────
//

pub const MOVE_SPEED: f32 = 5.0; // world units per second

const PITCH_MIN: f32 = -89.0;
const PITCH_MAX: f32 = 89.0;
const FOV_MIN: f32 = 40.0;
const FOV_MAX: f32 = 80.0;

const DEFAULT_FOV: f32 = 45.0;
const DEFAULT_LOOK_SENSITIVITY: f32 = 0.1;
const DEFAULT_ZOOM_SENSITIVITY: f32 = 1.5;

const ZNEAR: f32 = 0.1;
const ZFAR: f32 = 100.0;

const WORLD_UP: Vec3 = Vec3::Y;

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl FlyCamera
{
  /// Camera at the origin, looking down −Z, inactive.
  pub fn new() -> Self
  {
    Self {
      position: Vec3::ZERO,
      yaw: 0.0,
      pitch: 0.0,
      velocity: Vec2::ZERO,
      fov: DEFAULT_FOV,
      active: false,
      look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
      zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
    }
  }

  /// Camera at an explicit pose. Out-of-range yaw/pitch/fov are
  /// wrapped/clamped; non-finite components are rejected.
  pub fn from_pose(pose: Pose) -> Result<Self, PoseError>
  {
    pose.validate()?;

    let mut camera = Self::new();
    camera.position = pose.position;
    camera.yaw = wrap_yaw(pose.yaw);
    camera.pitch = pose.pitch.clamp(PITCH_MIN, PITCH_MAX);
    camera.fov = pose.fov.clamp(FOV_MIN, FOV_MAX);

    Ok(camera)
  }

  pub fn position(&self) -> Vec3
  {
    self.position
  }

  pub fn yaw(&self) -> f32
  {
    self.yaw
  }

  pub fn pitch(&self) -> f32
  {
    self.pitch
  }

  pub fn fov(&self) -> f32
  {
    self.fov
  }

  pub fn is_active(&self) -> bool
  {
    self.active
  }

  pub fn set_look_sensitivity(&mut self, look_sensitivity: f32)
  {
    self.look_sensitivity = look_sensitivity;
  }

  pub fn set_zoom_sensitivity(&mut self, zoom_sensitivity: f32)
  {
    self.zoom_sensitivity = zoom_sensitivity;
  }

  /// Enable or disable the camera. Deactivating zeroes the velocity so a
  /// key released while the camera is inert cannot leave it drifting.
  pub fn set_active(&mut self, active: bool)
  {
    self.active = active;

    if !active
    {
      self.velocity = Vec2::ZERO;
    }
  }

  /// Mouse deltas in pixels. Positive `dx` turns right, positive `dy`
  /// (cursor moving down the screen) pitches the camera down.
  pub fn apply_look(&mut self, dx: f32, dy: f32)
  {
    if !self.active
    {
      return;
    }

    self.yaw = wrap_yaw(self.yaw + self.look_sensitivity * dx);
    self.pitch = (self.pitch - self.look_sensitivity * dy).clamp(PITCH_MIN, PITCH_MAX);
  }

  /// Scroll delta in lines. Positive (scrolling up) narrows the fov.
  pub fn apply_zoom(&mut self, delta: f32)
  {
    if !self.active
    {
      return;
    }

    self.fov = (self.fov - self.zoom_sensitivity * delta).clamp(FOV_MIN, FOV_MAX);
  }

  /// Movement axes in {-1, 0, +1}: `strafe` +1 = right, `forward`
  /// +1 = toward the view direction. Scaled by [`MOVE_SPEED`].
  pub fn set_move_input(&mut self, strafe: f32, forward: f32)
  {
    if !self.active
    {
      return;
    }

    self.velocity = Vec2::new(strafe, forward) * MOVE_SPEED;
  }

  /// Integrate position along the current view direction.
  pub fn update(&mut self, dt: f32)
  {
    if !self.active
    {
      return;
    }

    let forward = self.forward();
    let right = forward.cross(WORLD_UP).normalize();

    self.position += dt * self.velocity.y * forward;
    self.position += dt * self.velocity.x * right;
  }

  /// Unit view direction derived from (yaw, pitch).
  pub fn forward(&self) -> Vec3
  {
    let yaw = self.yaw.to_radians();
    let pitch = self.pitch.to_radians();

    Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), -(pitch.cos() * yaw.cos()))
  }

  pub fn view_matrix(&self) -> Mat4
  {
    Mat4::look_at_rh(self.position, self.position + self.forward(), WORLD_UP)
  }

  pub fn projection_matrix(&self, aspect: f32) -> Mat4
  {
    Mat4::perspective_rh(self.fov.to_radians(), aspect, ZNEAR, ZFAR)
  }
}

impl Default for FlyCamera
{
  fn default() -> Self
  {
    Self::new()
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Angle helpers
// ──────────────────────────────────────────────────────────────
//

/// Wrap an angle in degrees into (-180, 180].
fn wrap_yaw(yaw: f32) -> f32
{
  180.0 - (180.0 - yaw).rem_euclid(360.0)
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

  const EPS: f32 = 1e-4;

  fn active_camera() -> FlyCamera
  {
    let mut camera = FlyCamera::new();
    camera.set_active(true);
    camera
  }

  #[test]
  fn defaults()
  {
    let camera = FlyCamera::new();

    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.yaw(), 0.0);
    assert_eq!(camera.pitch(), 0.0);
    assert_eq!(camera.fov(), 45.0);
    assert!(!camera.is_active());
  }

  #[test]
  fn yaw_wraps_into_half_open_range()
  {
    assert!((wrap_yaw(190.0) - (-170.0)).abs() < EPS);
    assert!((wrap_yaw(-190.0) - 170.0).abs() < EPS);
    assert!((wrap_yaw(540.0) - 180.0).abs() < EPS);
    assert_eq!(wrap_yaw(180.0), 180.0);
    assert_eq!(wrap_yaw(-180.0), 180.0); // -180 is excluded from the range
  }

  #[test]
  fn look_wraps_yaw_across_the_seam()
  {
    let mut camera = active_camera();

    // 0.1 deg/px sensitivity: 1790 px of motion = 179 degrees
    camera.apply_look(1790.0, 0.0);
    assert!((camera.yaw() - 179.0).abs() < EPS);

    // another 20 px pushes past +180 and wraps negative
    camera.apply_look(20.0, 0.0);
    assert!((camera.yaw() - (-179.0)).abs() < 1e-3);
  }

  #[test]
  fn pitch_clamps_at_89_degrees()
  {
    let mut camera = active_camera();

    camera.apply_look(0.0, -10_000.0); // look straight up and beyond
    assert_eq!(camera.pitch(), 89.0);

    camera.apply_look(0.0, 100_000.0); // and straight down
    assert_eq!(camera.pitch(), -89.0);
  }

  #[test]
  fn fov_clamps_to_zoom_range()
  {
    let mut camera = active_camera();

    camera.apply_zoom(100.0); // zoom far in
    assert_eq!(camera.fov(), 40.0);

    camera.apply_zoom(-100.0); // zoom far out
    assert_eq!(camera.fov(), 80.0);
  }

  #[test]
  fn zoom_in_narrows_fov()
  {
    let mut camera = active_camera();

    camera.apply_zoom(1.0);
    assert!((camera.fov() - 43.5).abs() < EPS); // 45 − 1.5 × 1
  }

  #[test]
  fn inactive_camera_ignores_input()
  {
    let mut camera = FlyCamera::new();

    camera.apply_look(100.0, 100.0);
    camera.apply_zoom(5.0);
    camera.set_move_input(1.0, 1.0);
    camera.update(1.0);

    assert_eq!(camera.position(), Vec3::ZERO);
    assert_eq!(camera.yaw(), 0.0);
    assert_eq!(camera.pitch(), 0.0);
    assert_eq!(camera.fov(), 45.0);
  }

  #[test]
  fn deactivating_zeroes_velocity()
  {
    let mut camera = active_camera();

    camera.set_move_input(0.0, 1.0);
    camera.set_active(false);
    camera.set_active(true);
    camera.update(1.0);

    assert_eq!(camera.position(), Vec3::ZERO);
  }

  #[test]
  fn forward_motion_integrates_along_view_direction()
  {
    let mut camera = active_camera();

    camera.set_move_input(0.0, 1.0);
    camera.update(1.0);

    // yaw 0, pitch 0 looks down −Z; one second at 5 u/s
    assert!((camera.position() - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);
  }

  #[test]
  fn strafe_motion_is_perpendicular_to_view()
  {
    let mut camera = active_camera();

    camera.set_move_input(1.0, 0.0);
    camera.update(0.5);

    assert!((camera.position() - Vec3::new(2.5, 0.0, 0.0)).length() < EPS);
  }

  #[test]
  fn zero_dt_leaves_position_unchanged()
  {
    let mut camera = active_camera();

    camera.set_move_input(1.0, 1.0);
    camera.update(0.0);

    assert_eq!(camera.position(), Vec3::ZERO);
  }

  #[test]
  fn forward_is_unit_length()
  {
    let mut camera = active_camera();

    for (dx, dy) in [(0.0, 0.0), (450.0, -300.0), (-1234.0, 880.0), (90.0, 890.0)]
    {
      camera.apply_look(dx, dy);
      assert!((camera.forward().length() - 1.0).abs() < EPS);
    }
  }

  #[test]
  fn strafe_direction_defined_at_pitch_clamp()
  {
    let mut camera = active_camera();

    camera.apply_look(0.0, -10_000.0); // pitch pinned at +89
    camera.set_move_input(1.0, 0.0);
    camera.update(1.0);

    // forward × up never degenerates because pitch stops short of ±90
    let moved = camera.position().length();
    assert!((moved - 5.0).abs() < EPS);
  }

  #[test]
  fn yaw_90_looks_along_positive_x()
  {
    let mut camera = active_camera();

    camera.apply_look(900.0, 0.0); // 90 degrees at 0.1 deg/px
    let forward = camera.forward();

    assert!((forward.x - 1.0).abs() < 1e-3);
    assert!(forward.y.abs() < 1e-3);
    assert!(forward.z.abs() < 1e-3);
  }

  #[test]
  fn view_matrix_is_invertible()
  {
    let camera = FlyCamera::new();
    assert!(camera.view_matrix().determinant().abs() > 1e-4);
  }

  #[test]
  fn from_pose_normalises_ranges()
  {
    let pose = Pose {
      position: Vec3::new(1.0, 2.0, 3.0),
      yaw: 270.0,
      pitch: -120.0,
      fov: 120.0,
    };

    let camera = FlyCamera::from_pose(pose).unwrap();

    assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
    assert!((camera.yaw() - (-90.0)).abs() < EPS);
    assert_eq!(camera.pitch(), -89.0);
    assert_eq!(camera.fov(), 80.0);
  }

  #[test]
  fn from_pose_rejects_non_finite()
  {
    let pose = Pose { yaw: f32::NAN, ..Pose::default() };
    assert!(FlyCamera::from_pose(pose).is_err());
  }
}
