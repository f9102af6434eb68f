use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub mod camera_control;

//
// ──────────────────────────────────────────────────────────────
//   InputState
//
//   Mouse deltas and scroll accumulate over a frame and are
//   cleared by end_frame(); movement keys are level-triggered;
//   the camera toggle ("1" released) is edge-triggered and
//   consumed with take_toggle().
// ──────────────────────────────────────────────────────────────
//

// Touchpads report PixelDelta; convert to the same line units as wheels
const PIXELS_PER_LINE: f32 = 120.0;

pub struct InputState
{
  pub mouse_dx: f32,
  pub mouse_dy: f32,
  pub scroll: f32,

  forward_held: bool,
  back_held: bool,
  left_held: bool,
  right_held: bool,

  toggle_requested: bool,
}

impl InputState
{
  pub fn new() -> Self
  {
    Self {
      mouse_dx: 0.0,
      mouse_dy: 0.0,
      scroll: 0.0,

      forward_held: false,
      back_held: false,
      left_held: false,
      right_held: false,

      toggle_requested: false,
    }
  }

  pub fn handle_window_event(&mut self, event: &WindowEvent)
  {
    match event
    {
      WindowEvent::MouseWheel { delta, .. } => match delta
      {
        MouseScrollDelta::LineDelta(_, y) => self.scroll += *y,
        MouseScrollDelta::PixelDelta(p) => self.scroll += p.y as f32 / PIXELS_PER_LINE,
      },

      WindowEvent::KeyboardInput { event, .. } =>
      {
        if let PhysicalKey::Code(code) = event.physical_key
        {
          self.apply_key(code, event.state == ElementState::Pressed);
        }
      }

      _ =>
      {}
    }
  }

  /// Raw mouse deltas from DeviceEvent::MouseMotion.
  pub fn add_mouse_delta(&mut self, dx: f32, dy: f32)
  {
    self.mouse_dx += dx;
    self.mouse_dy += dy;
  }

  pub fn apply_key(&mut self, code: KeyCode, pressed: bool)
  {
    match code
    {
      KeyCode::KeyW => self.forward_held = pressed,
      KeyCode::KeyS => self.back_held = pressed,
      KeyCode::KeyA => self.left_held = pressed,
      KeyCode::KeyD => self.right_held = pressed,

      // Toggle on release, matching the original key-up behaviour
      KeyCode::Digit1 =>
      {
        if !pressed
        {
          self.toggle_requested = true;
        }
      }

      _ =>
      {}
    }
  }

  /// +1 right, -1 left, 0 when both or neither key is held.
  pub fn strafe_axis(&self) -> f32
  {
    (self.right_held as i8 - self.left_held as i8) as f32
  }

  /// +1 forward, -1 back, 0 when both or neither key is held.
  pub fn forward_axis(&self) -> f32
  {
    (self.forward_held as i8 - self.back_held as i8) as f32
  }

  /// Consume a pending activity toggle.
  pub fn take_toggle(&mut self) -> bool
  {
    std::mem::take(&mut self.toggle_requested)
  }

  pub fn end_frame(&mut self)
  {
    self.mouse_dx = 0.0;
    self.mouse_dy = 0.0;
    self.scroll = 0.0;
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

  #[test]
  fn axes_follow_held_keys()
  {
    let mut input = InputState::new();

    input.apply_key(KeyCode::KeyW, true);
    assert_eq!(input.forward_axis(), 1.0);

    input.apply_key(KeyCode::KeyS, true);
    assert_eq!(input.forward_axis(), 0.0); // opposing keys cancel

    input.apply_key(KeyCode::KeyW, false);
    assert_eq!(input.forward_axis(), -1.0);

    input.apply_key(KeyCode::KeyD, true);
    assert_eq!(input.strafe_axis(), 1.0);
  }

  #[test]
  fn toggle_fires_on_release_and_is_consumed()
  {
    let mut input = InputState::new();

    input.apply_key(KeyCode::Digit1, true);
    assert!(!input.take_toggle()); // press alone does nothing

    input.apply_key(KeyCode::Digit1, false);
    assert!(input.take_toggle());
    assert!(!input.take_toggle()); // consumed
  }

  #[test]
  fn mouse_deltas_accumulate_and_clear()
  {
    let mut input = InputState::new();

    input.add_mouse_delta(3.0, -2.0);
    input.add_mouse_delta(1.0, 1.0);
    assert_eq!(input.mouse_dx, 4.0);
    assert_eq!(input.mouse_dy, -1.0);

    input.end_frame();
    assert_eq!(input.mouse_dx, 0.0);
    assert_eq!(input.mouse_dy, 0.0);
  }

  #[test]
  fn end_frame_keeps_held_keys()
  {
    let mut input = InputState::new();

    input.apply_key(KeyCode::KeyA, true);
    input.end_frame();

    assert_eq!(input.strafe_axis(), -1.0);
  }
}
