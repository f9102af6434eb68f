use flycam_core::FlyCamera;

use crate::input::InputState;

//
// ──────────────────────────────────────────────────────────────
//   Input → camera mapping
//
//   Sensitivities live in the camera itself; this layer only
//   forwards accumulated deltas and the current movement axes.
//   The camera ignores everything while inactive.
// ──────────────────────────────────────────────────────────────
//

pub fn apply_input_to_camera(input: &InputState, camera: &mut FlyCamera)
{
  apply_look(input, camera);
  apply_zoom(input, camera);
  apply_movement(input, camera);
}

fn apply_look(input: &InputState, camera: &mut FlyCamera)
{
  if input.mouse_dx == 0.0 && input.mouse_dy == 0.0
  {
    return;
  }

  camera.apply_look(input.mouse_dx, input.mouse_dy);
}

fn apply_zoom(input: &InputState, camera: &mut FlyCamera)
{
  if input.scroll == 0.0
  {
    return;
  }

  camera.apply_zoom(input.scroll);
}

fn apply_movement(input: &InputState, camera: &mut FlyCamera)
{
  camera.set_move_input(input.strafe_axis(), input.forward_axis());
}

//
// ──────────────────────────────────────────────────────────────
//   Tests
// ──────────────────────────────────────────────────────────────
//
