use std::sync::Arc;
use std::time::Instant;

use winit::{
  application::ApplicationHandler,
  event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  keyboard::{KeyCode, PhysicalKey},
  window::{CursorGrabMode, Window, WindowId},
};

use flycam_core::FlyCamera;

use crate::config::DemoConfig;
use crate::input::{camera_control, InputState};
use crate::renderer::Renderer;

pub fn run(config: DemoConfig) -> anyhow::Result<()>
{
  let event_loop = EventLoop::new()?;
  let mut app = FlyCamApp::new(config)?;

  event_loop.run_app(&mut app)?;

  // Surface initialisation failures inside `resumed` end the loop;
  // report them here.
  match app.init_error.take()
  {
    Some(err) => Err(err),
    None => Ok(()),
  }
}

struct FlyCamApp
{
  config: DemoConfig,
  window: Option<Arc<Window>>,
  renderer: Option<Renderer>,
  camera: FlyCamera,
  input: InputState,
  last_frame: Instant,
  init_error: Option<anyhow::Error>,
}

impl FlyCamApp
{
  fn new(config: DemoConfig) -> anyhow::Result<Self>
  {
    let mut camera = FlyCamera::from_pose(config.camera.pose)?;
    camera.set_look_sensitivity(config.camera.look_sensitivity);
    camera.set_zoom_sensitivity(config.camera.zoom_sensitivity);

    Ok(Self {
      config,
      window: None,
      renderer: None,
      camera,
      input: InputState::new(),
      last_frame: Instant::now(),
      init_error: None,
    })
  }

  fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()>
  {
    if self.window.is_some()
    {
      return Ok(());
    }

    let attrs = Window::default_attributes()
      .with_title(self.config.window.title.clone())
      .with_inner_size(winit::dpi::PhysicalSize::new(
        self.config.window.width,
        self.config.window.height,
      ));

    let window = Arc::new(event_loop.create_window(attrs)?);

    let renderer =
      pollster::block_on(Renderer::new(window.clone(), &self.camera, &self.config))?;

    self.window = Some(window);
    self.renderer = Some(renderer);
    self.last_frame = Instant::now();

    Ok(())
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w,
      _ => return,
    };

    self.input.handle_window_event(&event);

    match event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
      }

      WindowEvent::KeyboardInput {
        event:
          KeyEvent {
            physical_key: PhysicalKey::Code(KeyCode::Escape),
            state: ElementState::Released,
            ..
          },
        ..
      } =>
      {
        elwt.exit();
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        if let Some(renderer) = &mut self.renderer
        {
          renderer.resize(size.width, size.height);
          renderer.update_camera(&self.camera);
        }

        window.request_redraw();
      }

      _ =>
      {}
    }
  }

  /// Toggle whether input drives the camera, capturing and hiding the
  /// cursor while it does.
  fn toggle_camera(&mut self)
  {
    let active = !self.camera.is_active();
    self.camera.set_active(active);

    if let Some(window) = &self.window
    {
      set_cursor_captured(window, active);
    }

    log::info!("camera {}", if active { "active" } else { "inactive" });
  }

  fn frame(&mut self)
  {
    let dt = self.last_frame.elapsed().as_secs_f32();
    self.last_frame = Instant::now();

    if self.input.take_toggle()
    {
      self.toggle_camera();
    }

    camera_control::apply_input_to_camera(&self.input, &mut self.camera);
    self.camera.update(dt);

    if let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer)
    {
      renderer.update_camera(&self.camera);
      renderer.render();
      window.request_redraw();
    }

    self.input.end_frame();
  }
}

impl ApplicationHandler for FlyCamApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    // Poll: the camera integrates motion every frame, so keep rendering
    event_loop.set_control_flow(ControlFlow::Poll);

    if let Err(err) = self.init_window_and_renderer(event_loop)
    {
      log::error!("initialisation failed: {err:#}");
      self.init_error = Some(err);
      event_loop.exit();
    }
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent)
  {
    // Raw deltas keep arriving while the cursor is grabbed, unlike
    // CursorMoved positions
    if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event
    {
      self.input.add_mouse_delta(dx as f32, dy as f32);
    }
  }

  fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop)
  {
    self.frame();
  }
}

fn set_cursor_captured(window: &Window, captured: bool)
{
  let result = if captured
  {
    window
      .set_cursor_grab(CursorGrabMode::Locked)
      .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
  }
  else
  {
    window.set_cursor_grab(CursorGrabMode::None)
  };

  if let Err(err) = result
  {
    log::warn!("cursor grab change failed: {err}");
  }

  window.set_cursor_visible(!captured);
}
