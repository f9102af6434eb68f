use std::path::Path;

mod app;
mod config;
mod input;
mod renderer;

fn main() -> anyhow::Result<()>
{
  // Initialise the logger so wgpu validation errors and warnings appear in the console.
  // Set RUST_LOG=warn (default) or RUST_LOG=wgpu=debug for more verbose GPU output.

  if std::env::var_os("RUST_LOG").is_none()
  {
    std::env::set_var("RUST_LOG", "info,wgpu_hal=off,naga=warn");
  }
  env_logger::init();

  // Optional config file as the first argument
  let config_path = std::env::args().nth(1);
  let config = config::load(config_path.as_deref().map(Path::new))?;

  app::run(config)
}
