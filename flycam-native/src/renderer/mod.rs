mod core;
mod cube;
mod depth;
mod mesh;
mod model;
mod texture;

pub mod light;

pub use self::core::Renderer;
