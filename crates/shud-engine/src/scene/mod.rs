//! Scene model for the hero: one wireframe torus, a perspective camera, a
//! point light and an ambient fill light.
//!
//! Everything here is CPU-side. GPU resources are referenced through
//! [`GeometryId`] / [`MaterialId`] handles handed out by a renderer.

mod camera;
mod config;
mod graph;
mod handle;
mod light;
mod material;
mod mesh;
mod torus;

pub use camera::PerspectiveCamera;
pub use config::SceneConfig;
pub use graph::Scene;
pub use handle::{GeometryId, MaterialId};
pub use light::{AmbientLight, PointLight};
pub use material::WireframeMaterial;
pub use mesh::Mesh;
pub use torus::{TorusGeometry, WireframeGeometry};
