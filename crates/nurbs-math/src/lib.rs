pub mod aabb;
pub mod hull;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;

pub type Point2 = DVec2;
