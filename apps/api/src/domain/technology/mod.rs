// Technology domain module
// Technology record and its readiness value object

#![allow(clippy::module_inception)]

pub mod technology;
pub mod value_objects;

pub use technology::Technology;
pub use value_objects::TrlLevel;
