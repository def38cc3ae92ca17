pub mod brdf;
pub mod core;
pub mod integrator;
pub mod model;
pub mod param;
pub mod processor;

#[macro_use]
extern crate lazy_static;
