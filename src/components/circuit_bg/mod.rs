mod component;
mod config;
mod entropy;
mod render;
mod state;
mod types;

pub use component::CircuitBackground;
