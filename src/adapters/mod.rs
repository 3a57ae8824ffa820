// Adapters layer: concrete implementations of the domain ports.

pub mod generator;
pub mod render;

pub use generator::HttpTextGenerator;
pub use render::{JsonRenderer, TextRenderer};
