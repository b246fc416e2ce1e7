//! Outbound adapters implementing domain ports.

pub mod render;

pub use render::MiniJinjaRenderer;
