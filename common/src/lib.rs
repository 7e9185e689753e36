//! Shared windowing and presentation
//!
//! Window/GPU setup and the egui layer that paints UI output onto the
//! window surface.

pub mod egui_layer;
pub mod graphics;

pub use egui_layer::EguiLayer;
pub use graphics::{GraphicsContext, GraphicsError};
