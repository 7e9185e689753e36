//! Tesseract Lab
//!
//! Interactive 4D hypercube viewer. The geometry core is independent of any
//! windowing API:
//!
//! - **algebra / rotation**: six plane rotations composed into one 4x4 matrix
//! - **polytope**: the 16 vertices and 32 axis-tagged edges of the tesseract
//! - **projection**: 4D → 3D → 2D, each step perspective or orthographic
//! - **render**: depth-shaded wireframe onto any [`render::Surface`]
//! - **input / animation**: gesture reducer and per-frame rotation driver
//! - **view**: the serializable state record and the operations the UI drives
//!
//! `painter` and `equations_ui` connect the core to egui; `config` loads the
//! optional startup file.

pub mod algebra;
pub mod animation;
pub mod config;
pub mod equations_ui;
pub mod input;
pub mod painter;
pub mod polytope;
pub mod projection;
pub mod render;
pub mod rotation;
pub mod view;

pub use polytope::{build_tesseract, Edge, Tesseract};
pub use projection::{ProjectedVertex, ProjectionConfig};
pub use rotation::{AnglesPatch, RotationAngles};
pub use view::{TesseractView, ViewMode, ViewState};
