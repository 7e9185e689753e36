//! Wireframe renderer for the projected tesseract
//!
//! Drawing goes through the [`Surface`] trait so the same code paints into
//! egui (see `painter`) and into a [`RecordingSurface`] in tests.

use crate::polytope::Tesseract;
use crate::projection::ProjectedVertex;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color with components in [0, 1]
pub type Rgba = [f32; 4];

/// Alpha applied to every edge stroke
pub const EDGE_ALPHA: f32 = 0.95;

/// Center of the backdrop glow, as a fraction of the surface size
pub const GLOW_CENTER: Vec2 = Vec2::new(0.7, 0.3);

/// Anything a wireframe can be painted onto
pub trait Surface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn fill_background(&mut self, color: Rgba);
    /// Disk shading from `inner` at `center` to `outer` at `radius`
    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Colors used by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Indexed by edge axis, modulo length
    pub edges: Vec<Rgba>,
    pub vertex: Rgba,
    pub background: Rgba,
    /// Backdrop color at the glow center, fading out to `background`
    #[serde(default = "default_glow")]
    pub glow: Rgba,
}

fn default_glow() -> Rgba {
    Palette::dark().glow
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            edges: vec![
                hex(0x7C83FF),
                hex(0x2DD4BF),
                hex(0xFFB74D),
                hex(0x81C784),
            ],
            vertex: [1.0, 1.0, 1.0, 1.0],
            background: hex(0x0E1116),
            glow: hex(0x0B0D12),
        }
    }

    pub fn light() -> Self {
        Self {
            edges: vec![
                hex(0x7C83FF),
                hex(0x2DD4BF),
                hex(0xE65100),
                hex(0x1B5E20),
            ],
            vertex: hex(0x111111),
            background: hex(0xF7F7FB),
            glow: hex(0xF7F7FB),
        }
    }

    /// Stroke color for an edge spanning `axis`
    pub fn edge_color(&self, axis: usize) -> Rgba {
        if self.edges.is_empty() {
            return self.vertex;
        }
        self.edges[axis % self.edges.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

/// Opaque color from `0xRRGGBB`
pub fn hex(rgb: u32) -> Rgba {
    let channel = |shift: u32| ((rgb >> shift) & 0xFF) as f32 / 255.0;
    [channel(16), channel(8), channel(0), 1.0]
}

/// Linear blend of `a` toward `b`
pub fn mix(a: Rgba, b: Rgba, t: f32) -> Rgba {
    std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t)
}

/// Visual parameters of the wireframe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    pub edge_thickness: f32,
    pub vertex_size: f32,
    pub show_vertices: bool,
    pub palette: Palette,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            edge_thickness: 2.2,
            vertex_size: 3.2,
            show_vertices: true,
            palette: Palette::dark(),
        }
    }
}

/// `1 - clamp(v, -1, 1)`: 2 at the nearest, 0 at the farthest
#[inline]
pub fn depth_factor(v: f32) -> f32 {
    1.0 - v.clamp(-1.0, 1.0)
}

/// Stroke width for an edge whose endpoints have depths `za` and `zb`
pub fn edge_width(thickness: f32, za: f32, zb: f32) -> f32 {
    thickness + depth_factor((za + zb) * 0.25) * thickness
}

/// Marker radius for a vertex at depth `z`
pub fn vertex_radius(size: f32, z: f32) -> f32 {
    size + depth_factor(z * 0.25) * (size * 0.8)
}

/// Paint the background, every edge and (optionally) every vertex
pub fn draw<S: Surface + ?Sized>(
    surface: &mut S,
    tesseract: &Tesseract,
    projected: &[ProjectedVertex],
    style: &Style,
) {
    let palette = &style.palette;
    let size = Vec2::new(surface.width(), surface.height());
    surface.fill_background(palette.background);
    surface.fill_radial(
        GLOW_CENTER * size,
        size.max_element(),
        palette.glow,
        palette.background,
    );

    for edge in &tesseract.edges {
        let (pa, pb) = (projected[edge.a], projected[edge.b]);
        let mut color = style.palette.edge_color(edge.axis);
        color[3] *= EDGE_ALPHA;
        surface.stroke_line(
            pa.screen,
            pb.screen,
            edge_width(style.edge_thickness, pa.depth, pb.depth),
            color,
        );
    }

    if style.show_vertices {
        for p in projected {
            surface.fill_circle(
                p.screen,
                vertex_radius(style.vertex_size, p.depth),
                style.palette.vertex,
            );
        }
    }
}

/// A single recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Background(Rgba),
    Radial { center: Vec2, radius: f32, inner: Rgba, outer: Rgba },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgba },
    Circle { center: Vec2, radius: f32, color: Rgba },
}

/// In-memory surface that records calls instead of rasterizing them
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Line { .. }))
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter(|op| matches!(op, DrawOp::Circle { .. }))
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn fill_background(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Background(color));
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.ops.push(DrawOp::Radial {
            center,
            radius,
            inner,
            outer,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line { from, to, width, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle { center, radius, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polytope::build_tesseract;
    use crate::projection::{project, ProjectionConfig};
    use crate::rotation::RotationAngles;

    fn render(style: &Style) -> RecordingSurface {
        let tesseract = build_tesseract();
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let projected = project(
            &tesseract.vertices,
            &RotationAngles::DEFAULT_POSE.matrix(),
            &ProjectionConfig::default(),
            surface.width(),
            surface.height(),
        );
        draw(&mut surface, &tesseract, &projected, style);
        surface
    }

    #[test]
    fn hex_parses_channels() {
        assert_eq!(hex(0xFF0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(hex(0x00FF00)[1], 1.0);
        assert_eq!(hex(0x000000), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn edge_color_wraps_around_palette() {
        let palette = Palette::dark();
        assert_eq!(palette.edge_color(4), palette.edge_color(0));
        assert_eq!(palette.edge_color(3), palette.edges[3]);
    }

    #[test]
    fn depth_modulation_is_clamped() {
        assert_eq!(edge_width(2.0, 0.0, 0.0), 4.0);
        // clamped at both ends
        assert_eq!(edge_width(2.0, -10.0, -10.0), 6.0);
        assert_eq!(edge_width(2.0, 10.0, 10.0), 2.0);
        assert_eq!(vertex_radius(3.0, 100.0), 3.0);
        assert!((vertex_radius(3.0, -100.0) - 7.8).abs() < 1e-6);
    }

    #[test]
    fn nearer_edges_are_thicker() {
        // more negative depth is nearer in this convention
        assert!(edge_width(2.2, -0.5, -0.5) > edge_width(2.2, 0.5, 0.5));
    }

    #[test]
    fn draws_background_edges_then_vertices() {
        let style = Style::default();
        let surface = render(&style);
        assert_eq!(surface.ops[0], DrawOp::Background(style.palette.background));
        assert!(matches!(surface.ops[1], DrawOp::Radial { .. }));
        assert_eq!(surface.lines().count(), 32);
        assert_eq!(surface.circles().count(), 16);
        let first_circle = surface
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Circle { .. }))
            .unwrap();
        assert_eq!(first_circle, 34);
    }

    #[test]
    fn backdrop_glow_sits_upper_right_and_covers_the_surface() {
        let style = Style::default();
        let surface = render(&style);
        let DrawOp::Radial {
            center,
            radius,
            inner,
            outer,
        } = surface.ops[1]
        else {
            panic!("expected backdrop after background, got {:?}", surface.ops[1]);
        };
        assert_eq!(center, Vec2::new(560.0, 180.0));
        assert_eq!(radius, 800.0);
        assert_eq!(inner, style.palette.glow);
        assert_eq!(outer, style.palette.background);
        let corners = [
            Vec2::ZERO,
            Vec2::new(800.0, 0.0),
            Vec2::new(0.0, 600.0),
            Vec2::new(800.0, 600.0),
        ];
        for corner in corners {
            assert!(corner.distance(center) <= radius);
        }
    }

    #[test]
    fn mix_blends_linearly() {
        let (a, b) = ([0.0, 0.2, 1.0, 1.0], [1.0, 0.4, 0.0, 1.0]);
        assert_eq!(mix(a, b, 0.0), a);
        assert_eq!(mix(a, b, 1.0), b);
        let mid = mix(a, b, 0.5);
        assert!((mid[0] - 0.5).abs() < 1e-6 && (mid[1] - 0.3).abs() < 1e-6);
    }

    #[test]
    fn palette_without_glow_deserializes() {
        let json = r#"{ "edges": [[1,0,0,1]], "vertex": [1,1,1,1], "background": [0,0,0,1] }"#;
        let palette: Palette = serde_json::from_str(json).unwrap();
        assert_eq!(palette.glow, Palette::dark().glow);
    }

    #[test]
    fn hidden_vertices_are_not_drawn() {
        let style = Style {
            show_vertices: false,
            ..Style::default()
        };
        let surface = render(&style);
        assert_eq!(surface.circles().count(), 0);
        assert_eq!(surface.lines().count(), 32);
    }

    #[test]
    fn edge_strokes_use_axis_color_with_alpha() {
        let style = Style::default();
        let tesseract = build_tesseract();
        let surface = render(&style);
        for (edge, op) in tesseract.edges.iter().zip(surface.lines()) {
            let DrawOp::Line { color, .. } = op else {
                unreachable!()
            };
            let expected = style.palette.edges[edge.axis];
            assert_eq!(color[..3], expected[..3]);
            assert!((color[3] - EDGE_ALPHA).abs() < 1e-6);
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let style = Style::default();
        assert_eq!(render(&style).ops, render(&style).ops);
    }
}
