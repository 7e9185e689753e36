//! [`Surface`] backed by an `egui::Painter`

use crate::render::{mix, Rgba, Surface};
use egui::{Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec2;
use std::f32::consts::TAU;

/// Resolution of the radial backdrop mesh
const RINGS: usize = 16;
const SEGMENTS: usize = 64;

/// Paints into an egui clip rect; surface coordinates are relative to its top-left corner
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, p: Vec2) -> Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

/// Convert a unit-range RGBA color to egui's 8-bit color
pub fn to_color32(c: Rgba) -> Color32 {
    let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(byte(c[0]), byte(c[1]), byte(c[2]), byte(c[3]))
}

impl Surface for PainterSurface<'_> {
    fn width(&self) -> f32 {
        self.rect.width()
    }

    fn height(&self) -> f32 {
        self.rect.height()
    }

    fn fill_background(&mut self, color: Rgba) {
        self.painter.rect_filled(self.rect, 0.0, to_color32(color));
    }

    fn fill_radial(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba) {
        self.painter
            .add(Shape::mesh(radial_mesh(self.to_screen(center), radius, inner, outer)));
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            Stroke::new(width, to_color32(color)),
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }
}

/// Concentric rings around `center`, vertex colors blended from `inner`
/// to `outer`; the painter's clip rect trims whatever overhangs
fn radial_mesh(center: Pos2, radius: f32, inner: Rgba, outer: Rgba) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, to_color32(inner));
    for ring in 1..=RINGS {
        let t = ring as f32 / RINGS as f32;
        let color = to_color32(mix(inner, outer, t));
        for seg in 0..SEGMENTS {
            let angle = seg as f32 / SEGMENTS as f32 * TAU;
            let offset = egui::vec2(angle.cos(), angle.sin()) * (radius * t);
            mesh.colored_vertex(center + offset, color);
        }
    }

    let index = |ring: usize, seg: usize| (1 + (ring - 1) * SEGMENTS + seg % SEGMENTS) as u32;
    for seg in 0..SEGMENTS {
        mesh.add_triangle(0, index(1, seg), index(1, seg + 1));
        for ring in 1..RINGS {
            let (a, b) = (index(ring, seg), index(ring, seg + 1));
            let (c, d) = (index(ring + 1, seg), index(ring + 1, seg + 1));
            mesh.add_triangle(a, b, c);
            mesh.add_triangle(b, d, c);
        }
    }
    mesh
}
