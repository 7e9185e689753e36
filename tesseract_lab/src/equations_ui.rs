//! Equations sidebar
//!
//! egui side panel listing the math behind the current view

use crate::projection::MIN_CAMERA_GAP;
use crate::view::ViewState;
use egui::{Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

pub const TESSERACT_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Plane Rotation (XW)",
        formula: "x' = x cos θ - w sin θ\nw' = x sin θ + w cos θ",
        description: "One of six planes: XY XZ XW YZ YW ZW",
    },
    Equation {
        name: "Combined Rotation",
        formula: "R = Rxy·Rxz·Rxw·Ryz·Ryw·Rzw",
        description: "Fixed order; 4D rotations do not commute",
    },
    Equation {
        name: "4D → 3D",
        formula: "P₃ = P₄ · d₄ / max(0.1, d₄ - w)",
        description: "Perspective along w",
    },
    Equation {
        name: "3D → 2D",
        formula: "P₂ = P₃ · d₃ / max(0.1, d₃ - z) · s",
        description: "Perspective along z, then screen scale",
    },
    Equation {
        name: "Tesseract",
        formula: "2⁴ = 16 vertices, 32 edges",
        description: "All (±1,±1,±1,±1); edges differ in one axis",
    },
];

pub const TESSERACT_VARIABLES: &[(&str, &str)] = &[
    ("x,y,z", "Spatial dimensions"),
    ("w", "Fourth dimension"),
    ("d₄, d₃", "Camera distances"),
    ("θ", "Rotation angle"),
    ("s", "Screen scale"),
];

/// Draw the sidebar, with a live readout of `state`
pub fn draw_equations_sidebar(ctx: &Context, title: &str, state: &ViewState) {
    egui::SidePanel::right("equations_panel")
        .min_width(260.0)
        .max_width(340.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            });

            ui.add_space(10.0);
            ui.separator();
            section(ui, "Equations");
            for eq in TESSERACT_EQUATIONS {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            ui.separator();
            section(ui, "Variables");
            for (symbol, meaning) in TESSERACT_VARIABLES {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(*symbol)
                            .color(Color32::from_rgb(150, 255, 150))
                            .font(FontId::new(14.0, FontFamily::Monospace)),
                    );
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }

            ui.add_space(10.0);
            ui.separator();
            section(ui, "Current");
            for line in readout(state) {
                ui.label(RichText::new(line).font(FontId::new(13.0, FontFamily::Monospace)));
            }
        });
}

fn section(ui: &mut egui::Ui, label: &str) {
    ui.add_space(5.0);
    ui.label(RichText::new(label).strong().color(Color32::from_rgb(255, 200, 100)));
    ui.add_space(5.0);
}

fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(16.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

/// Human-readable lines describing the pose and projection
pub fn readout(state: &ViewState) -> Vec<String> {
    let a = &state.angles;
    let p = &state.projection;
    let kind = |on: bool| if on { "persp" } else { "ortho" };
    vec![
        format!("xy {:+.2}  xz {:+.2}  yz {:+.2}", a.xy, a.xz, a.yz),
        format!("xw {:+.2}  yw {:+.2}  zw {:+.2}", a.xw, a.yw, a.zw),
        format!("4D {} d₄={:.2}", kind(p.perspective_4d), p.distance_4d),
        format!("3D {} d₃={:.2}", kind(p.perspective_3d), p.distance_3d),
        format!("s = {:.0}  gap ≥ {MIN_CAMERA_GAP}", p.scale),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_reflects_state() {
        let mut state = ViewState::default();
        state.enter_cube_in_cube();
        let lines = readout(&state);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "xy +0.00  xz +0.00  yz +0.00");
        assert!(lines[2].starts_with("4D persp d₄=3.00"));
        assert!(lines[3].starts_with("3D ortho"));
        assert!(lines[4].starts_with("s = 260"));
    }
}
