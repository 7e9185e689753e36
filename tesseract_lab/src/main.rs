//! Tesseract Lab: interactive 4D hypercube viewer
//!
//! Controls:
//! - Drag: rotate XY / YZ
//! - Alt/Ctrl + drag: rotate XW / YW
//! - Shift + drag: rotate XZ / YZ
//! - Scroll: zoom
//! - Space: toggle auto-rotation
//! - R: reset pose
//! - F: fit to view
//! - C: cube-in-cube mode
//! - S: standard mode
//!
//! Pass `--config <file.json>` to override startup settings.

use common::{EguiLayer, GraphicsContext};
use egui::{Color32, RichText};
use std::process::ExitCode;
use std::time::Instant;
use tesseract_lab::animation::{FrameClock, FrameUpdate};
use tesseract_lab::config::{ranges, LabConfig};
use tesseract_lab::equations_ui::draw_equations_sidebar;
use tesseract_lab::input::{GestureEvent, Modifier};
use tesseract_lab::painter::PainterSurface;
use tesseract_lab::render::{Palette, Rgba};
use tesseract_lab::{TesseractView, ViewMode};
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

/// UI-only state that never reaches the geometry core
struct Chrome {
    /// Size of the drawing area on the previous frame, for fit-to-view
    canvas: egui::Vec2,
    dark: bool,
}

struct App {
    gfx: GraphicsContext,
    egui: EguiLayer,
    view: TesseractView,
    chrome: Chrome,
    clock: FrameClock,
}

impl App {
    fn new(gfx: GraphicsContext, config: LabConfig) -> Self {
        let egui = EguiLayer::new(&gfx);
        let dark = config.view.style.palette != Palette::light();
        Self {
            gfx,
            egui,
            view: TesseractView::new(config.view),
            chrome: Chrome {
                canvas: egui::Vec2::ZERO,
                dark,
            },
            clock: FrameClock::new(),
        }
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let dt = self.clock.tick(Instant::now());
        match self.view.advance(dt) {
            FrameUpdate::Advance(_) => self.egui.ctx.request_repaint(),
            // the redraw already in flight shows user-driven changes
            FrameUpdate::Redraw => {}
        }

        let clear = to_wgpu_color(self.view.state.style.palette.background);
        let view = &mut self.view;
        let chrome = &mut self.chrome;
        self.egui
            .render(&self.gfx, clear, |ctx| build_ui(ctx, view, chrome))
    }
}

fn to_wgpu_color(c: Rgba) -> wgpu::Color {
    wgpu::Color {
        r: c[0] as f64,
        g: c[1] as f64,
        b: c[2] as f64,
        a: c[3] as f64,
    }
}

fn build_ui(ctx: &egui::Context, view: &mut TesseractView, chrome: &mut Chrome) {
    handle_shortcuts(ctx, view, chrome);

    egui::TopBottomPanel::top("status").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Tesseract Lab").strong());
            ui.label(
                RichText::new(view.state.mode.label())
                    .color(Color32::from_rgb(124, 131, 255)),
            );
            let a = &view.state.angles;
            ui.label(
                RichText::new(format!(
                    "s {:.0}  xw {:+.2} yw {:+.2} zw {:+.2}",
                    view.state.projection.scale, a.xw, a.yw, a.zw
                ))
                .monospace()
                .color(Color32::GRAY),
            );
            ui.separator();
            let play = if view.state.animation.auto_rotate { "Pause" } else { "Play" };
            if ui.button(play).clicked() {
                view.state.animation.auto_rotate = !view.state.animation.auto_rotate;
            }
            if ui.button("Fit").clicked() {
                fit(view, chrome);
            }
            match view.state.mode {
                ViewMode::Standard => {
                    if ui.button("Cube-in-cube").clicked() {
                        view.state.enter_cube_in_cube();
                    }
                }
                ViewMode::CubeInCube => {
                    if ui.button("Standard").clicked() {
                        view.state.enter_standard();
                    }
                }
            }
            if view.is_dragging() {
                ui.label(RichText::new("DRAGGING").color(Color32::GREEN));
            }
        });
    });

    egui::SidePanel::left("controls")
        .min_width(240.0)
        .resizable(true)
        .show(ctx, |ui| controls(ui, view, chrome));

    draw_equations_sidebar(ctx, "4D Projection", &view.state);

    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| canvas(ui, view, chrome));
}

fn fit(view: &mut TesseractView, chrome: &Chrome) {
    if chrome.canvas.x > 0.0 && chrome.canvas.y > 0.0 {
        let scale = view.fit_to_view(chrome.canvas.x, chrome.canvas.y);
        log::info!("fit to view: scale {scale:.0}");
    }
}

fn handle_shortcuts(ctx: &egui::Context, view: &mut TesseractView, chrome: &Chrome) {
    if ctx.wants_keyboard_input() {
        return;
    }
    let pressed = |key| ctx.input(|i| i.key_pressed(key));
    if pressed(egui::Key::Space) {
        view.state.animation.auto_rotate = !view.state.animation.auto_rotate;
    }
    if pressed(egui::Key::R) {
        view.state.reset_pose();
    }
    if pressed(egui::Key::F) {
        fit(view, chrome);
    }
    if pressed(egui::Key::C) {
        view.state.enter_cube_in_cube();
    }
    if pressed(egui::Key::S) {
        view.state.enter_standard();
    }
}

fn controls(ui: &mut egui::Ui, view: &mut TesseractView, chrome: &mut Chrome) {
    let state = &mut view.state;
    ui.heading("Controls");
    ui.horizontal(|ui| {
        ui.checkbox(&mut state.animation.auto_rotate, "Auto-rotate");
        if ui.button("Reset").clicked() {
            state.reset_pose();
        }
    });

    ui.label("Mode");
    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.mode == ViewMode::Standard, "Standard")
            .clicked()
        {
            state.enter_standard();
        }
        if ui
            .selectable_label(state.mode == ViewMode::CubeInCube, "Cube-in-cube")
            .clicked()
        {
            state.enter_cube_in_cube();
        }
    });
    ui.checkbox(&mut state.animation.lock_4d, "Lock 4D shape (spin only in 3D)");

    ui.separator();
    ui.add(egui::Slider::new(&mut state.animation.speed_3d, ranges::SPEED).text("3D speed"));
    ui.add(egui::Slider::new(&mut state.animation.speed_4d, ranges::SPEED).text("4D speed"));
    ui.add(egui::Slider::new(&mut state.projection.scale, ranges::SCALE).text("Scale"));

    ui.checkbox(&mut state.projection.perspective_4d, "4D perspective");
    ui.add(
        egui::Slider::new(&mut state.projection.distance_4d, ranges::CAMERA_DISTANCE)
            .text("4D camera distance"),
    );
    ui.checkbox(&mut state.projection.perspective_3d, "3D perspective");
    ui.add(
        egui::Slider::new(&mut state.projection.distance_3d, ranges::CAMERA_DISTANCE)
            .text("3D camera distance"),
    );

    ui.separator();
    ui.checkbox(&mut state.style.show_vertices, "Show vertices");
    ui.add(
        egui::Slider::new(&mut state.style.edge_thickness, ranges::EDGE_THICKNESS)
            .text("Edge thickness"),
    );
    ui.add(
        egui::Slider::new(&mut state.style.vertex_size, ranges::VERTEX_SIZE).text("Vertex size"),
    );
    if ui.checkbox(&mut chrome.dark, "Dark palette").changed() {
        state.style.palette = if chrome.dark {
            Palette::dark()
        } else {
            Palette::light()
        };
    }

    ui.add_space(8.0);
    ui.label(
        RichText::new("Drag: XY/YZ · Alt/Ctrl: XW/YW · Shift: XZ/YZ · Scroll: zoom")
            .small()
            .color(Color32::GRAY),
    );
}

fn canvas(ui: &mut egui::Ui, view: &mut TesseractView, chrome: &mut Chrome) {
    let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
    let rect = response.rect;
    chrome.canvas = rect.size();

    let local = |p: egui::Pos2| glam::Vec2::new(p.x - rect.min.x, p.y - rect.min.y);
    if response.drag_started() {
        // egui reports the drag past its threshold; anchor at the press so
        // that motion rotates too
        let (origin, keys) = ui.input(|i| (i.pointer.press_origin(), i.modifiers));
        if let Some(pos) = origin.or_else(|| response.interact_pointer_pos()) {
            view.apply_gesture(GestureEvent::Start {
                position: local(pos),
                modifier: Modifier::from_keys(keys.alt, keys.ctrl, keys.shift),
            });
        }
    }
    if response.dragged() {
        if let Some(pos) = response.interact_pointer_pos() {
            view.apply_gesture(GestureEvent::Move {
                position: local(pos),
            });
        }
    }
    if response.drag_stopped() {
        view.apply_gesture(GestureEvent::End);
    }

    if response.hovered() {
        // egui reports wheel-up as positive; the zoom expects wheel-down positive
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            view.apply_wheel(-scroll);
        }
    }

    let mut surface = PainterSurface::new(&painter, rect);
    view.draw(&mut surface);
}

fn main() -> ExitCode {
    env_logger::init();

    let config = LabConfig::from_args();
    let (gfx, event_loop) = match pollster::block_on(GraphicsContext::new(
        &config.window.title,
        config.window.width,
        config.window.height,
    )) {
        Ok(pair) => pair,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(gfx, config);

    let result = event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { ref event, .. } => {
                // all pointer and keyboard input reaches the view through egui
                app.egui.on_window_event(&app.gfx.window, event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::Resized(size) => app.gfx.resize(*size),
                    WindowEvent::RedrawRequested => match app.frame() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost) => app.gfx.reconfigure(),
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("GPU out of memory");
                            elwt.exit();
                        }
                        Err(e) => log::warn!("render error: {e:?}"),
                    },
                    _ => {}
                }
            }
            Event::AboutToWait => {
                app.gfx.window.request_redraw();
            }
            _ => {}
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event loop error: {err}");
            ExitCode::FAILURE
        }
    }
}
