use egui::color_picker::Alpha;

use crate::PaintApp;
use crate::stroke::{BrushStyle, BrushTip};
use crate::tool::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE, Tool};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            let state = app.canvas().tool_state().clone();

            ui.label("Tools:");
            for tool in Tool::ALL {
                if ui.selectable_label(state.tool() == tool, tool.name()).clicked() {
                    app.canvas_mut().select_tool(tool);
                }
            }
            ui.separator();

            let (response, painter) =
                ui.allocate_painter(egui::vec2(16.0, 16.0), egui::Sense::hover());
            painter.rect_filled(response.rect, 2.0, state.draw_color());
            if ui.button("Choose Color").clicked() {
                app.open_color_dialog();
            }
            if ui.button("Clear").clicked() {
                app.canvas_mut().clear();
            }
            ui.separator();

            let mut size = state.size() as i32;
            if ui
                .add(egui::Slider::new(&mut size, MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).text("Size"))
                .changed()
            {
                app.canvas_mut().set_brush_size(size);
            }

            let mut tip = state.tip();
            egui::ComboBox::from_label("Tip")
                .selected_text(format!("{tip:?}"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut tip, BrushTip::Round, "Round");
                    ui.selectable_value(&mut tip, BrushTip::Square, "Square");
                });
            if tip != state.tip() {
                app.canvas_mut().set_brush_tip(tip);
            }

            let mut style = state.style();
            egui::ComboBox::from_label("Style")
                .selected_text(format!("{style:?}"))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut style, BrushStyle::Solid, "Solid");
                    ui.selectable_value(&mut style, BrushStyle::Dashed, "Dashed");
                    ui.selectable_value(&mut style, BrushStyle::Dotted, "Dotted");
                });
            if style != state.style() {
                app.canvas_mut().set_brush_style(style);
            }
        });
    });
}

/// Modal-style color chooser. Cancel leaves the draw color untouched.
pub fn color_dialog(app: &mut PaintApp, ctx: &egui::Context) {
    let mut decision = None;
    let Some(color) = app.pending_color_mut() else {
        return;
    };

    egui::Window::new("Choose a Color")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            egui::color_picker::color_picker_color32(ui, color, Alpha::Opaque);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    decision = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    decision = Some(false);
                }
            });
        });

    if let Some(accept) = decision {
        app.close_color_dialog(accept);
    }
}
