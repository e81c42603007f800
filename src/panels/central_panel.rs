use crate::PaintApp;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let canvas_rect = ui.available_rect_before_wrap();
            ui.allocate_rect(canvas_rect, egui::Sense::click_and_drag());

            // Handle input
            app.handle_input(ctx, canvas_rect);

            // Render the canvas
            let background = app.canvas().tool_state().background_color();
            app.renderer()
                .render(ui.painter(), canvas_rect, app.canvas().document(), background);
        });
}
