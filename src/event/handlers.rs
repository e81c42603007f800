use crate::event::{CanvasEvent, EventHandler};

/// Asks egui for a new frame whenever the canvas changed appearance
#[derive(Debug)]
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, event: &CanvasEvent) {
        if event.needs_repaint() {
            self.ctx.request_repaint();
        }
    }
}
