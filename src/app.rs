use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use crate::event::RepaintHandler;
use crate::input::InputHandler;
use crate::panels::{central_panel, color_dialog, tools_panel};
use crate::renderer::Renderer;
use crate::tool::ToolState;

/// The eframe shell around the drawing core.
///
/// Only the tool settings are persisted between runs; drawings are not.
pub struct PaintApp {
    canvas: Canvas,
    renderer: Renderer,
    input_handler: InputHandler,
    /// Working color while the color chooser is open
    pending_color: Option<egui::Color32>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = CanvasConfig::from_env().unwrap_or_else(|err| {
            log::warn!("Using default canvas config: {err}");
            CanvasConfig::default()
        });

        let tools = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolState>(storage, eframe::APP_KEY))
            .map(ToolState::normalized)
            .unwrap_or_else(|| ToolState::from_config(&config));

        // anti-aliased edges for every stroke
        cc.egui_ctx.tessellation_options_mut(|options| options.feathering = true);

        let canvas = Canvas::with_tool_state(tools);
        canvas.subscribe(Box::new(RepaintHandler::new(cc.egui_ctx.clone())));

        Self {
            canvas,
            renderer: Renderer::new(&config),
            input_handler: InputHandler::new(egui::Rect::NOTHING),
            pending_color: None,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Feeds this frame's pointer input for the canvas area into the core
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input_handler.set_canvas_rect(canvas_rect);
        // the color chooser is modal
        if self.pending_color.is_some() {
            return;
        }
        for event in self.input_handler.process_input(ctx) {
            self.canvas.handle_input(&event);
        }
    }

    pub fn open_color_dialog(&mut self) {
        self.pending_color = Some(self.canvas.tool_state().draw_color());
    }

    pub fn pending_color_mut(&mut self) -> Option<&mut egui::Color32> {
        self.pending_color.as_mut()
    }

    /// Closes the color chooser, applying the working color when `accept` is set
    pub fn close_color_dialog(&mut self, accept: bool) {
        let color = self.pending_color.take().filter(|_| accept);
        self.canvas.set_color(color);
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.canvas.tool_state());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        color_dialog(self, ctx);
        central_panel(self, ctx);
    }
}
