//! The drawing core as seen by the host UI.
//!
//! `Canvas` owns the tool state, the gesture state machine and the document.
//! Hosts deliver typed commands and pointer events, one at a time, on the UI
//! thread. Every change that alters what the canvas looks like is announced on
//! the event bus, which is how a host learns it should repaint.

use egui::Color32;

use crate::config::CanvasConfig;
use crate::document::Document;
use crate::event::{CanvasEvent, EventBus, EventHandler};
use crate::gesture::{GestureOutcome, GestureStateMachine};
use crate::input::InputEvent;
use crate::shape::Point;
use crate::stroke::{BrushStyle, BrushTip};
use crate::tool::{Tool, ToolState};

#[derive(Debug, Default)]
pub struct Canvas {
    tools: ToolState,
    gesture: GestureStateMachine,
    document: Document,
    event_bus: EventBus,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        Self::with_tool_state(ToolState::from_config(config))
    }

    pub fn with_tool_state(tools: ToolState) -> Self {
        Self {
            tools,
            ..Self::default()
        }
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
        log::debug!("Canvas has {} event handler(s)", self.event_bus.handler_count());
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn gesture(&self) -> &GestureStateMachine {
        &self.gesture
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tools.set_current_tool(tool);
        log::info!("Tool selected: {}", tool.name());
        self.event_bus.emit(CanvasEvent::ToolChanged { tool });
    }

    /// Applies a picked color; `None` is a cancelled picker and changes nothing
    pub fn set_color(&mut self, color: Option<Color32>) {
        if color.is_none() {
            log::debug!("Color selection cancelled");
            return;
        }
        self.tools.choose_color(color);
        log::info!("Draw color set to {:?}", self.tools.draw_color());
        self.emit_color_changed();
    }

    pub fn use_pen(&mut self) {
        self.tools.use_pen();
        self.emit_color_changed();
    }

    pub fn use_eraser(&mut self) {
        self.tools.use_eraser();
        self.emit_color_changed();
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.tools.set_background_color(color);
        self.emit_color_changed();
    }

    pub fn set_brush_size(&mut self, size: i32) {
        self.tools.set_brush_size(size);
        self.emit_brush_changed();
    }

    pub fn set_brush_tip(&mut self, tip: BrushTip) {
        self.tools.set_brush_tip(tip);
        self.emit_brush_changed();
    }

    pub fn set_brush_style(&mut self, style: BrushStyle) {
        self.tools.set_brush_style(style);
        self.emit_brush_changed();
    }

    /// Removes every shape. A gesture in progress is abandoned with it.
    pub fn clear(&mut self) {
        self.gesture.reset();
        self.document.clear();
        log::info!("Canvas cleared");
        self.event_bus.emit(CanvasEvent::Cleared);
    }

    pub fn pointer_down(&mut self, pos: Point) -> GestureOutcome {
        self.gesture.pointer_down(pos, &self.tools)
    }

    pub fn pointer_move(&mut self, pos: Point) -> GestureOutcome {
        let outcome = self.gesture.pointer_move(pos, &self.tools, &mut self.document);
        self.announce(outcome);
        outcome
    }

    pub fn pointer_up(&mut self, pos: Point) -> GestureOutcome {
        let outcome = self.gesture.pointer_up(pos, &self.tools, &mut self.document);
        self.announce(outcome);
        outcome
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> GestureOutcome {
        match event {
            InputEvent::PointerDown { location } => self.pointer_down(location.position),
            InputEvent::PointerMove { location } => self.pointer_move(location.position),
            InputEvent::PointerUp { location } => self.pointer_up(location.position),
        }
    }

    fn announce(&self, outcome: GestureOutcome) {
        let event = match outcome {
            GestureOutcome::Ignored | GestureOutcome::Started => return,
            GestureOutcome::PreviewUpdated => CanvasEvent::PreviewUpdated,
            GestureOutcome::Discarded => CanvasEvent::GestureDiscarded,
            GestureOutcome::Committed => CanvasEvent::ShapeCommitted {
                index: self.document.len().saturating_sub(1),
                kind: self.document.last_shape().map_or("unknown", |shape| shape.kind()),
            },
        };
        self.event_bus.emit(event);
    }

    fn emit_color_changed(&self) {
        self.event_bus.emit(CanvasEvent::ColorChanged {
            draw_color: self.tools.draw_color(),
            active_color: self.tools.active_color(),
        });
    }

    fn emit_brush_changed(&self) {
        self.event_bus.emit(CanvasEvent::BrushChanged {
            size: self.tools.size(),
            tip: self.tools.tip(),
            style: self.tools.style(),
        });
    }
}
