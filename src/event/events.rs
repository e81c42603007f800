use egui::Color32;

use crate::stroke::{BrushStyle, BrushTip};
use crate::tool::Tool;

#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    ToolChanged {
        tool: Tool,
    },
    ColorChanged {
        draw_color: Color32,
        active_color: Color32,
    },
    BrushChanged {
        size: u32,
        tip: BrushTip,
        style: BrushStyle,
    },
    PreviewUpdated,
    ShapeCommitted {
        index: usize,
        kind: &'static str,
    },
    /// A freehand gesture ended without enough points to keep
    GestureDiscarded,
    Cleared,
}

impl CanvasEvent {
    /// Whether the canvas looks different after this event
    pub fn needs_repaint(&self) -> bool {
        match self {
            Self::PreviewUpdated
            | Self::ShapeCommitted { .. }
            | Self::GestureDiscarded
            | Self::Cleared => true,
            Self::ToolChanged { .. } | Self::ColorChanged { .. } | Self::BrushChanged { .. } => {
                false
            }
        }
    }
}
