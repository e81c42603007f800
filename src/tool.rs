use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::config::CanvasConfig;
use crate::shape::ShapeStyle;
use crate::stroke::{BrushStyle, BrushTip};

pub const MIN_BRUSH_SIZE: i32 = 1;
pub const MAX_BRUSH_SIZE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
    Line,
    Rectangle,
    Oval,
    RoundRect,
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::Pen,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Oval,
        Tool::RoundRect,
    ];

    /// Freehand tools record every pointer position instead of two corners
    pub fn is_freehand(self) -> bool {
        match self {
            Tool::Pen | Tool::Eraser => true,
            Tool::Line | Tool::Rectangle | Tool::Oval | Tool::RoundRect => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Oval",
            Tool::RoundRect => "Round Rect",
        }
    }
}

/// Which color new strokes are painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaintMode {
    #[default]
    Pen,
    Eraser,
}

/// Tool and brush configuration for the session.
///
/// `active_color` is what new shapes get: the draw color in pen mode, the
/// background color in eraser mode. Erasing is painting with the background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolState {
    tool: Tool,
    draw_color: Color32,
    background_color: Color32,
    active_color: Color32,
    mode: PaintMode,
    size: u32,
    tip: BrushTip,
    style: BrushStyle,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            draw_color: Color32::BLACK,
            background_color: Color32::WHITE,
            active_color: Color32::BLACK,
            mode: PaintMode::Pen,
            size: 5,
            tip: BrushTip::Round,
            style: BrushStyle::Solid,
        }
    }
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CanvasConfig) -> Self {
        let mut state = Self {
            draw_color: opaque(config.draw_color),
            background_color: opaque(config.background_color),
            tip: config.brush_tip,
            style: config.brush_style,
            ..Self::default()
        };
        state.set_brush_size(config.brush_size);
        state.set_current_tool(config.tool);
        state
    }

    /// Repairs settings restored from storage: re-derives the active color from
    /// the mode, drops color alpha and clamps the size
    pub fn normalized(mut self) -> Self {
        self.size = self.size.clamp(MIN_BRUSH_SIZE as u32, MAX_BRUSH_SIZE as u32);
        self.draw_color = opaque(self.draw_color);
        self.background_color = opaque(self.background_color);
        match self.mode {
            PaintMode::Pen => self.use_pen(),
            PaintMode::Eraser => self.use_eraser(),
        }
        self
    }

    /// Switches tools, entering eraser mode for the eraser and pen mode for everything else
    pub fn set_current_tool(&mut self, tool: Tool) {
        self.tool = tool;
        match tool {
            Tool::Pen | Tool::Line | Tool::Rectangle | Tool::Oval | Tool::RoundRect => {
                self.use_pen()
            }
            Tool::Eraser => self.use_eraser(),
        }
    }

    /// Applies a color picked by the user. `None` means the picker was cancelled.
    ///
    /// The eraser keeps painting with the background color.
    pub fn choose_color(&mut self, color: Option<Color32>) {
        let Some(color) = color else {
            return;
        };
        self.draw_color = opaque(color);
        if self.tool != Tool::Eraser {
            self.use_pen();
        }
    }

    pub fn use_pen(&mut self) {
        self.mode = PaintMode::Pen;
        self.active_color = self.draw_color;
    }

    pub fn use_eraser(&mut self) {
        self.mode = PaintMode::Eraser;
        self.active_color = self.background_color;
    }

    pub fn set_background_color(&mut self, color: Color32) {
        self.background_color = opaque(color);
        if self.mode == PaintMode::Eraser {
            self.active_color = self.background_color;
        }
    }

    /// Stores the brush size, clamped to 1..=100
    pub fn set_brush_size(&mut self, size: i32) {
        self.size = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE) as u32;
    }

    pub fn set_brush_tip(&mut self, tip: BrushTip) {
        self.tip = tip;
    }

    pub fn set_brush_style(&mut self, style: BrushStyle) {
        self.style = style;
    }

    /// Style snapshot for a shape created now
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle::new(self.active_color, self.size, self.tip, self.style)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn draw_color(&self) -> Color32 {
        self.draw_color
    }

    pub fn background_color(&self) -> Color32 {
        self.background_color
    }

    pub fn active_color(&self) -> Color32 {
        self.active_color
    }

    pub fn is_erasing(&self) -> bool {
        self.mode == PaintMode::Eraser
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn tip(&self) -> BrushTip {
        self.tip
    }

    pub fn style(&self) -> BrushStyle {
        self.style
    }
}

/// Drops alpha. Caps and joins are drawn over the stroke body and a translucent
/// color would blend twice where they overlap.
fn opaque(color: Color32) -> Color32 {
    if color.is_opaque() {
        return color;
    }
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgb(r, g, b)
}
