use serde::{Deserialize, Serialize};

/// Shape of the brush tip, which decides how stroke ends and corners look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushTip {
    #[default]
    Round,
    Square,
}

/// Dash style of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Round,
    Miter,
}

/// Fixed [on, off] pattern of the dashed style, in surface units
pub const DASHED_PATTERN: [f32; 2] = [10.0, 10.0];

/// Concrete appearance of a stroke outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeDescriptor {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    /// [on, off] lengths; `None` means a continuous stroke
    pub dash: Option<[f32; 2]>,
    pub dash_phase: f32,
}

impl StrokeDescriptor {
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }
}

/// Maps a brush configuration to the stroke used for every shape kind.
///
/// Dotted strokes always get round caps so each dash renders as a dot,
/// whatever the tip.
pub fn compute_stroke(tip: BrushTip, style: BrushStyle, size: u32) -> StrokeDescriptor {
    let (mut cap, join) = match tip {
        BrushTip::Square => (LineCap::Square, LineJoin::Miter),
        BrushTip::Round => (LineCap::Round, LineJoin::Round),
    };

    let size = size as f32;
    let dash = match style {
        BrushStyle::Solid => None,
        BrushStyle::Dashed => Some(DASHED_PATTERN),
        BrushStyle::Dotted => {
            cap = LineCap::Round;
            Some([size.max(2.0), size * 2.0])
        }
    };

    StrokeDescriptor {
        width: size,
        cap,
        join,
        dash,
        dash_phase: 0.0,
    }
}
