use egui::{Color32, Pos2, Rect, Vec2};

use crate::stroke::{BrushStyle, BrushTip, StrokeDescriptor, compute_stroke};

/// A position in surface coordinates
pub type Point = Pos2;

/// Fraction of the box size used as the corner arc diameter of a rounded rectangle
pub const ROUND_RECT_ARC_RATIO: f32 = 0.3;

/// Appearance captured when a shape is created. Later brush changes never reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub color: Color32,
    pub stroke_width: u32,
    pub tip: BrushTip,
    pub style: BrushStyle,
}

impl ShapeStyle {
    pub fn new(color: Color32, stroke_width: u32, tip: BrushTip, style: BrushStyle) -> Self {
        Self {
            color,
            stroke_width: stroke_width.max(1),
            tip,
            style,
        }
    }

    pub fn stroke(&self) -> StrokeDescriptor {
        compute_stroke(self.tip, self.style, self.stroke_width)
    }
}

/// Axis-aligned box spanned by a drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    /// Builds the box spanned by two opposite corners, in either order
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Pos2::new(a.x.min(b.x), a.y.min(b.y)),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn max(&self) -> Point {
        self.min + Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        self.min + Vec2::new(self.width, self.height) / 2.0
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    pub fn to_rect(&self) -> Rect {
        Rect::from_min_size(self.min, Vec2::new(self.width, self.height))
    }
}

/// A drawable mark on the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    FreehandPath {
        points: Vec<Point>,
        style: ShapeStyle,
    },
    LineSegment {
        start: Point,
        end: Point,
        style: ShapeStyle,
    },
    Rect {
        bounds: BoundingBox,
        style: ShapeStyle,
    },
    Oval {
        bounds: BoundingBox,
        style: ShapeStyle,
    },
    RoundRect {
        bounds: BoundingBox,
        style: ShapeStyle,
    },
}

impl Shape {
    pub fn style(&self) -> &ShapeStyle {
        match self {
            Self::FreehandPath { style, .. }
            | Self::LineSegment { style, .. }
            | Self::Rect { style, .. }
            | Self::Oval { style, .. }
            | Self::RoundRect { style, .. } => style,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::FreehandPath { .. } => "freehand",
            Self::LineSegment { .. } => "line",
            Self::Rect { .. } => "rectangle",
            Self::Oval { .. } => "oval",
            Self::RoundRect { .. } => "round_rect",
        }
    }

    /// Corner arc width and height of a rounded rectangle, `None` for other shapes
    pub fn corner_arc(&self) -> Option<Vec2> {
        match self {
            Self::RoundRect { bounds, .. } => Some(Vec2::new(
                bounds.width * ROUND_RECT_ARC_RATIO,
                bounds.height * ROUND_RECT_ARC_RATIO,
            )),
            _ => None,
        }
    }

    /// Area covered by the shape's geometry, without stroke padding
    pub fn bounds(&self) -> Rect {
        match self {
            Self::FreehandPath { points, .. } => {
                points.iter().fold(Rect::NOTHING, |rect, p| rect.union(Rect::from_min_max(*p, *p)))
            }
            Self::LineSegment { start, end, .. } => Rect::from_two_pos(*start, *end),
            Self::Rect { bounds, .. }
            | Self::Oval { bounds, .. }
            | Self::RoundRect { bounds, .. } => bounds.to_rect(),
        }
    }
}
