use egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::config::CanvasConfig;
use crate::document::Document;
use crate::geometry::{self, DEFAULT_OVAL_SEGMENTS, Outline};
use crate::shape::Shape;
use crate::stroke::{LineCap, LineJoin, StrokeDescriptor};

/// Turns the document into egui paint shapes.
///
/// Rendering only reads the document; shapes are re-stroked on every frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    oval_segments: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            oval_segments: DEFAULT_OVAL_SEGMENTS,
        }
    }
}

impl Renderer {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            oval_segments: config.oval_segments,
        }
    }

    /// Paints the background, the committed shapes in order, then the preview on top
    ///
    /// Args:
    ///     painter (Painter): Painter for the canvas area
    ///     rect (Rect): Canvas area in screen space; shape coordinates are relative to its top-left
    ///     document (Document): Shapes to draw
    ///     background (Color32): Canvas fill, also the eraser color
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document, background: Color32) {
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, background);
        painter.extend(self.document_shapes(document, rect.min.to_vec2()));
    }

    /// Paint shapes for a whole frame, in draw order
    pub fn document_shapes(&self, document: &Document, offset: Vec2) -> Vec<egui::Shape> {
        document
            .shapes()
            .iter()
            .chain(document.preview())
            .flat_map(|shape| self.shape_to_egui(shape, offset))
            .collect()
    }

    pub fn shape_to_egui(&self, shape: &Shape, offset: Vec2) -> Vec<egui::Shape> {
        let style = shape.style();
        let stroke = style.stroke();
        let mut out = Vec::new();

        for outline in geometry::outlines(shape, self.oval_segments) {
            let outline = translated(outline, offset);
            match stroke.dash {
                Some(pattern) => {
                    for piece in geometry::dash(&outline, pattern, stroke.dash_phase) {
                        stroke_outline(&mut out, &piece, &stroke, style.color);
                    }
                }
                None => stroke_outline(&mut out, &outline, &stroke, style.color),
            }
        }
        out
    }
}

fn translated(mut outline: Outline, offset: Vec2) -> Outline {
    for p in &mut outline.points {
        *p += offset;
    }
    outline
}

/// Strokes one polyline, emulating caps and joins egui does not draw natively
fn stroke_outline(
    out: &mut Vec<egui::Shape>,
    outline: &Outline,
    stroke: &StrokeDescriptor,
    color: Color32,
) {
    let Some(&first) = outline.points.first() else {
        return;
    };
    let half = stroke.half_width();

    if outline.is_degenerate() {
        out.push(dot(first, stroke, color));
        return;
    }

    let egui_stroke = egui::Stroke::new(stroke.width, color);
    if outline.closed {
        out.push(egui::Shape::closed_line(outline.points.clone(), egui_stroke));
    } else {
        let points = match stroke.cap {
            LineCap::Square => extend_ends(&outline.points, half),
            LineCap::Round => outline.points.clone(),
        };
        out.push(egui::Shape::line(points, egui_stroke));
    }

    let last = outline.points.len() - 1;
    for (i, p) in outline.points.iter().enumerate() {
        let is_end = !outline.closed && (i == 0 || i == last);
        let round = if is_end {
            stroke.cap == LineCap::Round
        } else {
            stroke.join == LineJoin::Round
        };
        if round {
            out.push(egui::Shape::circle_filled(*p, half, color));
        }
    }
}

fn dot(center: Pos2, stroke: &StrokeDescriptor, color: Color32) -> egui::Shape {
    match stroke.cap {
        LineCap::Round => egui::Shape::circle_filled(center, stroke.half_width(), color),
        LineCap::Square => egui::Shape::rect_filled(
            Rect::from_center_size(center, Vec2::splat(stroke.width)),
            0.0,
            color,
        ),
    }
}

/// Pushes both ends of an open polyline outward by `amount` along the end direction
fn extend_ends(points: &[Pos2], amount: f32) -> Vec<Pos2> {
    let mut points = points.to_vec();
    let n = points.len();
    if n < 2 {
        return points;
    }

    if let Some(next) = points[1..].iter().find(|p| **p != points[0]) {
        let dir = (points[0] - *next).normalized();
        points[0] += dir * amount;
    }
    if let Some(prev) = points[..n - 1].iter().rev().find(|p| **p != points[n - 1]) {
        let dir = (points[n - 1] - *prev).normalized();
        points[n - 1] += dir * amount;
    }
    points
}
