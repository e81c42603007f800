//! Outline geometry for shapes: the polylines a stroke follows, and dash splitting.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use egui::{Pos2, Vec2};

use crate::shape::{BoundingBox, Shape};

pub const DEFAULT_OVAL_SEGMENTS: usize = 64;

/// Segments used for each quarter arc of a rounded rectangle corner
const CORNER_ARC_SEGMENTS: usize = 8;

/// A polyline that a stroke is applied to
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub points: Vec<Pos2>,
    pub closed: bool,
}

impl Outline {
    pub fn open(points: Vec<Pos2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<Pos2>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// True when every point coincides, so the stroke collapses to a dot
    pub fn is_degenerate(&self) -> bool {
        match self.points.first() {
            Some(first) => self.points.iter().all(|p| p == first),
            None => true,
        }
    }
}

fn segments(points: &[Pos2], closed: bool) -> impl Iterator<Item = (Pos2, Pos2)> + '_ {
    let closing = if closed && points.len() > 2 {
        points.last().copied().zip(points.first().copied())
    } else {
        None
    };
    points.windows(2).map(|w| (w[0], w[1])).chain(closing)
}

/// Polylines traced by a shape's stroke.
///
/// A freehand path yields one outline per segment, each dashed on its own.
pub fn outlines(shape: &Shape, oval_segments: usize) -> Vec<Outline> {
    match shape {
        Shape::FreehandPath { points, .. } => points
            .windows(2)
            .map(|pair| Outline::open(pair.to_vec()))
            .collect(),
        Shape::LineSegment { start, end, .. } => vec![Outline::open(vec![*start, *end])],
        Shape::Rect { bounds, .. } => vec![rect_outline(bounds)],
        Shape::Oval { bounds, .. } => vec![oval_outline(bounds, oval_segments)],
        Shape::RoundRect { bounds, .. } => {
            vec![round_rect_outline(bounds, shape.corner_arc().unwrap_or_default())]
        }
    }
}

fn rect_outline(bounds: &BoundingBox) -> Outline {
    let min = bounds.min;
    let max = bounds.max();
    Outline::closed(vec![
        min,
        Pos2::new(max.x, min.y),
        max,
        Pos2::new(min.x, max.y),
    ])
}

fn oval_outline(bounds: &BoundingBox, segments: usize) -> Outline {
    let center = bounds.center();
    let radius = Vec2::new(bounds.width, bounds.height) / 2.0;
    let points = (0..segments.max(3))
        .map(|i| {
            let t = i as f32 / segments.max(3) as f32 * TAU;
            center + Vec2::new(t.cos() * radius.x, t.sin() * radius.y)
        })
        .collect();
    Outline::closed(points)
}

/// Rounded rectangle with corner radii of half the arc size, traced clockwise
/// from the top-left corner's arc.
fn round_rect_outline(bounds: &BoundingBox, arc: Vec2) -> Outline {
    let r = arc / 2.0;
    let min = bounds.min;
    let max = bounds.max();
    // corner arc centers with the angle each quarter arc starts at
    let corners = [
        (Pos2::new(min.x + r.x, min.y + r.y), PI),
        (Pos2::new(max.x - r.x, min.y + r.y), PI + FRAC_PI_2),
        (Pos2::new(max.x - r.x, max.y - r.y), 0.0),
        (Pos2::new(min.x + r.x, max.y - r.y), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (CORNER_ARC_SEGMENTS + 1));
    for (center, start_angle) in corners {
        for i in 0..=CORNER_ARC_SEGMENTS {
            let t = start_angle + FRAC_PI_2 * i as f32 / CORNER_ARC_SEGMENTS as f32;
            points.push(center + Vec2::new(t.cos() * r.x, t.sin() * r.y));
        }
    }
    Outline::closed(points)
}

/// Splits a polyline into the "on" pieces of an [on, off] dash pattern.
///
/// The pattern starts at `phase` and runs continuously across vertices. For
/// closed outlines it also runs across the closing segment.
pub fn dash(outline: &Outline, pattern: [f32; 2], phase: f32) -> Vec<Outline> {
    let [on, off] = pattern;
    let period = on + off;
    if on <= 0.0 || off <= 0.0 || outline.is_degenerate() {
        return vec![outline.clone()];
    }

    let mut pieces = Vec::new();
    let mut current: Vec<Pos2> = Vec::new();
    // distance into the current period
    let mut offset = phase.rem_euclid(period);
    let mut drawing = offset < on;
    if drawing {
        current.push(outline.points[0]);
    }

    for (a, b) in segments(&outline.points, outline.closed) {
        let seg_len = a.distance(b);
        if seg_len == 0.0 {
            continue;
        }
        let dir = (b - a) / seg_len;
        let mut travelled = 0.0;
        loop {
            let boundary = if drawing { on } else { period };
            let step = boundary - offset;
            if travelled + step > seg_len {
                offset += seg_len - travelled;
                if drawing && travelled < seg_len {
                    current.push(b);
                }
                break;
            }
            travelled += step;
            let at = a + dir * travelled;
            if drawing {
                current.push(at);
                pieces.push(Outline::open(std::mem::take(&mut current)));
                offset = on;
            } else {
                current.push(at);
                offset = 0.0;
            }
            drawing = !drawing;
        }
    }

    if drawing && current.len() > 1 {
        pieces.push(Outline::open(current));
    }
    pieces
}
