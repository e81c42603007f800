use crate::document::Document;
use crate::shape::{BoundingBox, Point, Shape};
use crate::tool::{Tool, ToolState};

/// What a pointer event did to the gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Event arrived out of sequence and changed nothing
    Ignored,
    Started,
    PreviewUpdated,
    Committed,
    /// Freehand gesture ended with fewer than two points
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Drawing {
        start: Point,
        end: Point,
        /// Running point list, only filled for freehand tools
        points: Vec<Point>,
    },
}

/// Turns pointer down/move/up sequences into preview and committed shapes
#[derive(Debug, Clone, Default)]
pub struct GestureStateMachine {
    state: GestureState,
}

/// Minimum number of recorded points for a freehand stroke to be kept
pub const MIN_FREEHAND_POINTS: usize = 2;

impl GestureStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.state, GestureState::Drawing { .. })
    }

    /// Points recorded so far by a freehand gesture
    pub fn running_points(&self) -> &[Point] {
        match &self.state {
            GestureState::Drawing { points, .. } => points,
            GestureState::Idle => &[],
        }
    }

    pub fn current_state_name(&self) -> &'static str {
        match self.state {
            GestureState::Idle => "Idle",
            GestureState::Drawing { .. } => "Drawing",
        }
    }

    pub fn pointer_down(&mut self, pos: Point, tools: &ToolState) -> GestureOutcome {
        if self.is_drawing() {
            log::debug!("pointer down at {pos:?} ignored, gesture already in progress");
            return GestureOutcome::Ignored;
        }

        let points = if tools.tool().is_freehand() { vec![pos] } else { Vec::new() };
        self.state = GestureState::Drawing {
            start: pos,
            end: pos,
            points,
        };
        log::debug!("{} gesture started at {pos:?}", tools.tool().name());
        GestureOutcome::Started
    }

    pub fn pointer_move(
        &mut self,
        pos: Point,
        tools: &ToolState,
        document: &mut Document,
    ) -> GestureOutcome {
        let GestureState::Drawing { start, end, points } = &mut self.state else {
            return GestureOutcome::Ignored;
        };
        *end = pos;

        let preview = if tools.tool().is_freehand() {
            points.push(pos);
            Shape::FreehandPath {
                points: points.to_vec(),
                style: tools.shape_style(),
            }
        } else {
            build_shape(tools, *start, *end)
        };
        document.set_preview(Some(preview));
        GestureOutcome::PreviewUpdated
    }

    pub fn pointer_up(
        &mut self,
        _pos: Point,
        tools: &ToolState,
        document: &mut Document,
    ) -> GestureOutcome {
        let GestureState::Drawing { start, end, points } = std::mem::take(&mut self.state) else {
            log::debug!("pointer up without a gesture, ignoring");
            return GestureOutcome::Ignored;
        };
        document.clear_preview();

        if tools.tool().is_freehand() {
            if points.len() < MIN_FREEHAND_POINTS {
                log::debug!("discarding freehand gesture with {} point(s)", points.len());
                return GestureOutcome::Discarded;
            }
            document.append(Shape::FreehandPath {
                points,
                style: tools.shape_style(),
            });
        } else {
            document.append(build_shape(tools, start, end));
        }

        log::debug!("committed {} shape, {} total", tools.tool().name(), document.len());
        GestureOutcome::Committed
    }

    /// Drops any gesture in progress without committing it
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Builds the shape dragged from `start` to `end` with a two-corner tool
fn build_shape(tools: &ToolState, start: Point, end: Point) -> Shape {
    let style = tools.shape_style();
    let bounds = BoundingBox::from_corners(start, end);
    match tools.tool() {
        Tool::Line => Shape::LineSegment { start, end, style },
        Tool::Rectangle => Shape::Rect { bounds, style },
        Tool::Oval => Shape::Oval { bounds, style },
        Tool::RoundRect => Shape::RoundRect { bounds, style },
        // not reached for freehand tools, which build their path from the running points
        Tool::Pen | Tool::Eraser => Shape::FreehandPath {
            points: vec![start, end],
            style,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    fn tools(tool: Tool) -> ToolState {
        let mut tools = ToolState::new();
        tools.set_current_tool(tool);
        tools
    }

    #[test]
    fn move_and_up_are_ignored_when_idle() {
        let mut gesture = GestureStateMachine::new();
        let mut doc = Document::new();
        let tools = tools(Tool::Pen);
        assert_eq!(gesture.pointer_move(pos2(1.0, 1.0), &tools, &mut doc), GestureOutcome::Ignored);
        assert_eq!(gesture.pointer_up(pos2(1.0, 1.0), &tools, &mut doc), GestureOutcome::Ignored);
        assert!(doc.is_empty());
        assert!(doc.preview().is_none());
    }

    #[test]
    fn second_down_does_not_restart_gesture() {
        let mut gesture = GestureStateMachine::new();
        let tools = tools(Tool::Line);
        gesture.pointer_down(pos2(1.0, 1.0), &tools);
        assert_eq!(gesture.pointer_down(pos2(9.0, 9.0), &tools), GestureOutcome::Ignored);
        match gesture.state() {
            GestureState::Drawing { start, .. } => assert_eq!(*start, pos2(1.0, 1.0)),
            GestureState::Idle => panic!("expected drawing"),
        }
    }

    #[test]
    fn freehand_preview_snapshots_running_points() {
        let mut gesture = GestureStateMachine::new();
        let mut doc = Document::new();
        let tools = tools(Tool::Pen);
        gesture.pointer_down(pos2(0.0, 0.0), &tools);
        gesture.pointer_move(pos2(1.0, 0.0), &tools, &mut doc);
        gesture.pointer_move(pos2(2.0, 0.0), &tools, &mut doc);

        let Some(Shape::FreehandPath { points, .. }) = doc.preview() else {
            panic!("expected freehand preview");
        };
        assert_eq!(points, &[pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(2.0, 0.0)]);
        assert_eq!(gesture.running_points().len(), 3);
    }

    #[test]
    fn shape_tools_keep_no_running_points() {
        let mut gesture = GestureStateMachine::new();
        let mut doc = Document::new();
        let tools = tools(Tool::Oval);
        gesture.pointer_down(pos2(0.0, 0.0), &tools);
        gesture.pointer_move(pos2(4.0, 6.0), &tools, &mut doc);
        assert!(gesture.running_points().is_empty());
        assert!(matches!(doc.preview(), Some(Shape::Oval { .. })));
    }

    #[test]
    fn eraser_commits_background_colored_path() {
        let mut gesture = GestureStateMachine::new();
        let mut doc = Document::new();
        let tools = tools(Tool::Eraser);
        gesture.pointer_down(pos2(0.0, 0.0), &tools);
        gesture.pointer_move(pos2(3.0, 3.0), &tools, &mut doc);
        assert_eq!(gesture.pointer_up(pos2(3.0, 3.0), &tools, &mut doc), GestureOutcome::Committed);
        assert_eq!(doc.shapes()[0].style().color, Color32::WHITE);
    }

    #[test]
    fn degenerate_round_rect_is_committed() {
        let mut gesture = GestureStateMachine::new();
        let mut doc = Document::new();
        let tools = tools(Tool::RoundRect);
        gesture.pointer_down(pos2(7.0, 7.0), &tools);
        assert_eq!(gesture.pointer_up(pos2(7.0, 7.0), &tools, &mut doc), GestureOutcome::Committed);
        let Shape::RoundRect { bounds, .. } = &doc.shapes()[0] else {
            panic!("expected round rect");
        };
        assert_eq!(bounds.width, 0.0);
        assert_eq!(bounds.height, 0.0);
    }

    #[test]
    fn reset_abandons_gesture() {
        let mut gesture = GestureStateMachine::new();
        let tools = tools(Tool::Pen);
        gesture.pointer_down(pos2(0.0, 0.0), &tools);
        gesture.reset();
        assert!(!gesture.is_drawing());
        assert_eq!(gesture.current_state_name(), "Idle");
    }
}
