use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, pos2};
use shape_paint::stroke::{LineCap, LineJoin};
use shape_paint::{
    BrushStyle, BrushTip, Canvas, CanvasConfig, CanvasEvent, EventHandler, InputEvent,
    InputHandler, InputLocation, Shape, Tool, ToolState, compute_stroke,
};

struct Recorder(Rc<RefCell<Vec<CanvasEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &CanvasEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn recorded_canvas() -> (Canvas, Rc<RefCell<Vec<CanvasEvent>>>) {
    let canvas = Canvas::new();
    let events = Rc::new(RefCell::new(Vec::new()));
    canvas.subscribe(Box::new(Recorder(events.clone())));
    (canvas, events)
}

#[test]
fn eraser_ignores_new_draw_color() {
    let mut canvas = Canvas::new();
    canvas.select_tool(Tool::Eraser);
    canvas.set_color(Some(Color32::RED));

    let tools = canvas.tool_state();
    assert_eq!(tools.active_color(), tools.background_color());
    assert_eq!(tools.draw_color(), Color32::RED);
}

#[test]
fn pen_tracks_new_draw_color() {
    let mut canvas = Canvas::new();
    canvas.select_tool(Tool::Pen);
    canvas.set_color(Some(Color32::RED));
    assert_eq!(canvas.tool_state().active_color(), Color32::RED);
}

#[test]
fn cancelled_color_emits_nothing() {
    let (mut canvas, events) = recorded_canvas();
    canvas.set_color(None);
    assert!(events.borrow().is_empty());
    assert_eq!(canvas.tool_state().draw_color(), Color32::BLACK);
}

#[test]
fn use_pen_and_use_eraser_ignore_current_tool() {
    let mut canvas = Canvas::new();
    canvas.select_tool(Tool::Rectangle);
    canvas.use_eraser();
    assert_eq!(canvas.tool_state().active_color(), Color32::WHITE);
    canvas.select_tool(Tool::Eraser);
    canvas.use_pen();
    assert_eq!(canvas.tool_state().active_color(), Color32::BLACK);
}

#[test]
fn brush_size_is_clamped_not_rejected() {
    let mut canvas = Canvas::new();
    canvas.set_brush_size(1000);
    assert_eq!(canvas.tool_state().size(), 100);
    canvas.set_brush_size(0);
    assert_eq!(canvas.tool_state().size(), 1);
}

#[test]
fn stroke_descriptors_match_brush_rules() {
    let square_solid = compute_stroke(BrushTip::Square, BrushStyle::Solid, 7);
    assert!(square_solid.dash.is_none());
    assert_eq!(square_solid.cap, LineCap::Square);

    let round_dotted = compute_stroke(BrushTip::Round, BrushStyle::Dotted, 4);
    assert_eq!(round_dotted.dash, Some([4.0, 8.0]));
    assert_eq!(round_dotted.cap, LineCap::Round);
    assert_eq!(round_dotted.join, LineJoin::Round);
}

#[test]
fn gesture_events_request_repaints() {
    let (mut canvas, events) = recorded_canvas();
    canvas.pointer_down(pos2(0.0, 0.0));
    assert!(events.borrow().is_empty());

    canvas.pointer_move(pos2(2.0, 2.0));
    canvas.pointer_up(pos2(2.0, 2.0));
    canvas.pointer_down(pos2(5.0, 5.0));
    canvas.pointer_up(pos2(5.0, 5.0));
    canvas.clear();

    let events = events.borrow();
    assert_eq!(
        *events,
        vec![
            CanvasEvent::PreviewUpdated,
            CanvasEvent::ShapeCommitted { index: 0, kind: "freehand" },
            CanvasEvent::GestureDiscarded,
            CanvasEvent::Cleared,
        ]
    );
    assert!(events.iter().all(CanvasEvent::needs_repaint));
}

#[test]
fn settings_changes_are_announced_without_repaint() {
    let (mut canvas, events) = recorded_canvas();
    canvas.select_tool(Tool::Oval);
    canvas.set_brush_tip(BrushTip::Square);

    let events = events.borrow();
    assert_eq!(events[0], CanvasEvent::ToolChanged { tool: Tool::Oval });
    assert_eq!(
        events[1],
        CanvasEvent::BrushChanged {
            size: 5,
            tip: BrushTip::Square,
            style: BrushStyle::Solid,
        }
    );
    assert!(!events.iter().any(CanvasEvent::needs_repaint));
}

#[test]
fn input_events_drive_gestures() {
    let mut canvas = Canvas::new();
    canvas.select_tool(Tool::Line);
    let at = |x: f32, y: f32| InputLocation {
        position: pos2(x, y),
        is_in_canvas: true,
    };

    canvas.handle_input(&InputEvent::PointerDown { location: at(1.0, 1.0) });
    canvas.handle_input(&InputEvent::PointerMove { location: at(6.0, 1.0) });
    canvas.handle_input(&InputEvent::PointerUp { location: at(6.0, 1.0) });

    assert_eq!(canvas.document().len(), 1);
    assert_eq!(canvas.document().shapes()[0].kind(), "line");
}

#[test]
fn release_without_pointer_position_commits_shape() {
    let mut canvas = Canvas::new();
    canvas.select_tool(Tool::Line);
    let mut input = InputHandler::new(egui::Rect::from_min_size(
        pos2(0.0, 0.0),
        egui::vec2(200.0, 200.0),
    ));

    // touch: the release frame has no pointer position
    let frames = [
        (Some(pos2(10.0, 10.0)), true, false),
        (Some(pos2(50.0, 10.0)), false, false),
        (None, false, true),
        (Some(pos2(120.0, 120.0)), true, false),
    ];
    for (pos, pressed, released) in frames {
        for event in input.process_pointer(pos, pressed, released) {
            canvas.handle_input(&event);
        }
    }

    let shapes = canvas.document().shapes();
    assert_eq!(shapes.len(), 1);
    let Shape::LineSegment { start, end, .. } = &shapes[0] else {
        panic!("expected line, got {:?}", shapes[0]);
    };
    assert_eq!((*start, *end), (pos2(10.0, 10.0), pos2(50.0, 10.0)));

    // the next touch opened a fresh gesture
    assert!(canvas.gesture().is_drawing());
    assert!(canvas.document().preview().is_none());
}

#[test]
fn config_seeds_tool_state() {
    let config = CanvasConfig::from_json(
        r#"{ "tool": "Eraser", "brush_size": 250, "background_color": [10, 20, 30, 255] }"#,
    )
    .unwrap();
    let canvas = Canvas::from_config(&config);
    let tools = canvas.tool_state();

    assert_eq!(tools.tool(), Tool::Eraser);
    assert_eq!(tools.size(), 100);
    assert_eq!(tools.active_color(), Color32::from_rgb(10, 20, 30));
    assert_eq!(*tools, ToolState::from_config(&config));
}
