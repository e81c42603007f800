use egui::{Context, PointerButton, Pos2, Rect};

use crate::shape::Point;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// Position relative to the canvas top-left, in surface pixels
    pub position: Point,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events delivered to the canvas, primary button only
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { location: InputLocation },
    PointerMove { location: InputLocation },
    PointerUp { location: InputLocation },
}

impl InputEvent {
    pub fn location(&self) -> InputLocation {
        match self {
            InputEvent::PointerDown { location }
            | InputEvent::PointerMove { location }
            | InputEvent::PointerUp { location } => *location,
        }
    }

    pub fn is_in_canvas(&self) -> bool {
        self.location().is_in_canvas
    }
}

/// Handles converting raw egui input into canvas InputEvents
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// Set between an accepted press and its release
    pressed: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Creates an InputLocation from a screen position
    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: (pos - self.canvas_rect.min).to_pos2(),
            is_in_canvas: self.canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input and generate InputEvents.
    ///
    /// Presses outside the canvas are dropped. Once a press was accepted, moves
    /// and the release are reported wherever the pointer goes.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            let pointer = &input.pointer;
            self.process_pointer(
                pointer.latest_pos(),
                pointer.button_pressed(PointerButton::Primary),
                pointer.button_released(PointerButton::Primary),
            )
        })
    }

    /// Core of `process_input`, taking the already sampled pointer state
    pub fn process_pointer(
        &mut self,
        pos: Option<Pos2>,
        pressed: bool,
        released: bool,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(pos) = pos else {
            // touch and web report the release together with the pointer leaving
            if released && self.pressed {
                self.pressed = false;
                if let Some(last) = self.last_pointer_pos {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(last),
                    });
                }
            }
            return events;
        };

        if pressed && !self.pressed {
            let location = self.make_location(pos);
            if location.is_in_canvas {
                self.pressed = true;
                events.push(InputEvent::PointerDown { location });
            }
        } else if self.pressed && Some(pos) != self.last_pointer_pos {
            events.push(InputEvent::PointerMove {
                location: self.make_location(pos),
            });
        }
        self.last_pointer_pos = Some(pos);

        if released && self.pressed {
            self.pressed = false;
            events.push(InputEvent::PointerUp {
                location: self.make_location(pos),
            });
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(200.0, 100.0)))
    }

    #[test]
    fn positions_are_canvas_relative() {
        let mut input = handler();
        let events = input.process_pointer(Some(pos2(110.0, 60.0)), true, false);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].location().position, pos2(10.0, 10.0));
        assert!(events[0].is_in_canvas());
    }

    #[test]
    fn press_outside_canvas_is_dropped() {
        let mut input = handler();
        assert!(input.process_pointer(Some(pos2(5.0, 5.0)), true, false).is_empty());
        assert!(input.process_pointer(Some(pos2(150.0, 60.0)), false, false).is_empty());
        assert!(input.process_pointer(Some(pos2(150.0, 60.0)), false, true).is_empty());
    }

    #[test]
    fn drag_reports_moves_until_release() {
        let mut input = handler();
        input.process_pointer(Some(pos2(110.0, 60.0)), true, false);
        let moved = input.process_pointer(Some(pos2(120.0, 70.0)), false, false);
        assert!(matches!(moved[..], [InputEvent::PointerMove { .. }]));
        // unchanged position gives no move
        assert!(input.process_pointer(Some(pos2(120.0, 70.0)), false, false).is_empty());
        // leaving the canvas keeps the gesture alive
        let outside = input.process_pointer(Some(pos2(400.0, 70.0)), false, true);
        assert!(matches!(
            outside[..],
            [InputEvent::PointerMove { .. }, InputEvent::PointerUp { .. }]
        ));
        assert!(!outside[1].is_in_canvas());
    }

    #[test]
    fn click_in_one_frame_gives_down_then_up() {
        let mut input = handler();
        let events = input.process_pointer(Some(pos2(150.0, 100.0)), true, true);
        assert!(matches!(
            events[..],
            [InputEvent::PointerDown { .. }, InputEvent::PointerUp { .. }]
        ));
    }

    #[test]
    fn release_without_position_still_ends_gesture() {
        let mut input = handler();
        input.process_pointer(Some(pos2(110.0, 60.0)), true, false);
        input.process_pointer(Some(pos2(150.0, 60.0)), false, false);

        let released = input.process_pointer(None, false, true);
        assert_eq!(released.len(), 1);
        let InputEvent::PointerUp { location } = released[0] else {
            panic!("expected pointer up, got {released:?}");
        };
        assert_eq!(location.position, pos2(50.0, 10.0));

        // the next touch starts a new gesture
        let next = input.process_pointer(Some(pos2(220.0, 120.0)), true, false);
        assert!(matches!(next[..], [InputEvent::PointerDown { .. }]));
    }

    #[test]
    fn release_without_position_or_press_is_ignored() {
        let mut input = handler();
        assert!(input.process_pointer(None, false, true).is_empty());
    }
}
