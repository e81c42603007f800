#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod geometry;
pub mod gesture;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod stroke;
pub mod tool;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use config::CanvasConfig;
pub use document::Document;
pub use error::{ConfigError, ConfigResult};
pub use event::{CanvasEvent, EventBus, EventHandler};
pub use gesture::{GestureOutcome, GestureStateMachine};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::Renderer;
pub use shape::{BoundingBox, Point, Shape, ShapeStyle};
pub use stroke::{BrushStyle, BrushTip, StrokeDescriptor, compute_stroke};
pub use tool::{Tool, ToolState};
