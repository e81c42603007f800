use crate::shape::Shape;

/// The drawing: committed shapes in draw order plus the in-progress preview.
///
/// Later shapes paint over earlier ones. The document trusts its caller and
/// does no validation of its own.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
    preview: Option<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            preview: None,
        }
    }

    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn set_preview(&mut self, preview: Option<Shape>) {
        self.preview = preview;
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Removes every shape and the preview
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.preview = None;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn preview(&self) -> Option<&Shape> {
        self.preview.as_ref()
    }

    pub fn last_shape(&self) -> Option<&Shape> {
        self.shapes.last()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
