//! Shape definitions for the drawing surface.
//!
//! The shape family is closed: drawing code dispatches over [`Shape`] with
//! exhaustive matches rather than trait objects. All leaf shapes are
//! immutable value records; [`Path`] is the one mutable builder. Shape
//! rotations are in degrees, applied about the shape's own anchor point
//! (degrees is the external convention, matching persisted shape data).

mod arc;
mod curve;
mod ellipse;
mod line;
mod path;
mod quad;
mod text;

pub use arc::Arc;
pub use curve::Curve;
pub use ellipse::Ellipse;
pub use line::Line;
pub use path::{ArcStep, Path, PathStep};
pub use quad::Quad;
pub use text::Text;

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The type tag of a shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Line,
    Arc,
    Ellipse,
    Quad,
    Curve,
    Text,
    Path,
}

/// Any drawable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Arc(Arc),
    Ellipse(Ellipse),
    Quad(Quad),
    Curve(Curve),
    Text(Text),
    Path(Path),
}

impl Shape {
    /// The variant tag.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Arc(_) => ShapeType::Arc,
            Shape::Ellipse(_) => ShapeType::Ellipse,
            Shape::Quad(_) => ShapeType::Quad,
            Shape::Curve(_) => ShapeType::Curve,
            Shape::Text(_) => ShapeType::Text,
            Shape::Path(_) => ShapeType::Path,
        }
    }

    /// The anchor point the shape's own rotation is applied about.
    pub fn anchor(&self) -> Point {
        match self {
            Shape::Line(s) => s.start,
            Shape::Arc(s) => s.center,
            Shape::Ellipse(s) => s.center,
            Shape::Quad(s) => s.start,
            Shape::Curve(s) => s.start,
            Shape::Text(s) => s.anchor,
            Shape::Path(s) => s.anchor,
        }
    }

    /// The shape's own rotation in degrees.
    pub fn rotate(&self) -> f64 {
        match self {
            Shape::Line(s) => s.rotate,
            Shape::Arc(s) => s.rotate,
            Shape::Ellipse(s) => s.rotate,
            Shape::Quad(s) => s.rotate,
            Shape::Curve(s) => s.rotate,
            Shape::Text(s) => s.rotate,
            Shape::Path(s) => s.rotate,
        }
    }
}

impl From<Line> for Shape {
    fn from(shape: Line) -> Self {
        Shape::Line(shape)
    }
}

impl From<Arc> for Shape {
    fn from(shape: Arc) -> Self {
        Shape::Arc(shape)
    }
}

impl From<Ellipse> for Shape {
    fn from(shape: Ellipse) -> Self {
        Shape::Ellipse(shape)
    }
}

impl From<Quad> for Shape {
    fn from(shape: Quad) -> Self {
        Shape::Quad(shape)
    }
}

impl From<Curve> for Shape {
    fn from(shape: Curve) -> Self {
        Shape::Curve(shape)
    }
}

impl From<Text> for Shape {
    fn from(shape: Text) -> Self {
        Shape::Text(shape)
    }
}

impl From<Path> for Shape {
    fn from(shape: Path) -> Self {
        Shape::Path(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_type_tags() {
        let shape: Shape = Line::new(0.0, 0.0, 1.0, 1.0).into();
        assert_eq!(shape.shape_type(), ShapeType::Line);

        let shape: Shape = Ellipse::new(0.0, 0.0, 2.0, 1.0).into();
        assert_eq!(shape.shape_type(), ShapeType::Ellipse);

        let shape: Shape = Path::new(0.0, 0.0).into();
        assert_eq!(shape.shape_type(), ShapeType::Path);
    }

    #[test]
    fn test_anchor_per_variant() {
        let shape: Shape = Line::new(1.0, 2.0, 3.0, 4.0).into();
        assert_eq!(shape.anchor(), Point::new(1.0, 2.0));

        let shape: Shape = Arc::new(5.0, 6.0, 1.0, 1.0, 0.0, 0.0, 90.0).into();
        assert_eq!(shape.anchor(), Point::new(5.0, 6.0));

        let shape: Shape = Text::new("hi", 7.0, 8.0, 1.0).into();
        assert_eq!(shape.anchor(), Point::new(7.0, 8.0));
    }
}
