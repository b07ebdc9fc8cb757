//! Input collaborators.

use crate::domain::{Dimensions, ShapeKind};

/// Supplies the current selection and the four raw dimensions on demand.
pub trait InputSource {
    /// `None` when nothing recognisable is selected.
    fn shape(&self) -> Option<ShapeKind>;
    fn length(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn radius(&self) -> f64;

    fn dimensions(&self) -> Dimensions {
        Dimensions {
            length: self.length(),
            width: self.width(),
            height: self.height(),
            radius: self.radius(),
        }
    }
}

/// A fixed selection, e.g. one built from command-line flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticInput {
    pub shape: Option<ShapeKind>,
    pub dimensions: Dimensions,
}

impl StaticInput {
    pub fn new(shape: Option<ShapeKind>, dimensions: Dimensions) -> Self {
        Self { shape, dimensions }
    }
}

impl InputSource for StaticInput {
    fn shape(&self) -> Option<ShapeKind> {
        self.shape
    }

    fn length(&self) -> f64 {
        self.dimensions.length
    }

    fn width(&self) -> f64 {
        self.dimensions.width
    }

    fn height(&self) -> f64 {
        self.dimensions.height
    }

    fn radius(&self) -> f64 {
        self.dimensions.radius
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }
}
