use crate::units::*;

/// A rectangle, specified by two opposite corners in PDF user space (y grows upwards).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the lower-left corner.
    pub x1: Pt,
    /// The y-coordinate of the lower-left corner.
    pub y1: Pt,
    /// The x-coordinate of the upper-right corner.
    pub x2: Pt,
    /// The y-coordinate of the upper-right corner.
    pub y2: Pt,
}

impl Rect {
    pub fn new(x1: Pt, y1: Pt, x2: Pt, y2: Pt) -> Rect {
        Rect { x1, y1, x2, y2 }
    }

    /// Horizontal extent. Negative if the corners are swapped.
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    /// Vertical extent. Negative if the corners are swapped.
    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// The upper-left corner, where a block of text starts
    pub fn top_left(&self) -> (Pt, Pt) {
        (self.x1, self.y2)
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1.into(),
            y1: r.y1.into(),
            x2: r.x2.into(),
            y2: r.y2.into(),
        }
    }
}
