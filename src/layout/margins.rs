use crate::rect::Rect;
use crate::units::Pt;

/// Space to leave empty around the edges of a [Page](crate::Page). Applying margins to a
/// page determines its content box, which is the area text blocks are usually given to
/// fill. Nothing stops content from being placed outside the margins.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components clockwise from the top, the
    /// same order as CSS margins
    pub fn trbl<D: Into<Pt>>(top: D, right: D, bottom: D, left: D) -> Margins {
        Margins {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins with one value for top and bottom and another for left and right
    pub fn symmetric<D: Into<Pt>>(vertical: D, horizontal: D) -> Margins {
        let vertical: Pt = vertical.into();
        let horizontal: Pt = horizontal.into();
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }

    /// Shrink `area` by these margins
    pub fn inset(&self, area: Rect) -> Rect {
        Rect {
            x1: area.x1 + self.left,
            y1: area.y1 + self.bottom,
            x2: area.x2 - self.right,
            y2: area.y2 - self.top,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::In;

    #[test]
    fn inset_shrinks_each_side() {
        let area = Rect::new(Pt(0.0), Pt(0.0), Pt(612.0), Pt(792.0));
        let inner = Margins::trbl(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0)).inset(area);
        assert_eq!(inner, Rect::new(Pt(40.0), Pt(30.0), Pt(592.0), Pt(782.0)));
    }

    #[test]
    fn margins_accept_any_unit() {
        assert_eq!(Margins::all(In(1.0)), Margins::all(Pt(72.0)));
        assert_eq!(
            Margins::symmetric(In(0.5), In(1.0)),
            Margins::trbl(Pt(36.0), Pt(72.0), Pt(36.0), Pt(72.0))
        );
    }
}
