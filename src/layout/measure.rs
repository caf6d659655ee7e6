use crate::font::Font;
use crate::units::Pt;

/// Anything that can tell how wide a string renders. Layout never constructs one of
/// these itself; the caller supplies it, and it is expected to be pure: the same
/// string must always measure the same.
///
/// Closures implement this directly, which is the easiest way to lay text out against
/// something other than a [Font]:
///
/// ```
/// use pdf_justify::layout::Measure;
/// use pdf_justify::Pt;
///
/// let monospace = |text: &str| Pt(text.chars().count() as f32 * 6.0);
/// assert_eq!(monospace.measure("abc"), Pt(18.0));
/// ```
pub trait Measure {
    /// The rendered width of `text`
    fn measure(&self, text: &str) -> Pt;
}

impl<F> Measure for F
where
    F: Fn(&str) -> Pt,
{
    fn measure(&self, text: &str) -> Pt {
        self(text)
    }
}

/// Measures text by summing the horizontal advances of a [Font]'s glyphs at a given
/// size. Obtained through [Font::measure].
#[derive(Copy, Clone)]
pub struct FontMeasure<'f> {
    font: &'f Font,
    size: Pt,
}

impl<'f> FontMeasure<'f> {
    pub fn new(font: &'f Font, size: Pt) -> FontMeasure<'f> {
        FontMeasure { font, size }
    }

    pub fn size(&self) -> Pt {
        self.size
    }
}

impl Measure for FontMeasure<'_> {
    fn measure(&self, text: &str) -> Pt {
        self.font.width_of_text(text, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_measure() {
        let per_char = |text: &str| Pt(text.len() as f32);
        assert_eq!(per_char.measure(""), Pt(0.0));
        assert_eq!(per_char.measure("The quick"), Pt(9.0));
    }

    #[test]
    fn references_to_measures_measure() {
        fn width_of<M: Measure + ?Sized>(measure: &M, text: &str) -> Pt {
            measure.measure(text)
        }

        let per_char = |text: &str| Pt(text.len() as f32 * 2.0);
        let dynamic: &dyn Measure = &per_char;
        assert_eq!(width_of(dynamic, "fox"), Pt(6.0));
    }
}
