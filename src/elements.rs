//! Custom element implementations built on top of `genpdf` primitives.
//!
//! The upstream crate ships paragraphs, lists and line breaks; the guide's
//! page decoration additionally needs a horizontal rule, and its layout uses
//! fixed-height gaps rather than line-based breaks.  Both are implemented
//! here against the regular [`Element`] rendering contract.

use genpdf::error::Error;
use genpdf::style::{Color, Style};
use genpdf::{render, Element, Mm, Position, RenderResult, Size};

const DEFAULT_RULE_THICKNESS_MM: f64 = 0.18;

fn mm_from_f64(value: f64) -> Mm {
    Mm::from(printpdf::Mm(value))
}

/// A thin horizontal rule spanning the full width of the available area.
pub struct Rule {
    color: Color,
    thickness: Mm,
}

impl Rule {
    /// Creates a rule with the given color and the default thickness.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            thickness: mm_from_f64(DEFAULT_RULE_THICKNESS_MM),
        }
    }

    /// Sets the stroke thickness and returns the updated rule.
    pub fn with_thickness(mut self, thickness: impl Into<Mm>) -> Self {
        self.thickness = thickness.into();
        self
    }
}

impl Element for Rule {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let mut result = RenderResult::default();
        if self.thickness > area.size().height {
            result.has_more = true;
            return Ok(result);
        }

        let width = area.size().width;
        let y = self.thickness / 2.0;
        let line_style = Style::new().with_color(self.color);
        area.draw_line(
            vec![Position::new(0, y), Position::new(width, y)],
            line_style,
        );

        result.size = Size::new(width, self.thickness);
        Ok(result)
    }
}

/// A fixed-height vertical gap.
///
/// Unlike [`genpdf::elements::Break`], which is measured in line heights of
/// the current style, the gap is given in millimetres so spacing stays
/// independent of the surrounding text size.
pub struct Spacer {
    height: Mm,
}

impl Spacer {
    /// Creates a spacer of the given height.
    pub fn new(height: impl Into<Mm>) -> Self {
        Self {
            height: height.into(),
        }
    }
}

impl Element for Spacer {
    fn render(
        &mut self,
        _context: &genpdf::Context,
        area: render::Area<'_>,
        _style: Style,
    ) -> Result<RenderResult, Error> {
        let available = area.size().height;
        let height = if self.height > available {
            available
        } else {
            self.height
        };

        let mut result = RenderResult::default();
        result.size = Size::new(0, height);
        Ok(result)
    }
}

/// Converts a millimetre count into the `Mm` unit used by the layout crate.
pub fn mm(value: f64) -> Mm {
    mm_from_f64(value)
}
