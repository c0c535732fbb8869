//! The fixed style catalog of the guide.
//!
//! Sizes, leadings and colors mirror the published document.  Leading is
//! expressed as a `genpdf` line-spacing factor and vertical spacing as
//! millimetres; the font family itself lives on the document, so styles only
//! toggle the bold variant.

use genpdf::style::{Color, Style};

use crate::model::StyleName;

/// Near-black used for the title and headings.
pub const INK: Color = Color::Rgb(0x0F, 0x17, 0x2A);
/// Slightly lighter ink for body text.
pub const BODY_INK: Color = Color::Rgb(0x0B, 0x12, 0x20);
/// Muted slate for the subtitle.
pub const SLATE: Color = Color::Rgb(0x33, 0x41, 0x55);
/// Muted grey for captions.
pub const MUTED: Color = Color::Rgb(0x64, 0x74, 0x8B);
/// Light grey for the header and footer rules.
pub const RULE: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
/// Grey used for the running header and footer text.
pub const DECORATION_TEXT: Color = Color::Rgb(0x47, 0x55, 0x69);
/// Border color of note callout boxes.
pub const NOTE_BORDER: Color = Color::Rgb(0xCB, 0xD5, 0xE1);

/// Font size of the running header and footer text, in points.
pub const DECORATION_FONT_SIZE: u8 = 9;

/// Converts a length in points to millimetres.
pub fn pt_to_mm(points: f64) -> f64 {
    points * 25.4 / 72.0
}

/// A named style resolved to its layout attributes.
#[derive(Clone, Debug)]
pub struct BlockStyle {
    text: Style,
    space_before_mm: f64,
    space_after_mm: f64,
}

impl BlockStyle {
    fn new(text: Style, space_before_pt: f64, space_after_pt: f64) -> Self {
        Self {
            text,
            space_before_mm: pt_to_mm(space_before_pt),
            space_after_mm: pt_to_mm(space_after_pt),
        }
    }

    /// Returns the text style applied to the block's content.
    pub fn text(&self) -> Style {
        self.text
    }

    /// Returns the vertical gap inserted before the block, in millimetres.
    pub fn space_before_mm(&self) -> f64 {
        self.space_before_mm
    }

    /// Returns the vertical gap inserted after the block, in millimetres.
    pub fn space_after_mm(&self) -> f64 {
        self.space_after_mm
    }
}

/// The complete set of named styles used by the guide.
#[derive(Clone, Debug)]
pub struct StyleCatalog {
    title: BlockStyle,
    subtitle: BlockStyle,
    heading: BlockStyle,
    body: BlockStyle,
    note: BlockStyle,
    caption: BlockStyle,
    list_item: BlockStyle,
}

impl StyleCatalog {
    /// Builds the catalog from the fixed document constants.
    pub fn new() -> Self {
        Self {
            title: BlockStyle::new(text_style(20, 26.0, Some(INK), true), 0.0, 10.0),
            subtitle: BlockStyle::new(text_style(11, 16.0, Some(SLATE), false), 0.0, 12.0),
            heading: BlockStyle::new(text_style(14, 20.0, Some(INK), true), 14.0, 6.0),
            body: BlockStyle::new(text_style(11, 16.0, Some(BODY_INK), false), 0.0, 6.0),
            note: BlockStyle::new(text_style(10, 14.0, Some(INK), false), 8.0, 10.0),
            caption: BlockStyle::new(text_style(9, 13.0, Some(MUTED), false), 0.0, 0.0),
            list_item: BlockStyle::new(text_style(11, 16.0, None, false), 2.0, 2.0),
        }
    }

    /// Looks up the resolved style for a style name.
    pub fn get(&self, name: StyleName) -> &BlockStyle {
        match name {
            StyleName::Title => &self.title,
            StyleName::Subtitle => &self.subtitle,
            StyleName::Heading => &self.heading,
            StyleName::Body => &self.body,
            StyleName::Note => &self.note,
            StyleName::Caption => &self.caption,
            StyleName::ListItem => &self.list_item,
        }
    }

    /// Style of the running header and footer text.
    pub fn decoration(&self) -> Style {
        text_style(DECORATION_FONT_SIZE, 13.0, Some(DECORATION_TEXT), false)
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn text_style(size: u8, leading_pt: f64, color: Option<Color>, bold: bool) -> Style {
    let mut style = Style::new();
    style.set_font_size(size);
    style.set_line_spacing(leading_pt / f64::from(size));
    if let Some(color) = color {
        style.set_color(color);
    }
    if bold {
        style.set_bold();
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_bold_ink() {
        let catalog = StyleCatalog::new();
        let title = catalog.get(StyleName::Title).text();
        assert!(title.is_bold());
        assert_eq!(title.color(), Some(INK));
        assert_eq!(title.font_size(), 20);
    }

    #[test]
    fn list_items_inherit_color() {
        let catalog = StyleCatalog::new();
        let item = catalog.get(StyleName::ListItem).text();
        assert_eq!(item.color(), None);
        assert!(!item.is_bold());
    }

    #[test]
    fn point_conversion_matches_metric_definition() {
        assert!((pt_to_mm(72.0) - 25.4).abs() < 1e-9);
    }

    #[test]
    fn spacing_is_converted_to_millimetres() {
        let catalog = StyleCatalog::new();
        let heading = catalog.get(StyleName::Heading);
        assert!((heading.space_before_mm() - pt_to_mm(14.0)).abs() < 1e-9);
        assert!((heading.space_after_mm() - pt_to_mm(6.0)).abs() < 1e-9);
    }
}
