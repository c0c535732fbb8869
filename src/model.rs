//! Data structures describing the logical content of the guide.
//!
//! The types in this module form a small, renderer-free model of the
//! document: an ordered sequence of blocks, each referring to a named style
//! from the catalog.  Keeping the model free of `genpdf` types lets the
//! content be authored, inspected and tested without touching the rendering
//! layer.

/// Names of the styles defined by the catalog.
///
/// Blocks reference styles by name; the builder resolves the name against
/// [`crate::styles::StyleCatalog`] when the block is turned into layout
/// elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StyleName {
    /// Document title.
    Title,
    /// Introductory line under the title.
    Subtitle,
    /// Section heading.
    Heading,
    /// Regular body text.
    #[default]
    Body,
    /// Boxed note callout.
    Note,
    /// Small muted caption, used for date ranges.
    Caption,
    /// Entry of an ordered or bulleted list.
    ListItem,
}

/// A paragraph of authored text with an associated style.
///
/// The text may contain the inline markup understood by
/// [`crate::richtext::parse_markup`] (`**bold**`, `*italic*`).  Parsing is
/// deferred to the builder so the model stays plain data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    markup: String,
    style: StyleName,
}

impl TextBlock {
    /// Creates a text block from markup and a style name.
    pub fn new(markup: impl Into<String>, style: StyleName) -> Self {
        Self {
            markup: markup.into(),
            style,
        }
    }

    /// Returns the raw markup text.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns the referenced style name.
    pub fn style(&self) -> StyleName {
        self.style
    }
}

/// A list of authored items rendered as one ordered or bulleted list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListBlock {
    items: Vec<String>,
    style: StyleName,
}

impl ListBlock {
    /// Creates a list block from its items and the per-item style.
    pub fn new<I, S>(items: I, style: StyleName) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            style,
        }
    }

    /// Returns the item markup strings in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the style applied to every item.
    pub fn style(&self) -> StyleName {
        self.style
    }
}

/// One unit of document content.
///
/// The order of blocks in the assembled sequence is significant and fixed at
/// authoring time; the builder consumes them front to back.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Styled paragraph content.
    Paragraph(TextBlock),
    /// Fixed vertical gap, in millimetres.
    Spacer(f64),
    /// Numbered list, counting from 1.
    OrderedList(ListBlock),
    /// Bulleted list.
    BulletList(ListBlock),
}

impl Block {
    /// Convenience helper for building a paragraph block.
    pub fn paragraph(markup: impl Into<String>, style: StyleName) -> Self {
        Self::Paragraph(TextBlock::new(markup, style))
    }

    /// Convenience helper for a vertical gap of `height_mm` millimetres.
    pub fn spacer(height_mm: f64) -> Self {
        Self::Spacer(height_mm)
    }

    /// Convenience helper for a numbered list of list-item styled entries.
    pub fn ordered<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OrderedList(ListBlock::new(items, StyleName::ListItem))
    }

    /// Convenience helper for a bulleted list of list-item styled entries.
    pub fn bulleted<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::BulletList(ListBlock::new(items, StyleName::ListItem))
    }
}

#[cfg(test)]
mod tests {
    use super::{Block, StyleName, TextBlock};

    #[test]
    fn paragraph_helper_keeps_markup_and_style() {
        let block = Block::paragraph("**ФИО** — полностью", StyleName::Body);
        match block {
            Block::Paragraph(text) => {
                assert_eq!(text.markup(), "**ФИО** — полностью");
                assert_eq!(text.style(), StyleName::Body);
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn list_helpers_preserve_item_order() {
        let block = Block::ordered(["первый", "второй", "третий"]);
        match block {
            Block::OrderedList(list) => {
                assert_eq!(list.items(), ["первый", "второй", "третий"]);
                assert_eq!(list.style(), StyleName::ListItem);
            }
            other => panic!("expected ordered list, got {:?}", other),
        }
    }

    #[test]
    fn default_text_block_uses_body_style() {
        assert_eq!(TextBlock::default().style(), StyleName::Body);
    }
}
