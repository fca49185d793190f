use serde::{Deserialize, Serialize};

use crate::layout::font_metrics::FontFamily;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Components scaled to 0.0..=1.0 as PDF color operators expect.
    pub fn components(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
}

/// Which edges of a block's box get stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderSides {
    Box,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub width: f32,
    pub color: Rgb,
    pub sides: BorderSides,
}

/// How one block kind looks under a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    pub font: FontFamily,
    pub font_size: f32,
    pub color: Rgb,
    /// Line height as a multiple of the font size.
    pub leading: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub align: TextAlign,
    /// Inset between the block's box and its text, on every side.
    pub padding: f32,
    pub border: Option<Border>,
    pub background: Option<Rgb>,
    pub uppercase: bool,
}

impl StyleRule {
    /// Plain left-aligned text with no box; the starting point of every rule.
    pub fn text(font: FontFamily, font_size: f32, color: Rgb) -> Self {
        StyleRule {
            font,
            font_size,
            color,
            leading: 1.2,
            space_before: 0.0,
            space_after: 0.0,
            align: TextAlign::Left,
            padding: 0.0,
            border: None,
            background: None,
            uppercase: false,
        }
    }

    pub fn line_height(&self) -> f32 {
        self.font_size * self.leading
    }

    pub fn spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }

    pub fn boxed(mut self, border: Border, padding: f32) -> Self {
        self.border = Some(border);
        self.padding = padding;
        self
    }

    pub fn filled(mut self, background: Rgb, padding: f32) -> Self {
        self.background = Some(background);
        self.padding = padding;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Applies the rule's text transform.
    pub fn transform(&self, text: &str) -> String {
        if self.uppercase {
            text.to_uppercase()
        } else {
            text.to_string()
        }
    }
}

/// Page-level ornaments drawn outside the content area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PageDecoration {
    /// Draw "page / total" centered in the bottom margin.
    pub page_numbers: bool,
    /// Solid bar along the left page edge.
    pub accent_bar: Option<Rgb>,
}
