//! The three built-in themes.
//!
//! Every theme gives each block kind its own rule; no two themes share a rule
//! for the same kind.

use crate::compose::BlockKind;
use crate::errors::AppError;
use crate::layout::font_metrics::FontFamily;
use crate::templates::style::{Border, BorderSides, PageDecoration, Rgb, StyleRule};
use crate::templates::Template;

/// Serif, centered title, boxed section headings.
pub(crate) fn classic() -> Result<Template, AppError> {
    let ink = Rgb::new(0x2C, 0x3E, 0x50);
    let heading_ink = Rgb::new(0x34, 0x49, 0x5E);
    let rule_grey = Rgb::new(0xBD, 0xC3, 0xC7);

    Template::new(
        "classic",
        [
            (
                BlockKind::Title,
                StyleRule::text(FontFamily::TimesBold, 20.0, ink)
                    .spacing(0.0, 12.0)
                    .centered(),
            ),
            (
                BlockKind::ContactLine,
                StyleRule::text(FontFamily::TimesRoman, 10.0, Rgb::BLACK)
                    .spacing(0.0, 6.0)
                    .centered(),
            ),
            (
                BlockKind::SectionHeading,
                StyleRule::text(FontFamily::TimesBold, 14.0, heading_ink)
                    .spacing(12.0, 6.0)
                    .boxed(
                        Border {
                            width: 1.0,
                            color: rule_grey,
                            sides: BorderSides::Box,
                        },
                        5.0,
                    ),
            ),
            (
                BlockKind::BodyText,
                StyleRule::text(FontFamily::TimesRoman, 10.0, Rgb::BLACK).spacing(0.0, 6.0),
            ),
            (
                BlockKind::EmphasisLine,
                StyleRule::text(FontFamily::TimesBold, 10.0, Rgb::BLACK).spacing(0.0, 6.0),
            ),
            (
                BlockKind::Spacer,
                StyleRule::text(FontFamily::TimesRoman, 10.0, Rgb::BLACK),
            ),
        ],
        PageDecoration::default(),
    )
}

/// Sans-serif, blue accents, underlined upper-case headings, page numbers.
pub(crate) fn modern() -> Result<Template, AppError> {
    let accent = Rgb::new(0x25, 0x63, 0xEB);
    let slate = Rgb::new(0x1F, 0x29, 0x37);
    let muted = Rgb::new(0x4B, 0x55, 0x63);

    Template::new(
        "modern",
        [
            (
                BlockKind::Title,
                StyleRule::text(FontFamily::HelveticaBold, 24.0, slate).spacing(0.0, 6.0),
            ),
            (
                BlockKind::ContactLine,
                StyleRule::text(FontFamily::Helvetica, 9.0, accent).spacing(0.0, 4.0),
            ),
            (
                BlockKind::SectionHeading,
                StyleRule::text(FontFamily::HelveticaBold, 12.0, accent)
                    .spacing(14.0, 8.0)
                    .uppercase()
                    .boxed(
                        Border {
                            width: 1.5,
                            color: accent,
                            sides: BorderSides::Bottom,
                        },
                        2.0,
                    ),
            ),
            (
                BlockKind::BodyText,
                StyleRule::text(FontFamily::Helvetica, 10.0, muted)
                    .spacing(0.0, 6.0)
                    .leading(1.35),
            ),
            (
                BlockKind::EmphasisLine,
                StyleRule::text(FontFamily::HelveticaBold, 10.5, slate).spacing(2.0, 3.0),
            ),
            (
                BlockKind::Spacer,
                StyleRule::text(FontFamily::Helvetica, 10.0, muted).spacing(0.0, 2.0),
            ),
        ],
        PageDecoration {
            page_numbers: true,
            accent_bar: None,
        },
    )
}

/// Bold purple title, tinted heading bands, accent bar on every page.
pub(crate) fn creative() -> Result<Template, AppError> {
    let plum = Rgb::new(0x8E, 0x44, 0xAD);
    let band = Rgb::new(0xF4, 0xEC, 0xF7);
    let coral = Rgb::new(0xE7, 0x4C, 0x3C);
    let charcoal = Rgb::new(0x2D, 0x34, 0x36);

    Template::new(
        "creative",
        [
            (
                BlockKind::Title,
                StyleRule::text(FontFamily::HelveticaBold, 28.0, plum)
                    .spacing(0.0, 4.0)
                    .uppercase(),
            ),
            (
                BlockKind::ContactLine,
                StyleRule::text(FontFamily::Courier, 8.5, charcoal).spacing(2.0, 8.0),
            ),
            (
                BlockKind::SectionHeading,
                StyleRule::text(FontFamily::HelveticaBold, 13.0, plum)
                    .spacing(16.0, 6.0)
                    .filled(band, 4.0),
            ),
            (
                BlockKind::BodyText,
                StyleRule::text(FontFamily::TimesRoman, 10.5, charcoal)
                    .spacing(0.0, 5.0)
                    .leading(1.3),
            ),
            (
                BlockKind::EmphasisLine,
                StyleRule::text(FontFamily::HelveticaBold, 10.0, coral).spacing(1.0, 2.0),
            ),
            (
                BlockKind::Spacer,
                StyleRule::text(FontFamily::TimesRoman, 10.5, charcoal).spacing(0.0, 4.0),
            ),
        ],
        PageDecoration {
            page_numbers: true,
            accent_bar: Some(plum),
        },
    )
}
