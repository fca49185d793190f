//! Visual themes: one style rule per block kind plus page decoration.
//!
//! The registry is built once at startup and is read-only afterwards, so it can
//! be shared across requests behind an `Arc` without locking.

pub mod builtin;
pub mod style;

use serde::Serialize;

use crate::compose::BlockKind;
use crate::errors::AppError;

pub use style::{Border, BorderSides, PageDecoration, Rgb, StyleRule, TextAlign};

/// A named theme. Holds exactly one rule for every [`BlockKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    id: String,
    /// Indexed by [`BlockKind::index`].
    rules: Vec<StyleRule>,
    pub decoration: PageDecoration,
}

impl Template {
    /// Builds a template from `(kind, rule)` pairs.
    ///
    /// Fails with `IncompleteTemplate` if some kind has no rule. A kind listed
    /// twice keeps its last rule.
    pub fn new(
        id: impl Into<String>,
        rules: impl IntoIterator<Item = (BlockKind, StyleRule)>,
        decoration: PageDecoration,
    ) -> Result<Self, AppError> {
        let id = id.into();
        let mut slots: Vec<Option<StyleRule>> = vec![None; BlockKind::ALL.len()];
        for (kind, rule) in rules {
            slots[kind.index()] = Some(rule);
        }

        let mut resolved = Vec::with_capacity(slots.len());
        for (kind, slot) in BlockKind::ALL.iter().zip(slots) {
            match slot {
                Some(rule) => resolved.push(rule),
                None => {
                    return Err(AppError::IncompleteTemplate {
                        template: id,
                        kind: *kind,
                    })
                }
            }
        }

        Ok(Template {
            id,
            rules: resolved,
            decoration,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Localization key of the template's display name.
    pub fn label_key(&self) -> String {
        format!("template_{}", self.id)
    }

    pub fn style_for(&self, kind: BlockKind) -> &StyleRule {
        &self.rules[kind.index()]
    }
}

/// Immutable set of templates, in registration order.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Registers `classic`, `modern` and `creative`.
    pub fn builtin() -> Result<Self, AppError> {
        Ok(TemplateRegistry {
            templates: vec![builtin::classic()?, builtin::modern()?, builtin::creative()?],
        })
    }

    pub fn get_template(&self, id: &str) -> Result<&Template, AppError> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::UnknownTemplate(id.to_string()))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(Template::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }
}
