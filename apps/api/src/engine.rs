//! Entry point tying composition, layout and rendering together.
//!
//! An `Engine` is built once at startup. Every method is synchronous, pure and
//! safe to call from many threads at once.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::compose::{compose, Block};
use crate::errors::AppError;
use crate::i18n::{Language, Localizer};
use crate::layout::font_metrics::PageConfig;
use crate::layout::paginate::{paginate, LaidOutDocument};
use crate::models::{filled, Profile};
use crate::render::{self, to_markdown, RenderedCv};
use crate::templates::TemplateRegistry;

/// Blocks plus their Markdown rendition.
#[derive(Debug, Clone, Serialize)]
pub struct Preview {
    pub blocks: Vec<Block>,
    pub markdown: String,
}

#[derive(Debug, Clone)]
pub struct Engine {
    templates: TemplateRegistry,
    labels: Localizer,
    page: PageConfig,
}

impl Engine {
    /// Builds the built-in registries, failing on any configuration defect.
    pub fn builtin(page: PageConfig) -> Result<Self, AppError> {
        let templates = TemplateRegistry::builtin()?;
        let labels = Localizer::builtin()?;
        info!(
            templates = ?templates.ids(),
            page_size = ?page.size,
            "document engine ready"
        );
        Ok(Engine {
            templates,
            labels,
            page,
        })
    }

    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    pub fn labels(&self) -> &Localizer {
        &self.labels
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Turns a profile into blocks. The template id is checked but does not
    /// influence the result.
    pub fn compose(
        &self,
        profile: &Profile,
        language: Language,
        template_id: &str,
    ) -> Result<Vec<Block>, AppError> {
        self.templates.get_template(template_id)?;
        Ok(compose(profile, language, &self.labels))
    }

    pub fn layout(&self, blocks: &[Block], template_id: &str) -> Result<LaidOutDocument, AppError> {
        let template = self.templates.get_template(template_id)?;
        Ok(paginate(blocks, template, &self.page))
    }

    /// Renders already composed blocks to PDF bytes.
    pub fn render(&self, blocks: &[Block], template_id: &str) -> Result<Vec<u8>, AppError> {
        let template = self.templates.get_template(template_id)?;
        let (bytes, _) = render::render(blocks, template, &self.page)?;
        Ok(bytes)
    }

    /// Composes and renders in one go, naming the file after the profile and `today`.
    pub fn render_cv(
        &self,
        profile: &Profile,
        language: Language,
        template_id: &str,
        today: NaiveDate,
    ) -> Result<RenderedCv, AppError> {
        let template = self.templates.get_template(template_id)?;
        let blocks = compose(profile, language, &self.labels);
        let (bytes, page_count) = render::render(&blocks, template, &self.page)?;
        let file_name =
            render::suggested_file_name(filled(&profile.personal_info.name), today);

        info!(
            template = template_id,
            language = %language,
            blocks = blocks.len(),
            pages = page_count,
            bytes = bytes.len(),
            "CV rendered"
        );

        Ok(RenderedCv {
            bytes,
            file_name,
            page_count,
        })
    }

    pub fn preview(
        &self,
        profile: &Profile,
        language: Language,
        template_id: &str,
    ) -> Result<Preview, AppError> {
        let blocks = self.compose(profile, language, template_id)?;
        let markdown = to_markdown(&blocks);
        Ok(Preview { blocks, markdown })
    }
}
