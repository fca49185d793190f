//! CV document engine: turns a structured profile into a localized,
//! template-styled, paginated PDF.
//!
//! Pipeline: [`compose`] (profile → blocks) → [`layout`] (blocks → pages) →
//! [`render`] (pages → PDF bytes). [`engine::Engine`] bundles the registries
//! and exposes the whole flow; [`routes`] serves it over HTTP.

pub mod compose;
pub mod config;
pub mod engine;
pub mod errors;
pub mod i18n;
pub mod layout;
pub mod models;
pub mod render;
pub mod routes;
pub mod state;
pub mod templates;
