// Layout: static font metrics, greedy line wrapping and page placement.
// Pure CPU work; the HTTP layer runs it inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod paginate;
pub mod wrap;

pub use font_metrics::{default_page_config, get_metrics, win_ansi_code, FontFamily, PageConfig, PageSize};
pub use paginate::{paginate, LaidOutDocument, Page, PlacedBlock};
pub use wrap::{wrap_text, WrappedText};
