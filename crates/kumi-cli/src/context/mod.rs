mod app_context;
mod selection_warnings;

pub use app_context::{AppContext, load_config};
pub use selection_warnings::warn_missing;
