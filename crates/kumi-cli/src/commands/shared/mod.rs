pub mod limit;
pub mod suggestions;
