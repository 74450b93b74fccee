pub mod buildable;
pub mod dispatch;
pub mod inventory;
pub mod rank_components;
pub mod rank_symbols;
pub mod schedule;
pub mod schema;
pub mod shared;
