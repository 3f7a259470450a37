pub mod clear_cache;
pub mod save;
