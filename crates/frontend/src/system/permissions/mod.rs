pub mod api;
pub mod context;
