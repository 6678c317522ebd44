pub mod shimmer;
pub mod ui;
