pub mod pages;
pub mod permissions;
