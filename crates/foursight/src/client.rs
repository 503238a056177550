pub mod api;
pub mod base;
mod engagement;
