mod backend;
pub mod fixtures;

pub use backend::MockBackend;
