pub mod id_map;
pub mod loader;
pub mod tracing;
