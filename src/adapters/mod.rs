// Adapters layer: concrete command sources for external inputs.

pub mod file_source;
