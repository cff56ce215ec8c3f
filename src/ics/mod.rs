mod decode;
mod exporter;
pub mod event_builder;

pub use decode::*;
pub use event_builder::ValidationError;
pub use exporter::*;
