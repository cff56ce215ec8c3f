mod event;
mod selection;
mod table;

pub use event::*;
pub use selection::*;
pub use table::*;
