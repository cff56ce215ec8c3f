mod month;
mod normalize;
mod parser;

pub use month::*;
pub use normalize::*;
pub use parser::*;
