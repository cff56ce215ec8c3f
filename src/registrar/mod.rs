mod client;
mod error;
mod site;

pub mod extract;
pub mod link;

pub use client::*;
pub use error::*;
pub use link::{CalendarLink, Semester};
pub use site::*;
