//! Domain models for the Crop Advisor

mod form;
mod history;
mod recommendation;

pub use form::*;
pub use history::*;
pub use recommendation::*;
