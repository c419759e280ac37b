//! Shared domain for the Crop Advisor
//!
//! This crate contains everything that does not depend on a platform: the
//! wire and storage models, form validation, the display model, the tab
//! model, the history store and the recommendation submitter. The browser
//! (`wasm`) and terminal (`cli`) front-ends plug their own HTTP client,
//! storage and UI adapters into the traits defined here.

pub mod constants;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod submit;
pub mod tabs;
pub mod validation;

pub use constants::*;
pub use display::*;
pub use error::*;
pub use history::*;
pub use models::*;
pub use submit::*;
pub use tabs::*;
pub use validation::*;
