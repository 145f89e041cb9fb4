//! Core error types shared by every pipeline stage.

mod error;

pub use error::{RecipeError, RecipeResult};
