//! Recipe parameter assembly and scaffolder invocation.

pub mod params;
pub mod scaffold;

pub use params::RecipeParams;
pub use scaffold::Scaffolder;
