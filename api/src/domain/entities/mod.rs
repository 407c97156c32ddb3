//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod brand;
pub mod model;

pub use brand::{Brand, BrandId, BrandInput, BrandWithModels};
pub use model::{CarModel, ModelId, ModelInput};
