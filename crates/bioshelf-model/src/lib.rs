pub mod error;
pub mod material;
pub mod meta;

pub use error::{BioshelfError, Result};
pub use material::{Material, MaterialDraft};
pub use meta::{MaterialType, UnitCatalog};
