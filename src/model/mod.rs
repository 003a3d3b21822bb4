//! Domain types as the backend sends them, plus display derivations.
//!
//! DESIGN
//! ======
//! Wire and display share one struct per resource: derived fields are
//! recomputed from raw fields by normalization on every fetch and are never
//! sent back (writes use dedicated input types).

pub mod menu;
pub mod store;

pub use menu::{Allergy, ImageFile, ImageUpload, Menu};
pub use store::{SearchFilters, Store, StoreInput};
