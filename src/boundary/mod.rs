//! Boundary conditions for the initial-time field files.
//!
//! Each patch of the mesh carries a [`BoundaryType`]. For every [`Field`]
//! the decision table in [`resolve`] picks a [`Stanza`] from the fixed
//! catalogue, and [`BoundaryFieldWriter`] writes the resulting dictionaries
//! through a [`FileManager`](crate::export::FileManager).

mod field;
mod patch;
mod stanza;
mod table;
mod value;
mod writer;

pub use field::{Field, FieldClass};
pub use patch::{BoundaryPatchMap, BoundaryType, PatchMapError};
pub use stanza::{CodedProfile, FreestreamKind, Stanza, WallFunction};
pub use table::{resolve, StanzaContext};
pub use value::FieldValue;
pub use writer::{BoundaryError, BoundaryFieldWriter, INITIAL_TIME_FOLDER};
