//! subcandidates-engine: the conversion side of the sub-candidates input method.
//!
//! The input controller never converts text itself. It asks a
//! [`ConversionService`] for ranked candidate strings and decodes any
//! sub-candidate structure with [`structure`].

pub mod error;
pub mod service;
pub mod structure;
pub mod table;

pub use error::{ConversionError, StructureError};
pub use service::{ConversionService, IdentityConversion};
pub use structure::{CandidateEntry, SubCandidateGroup};
pub use table::TableConversion;
