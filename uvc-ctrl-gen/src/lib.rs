//! Code generator for the fixed-layout UVC control accessors.
//!
//! The schema lives in [`registry`] as constant tables. [`emit::generate`] turns it into
//! either the `UvcControls` trait listing or the blanket implementation performing the
//! transfers; the `uvc-ctrl` crate builds both from its build script.

pub mod codec;
pub mod control;
pub mod emit;
pub mod error;
pub mod field;
pub mod registry;

pub use control::{Control, ControlDocs, Unit};
pub use emit::{generate, generate_units, GeneratorConfig, Mode};
pub use error::{SchemaError, SchemaResult};
pub use field::{Field, Width};
