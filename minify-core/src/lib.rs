//! Whole-program identifier minification for a decoded JVM program: renames classes, methods and
//! fields down to short fresh names while preserving virtual dispatch, interface dispatch and
//! inner-class structure.
//!
//! The entry point is [`pipeline::Pipeline`]; [`strategy::NamingStrategy`] is the policy seam a
//! caller plugs into it.

pub mod class_minifier;
pub mod error;
pub mod field_minifier;
pub mod interface_lattice;
pub mod method_minifier;
mod name_source;
mod naming_state;
mod namespace;
pub mod nonrebound;
pub mod options;
pub mod pipeline;
pub mod renaming;
mod reservation;
pub mod signature_key;
pub mod strategy;
