//! Connection setup: pragmas and the serialized connection handle.

pub mod pragmas;
pub mod writer;

pub use writer::RegistryConnection;
