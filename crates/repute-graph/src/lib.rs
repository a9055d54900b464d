//! # repute-graph
//!
//! Fetches attestations (triples) and identity profiles for an address from
//! the knowledge-graph GraphQL endpoint. Transport is pluggable so paging and
//! mapping can be exercised without a network.

pub mod client;
pub mod mapping;
pub mod queries;
pub mod response;
pub mod transport;

pub use client::GraphClient;
pub use transport::{GraphTransport, HttpTransport};
