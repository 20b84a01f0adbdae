//! Backend API Wrappers
//!
//! Frontend bindings to the tracker's REST endpoints, organized by domain.

mod client;
mod emails;
mod fetch;
mod items;
mod tracker;
mod transport;

pub use client::*;
pub use emails::*;
pub use fetch::FetchTransport;
pub use items::*;
pub use tracker::*;
pub use transport::*;
