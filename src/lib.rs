//! Ordertrace
//!
//! Ordertrace is a terminal client for an order-lookup service. It validates a
//! user-supplied order identifier, fetches the order document from the
//! service's HTTP endpoint, and renders the order summary, delivery, payment,
//! and item regions to the terminal.

pub mod client;
pub mod config;
pub mod lookup;
pub mod orders;
pub mod view;
