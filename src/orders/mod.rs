//! Orders

mod id;
mod models;

pub use id::{OrderId, ValidationError};
pub use models::{Delivery, Order, OrderItem, Payment, RenderError};
