//! Domain models for the Shopdesk API.
//!
//! Each entity kind has two shapes:
//! - the stored record (`User`, `Product`, `Order`), returned to clients and
//!   decoded from database rows
//! - the input body (`UserInput`, `ProductInput`, `OrderInput`), accepted on
//!   create and update. Inputs carry no id; an `id` sent by a client is
//!   ignored during deserialization.

pub mod order;
pub mod product;
pub mod user;

pub use order::{Order, OrderInput};
pub use product::{Product, ProductInput};
pub use user::{User, UserInput};
