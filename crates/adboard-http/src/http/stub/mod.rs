pub mod items;
pub mod metadata;
pub mod routes;
pub mod server;
pub mod store;

pub use server::{spawn_stub, start_stub};
