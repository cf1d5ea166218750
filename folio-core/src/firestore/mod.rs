pub mod api;
pub mod client;
pub mod models;
pub mod value;

pub use client::FirestoreClient;
pub use models::{Document, RunQueryEntry};
