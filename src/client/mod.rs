// src/client/mod.rs

pub mod sync_client;

// Re-export the public client struct
pub use sync_client::NexStarClient;
