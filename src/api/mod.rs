mod client;
mod error;
mod types;

pub use client::{ApodClient, DEMO_API_KEY};
pub use error::ApiError;
pub use types::{FeedItem, MediaKind};
