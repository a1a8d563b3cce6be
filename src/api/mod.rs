mod client;
mod normalize;

pub use client::ApiClient;
