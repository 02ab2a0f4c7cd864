mod client;

pub use client::PageClient;
