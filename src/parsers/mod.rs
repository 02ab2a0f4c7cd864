//! Turn scraped pages into records.

mod build;
mod dom;
mod guide;
pub mod markup;
mod meta;

pub use build::extract_build;
pub use guide::extract_guide;
pub use meta::extract_meta;
