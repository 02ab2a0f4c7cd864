mod character;
mod meta;
pub mod models;
mod query;

pub use character::Character;
pub use meta::Meta;
pub use models::*;
pub use query::{Query, Report};
