mod error;
pub use error::*;
mod range;
pub use range::*;
mod rule;
pub use rule::*;
mod section;
pub use section::*;
pub mod pipeline;
pub use pipeline::Pipeline;
pub mod almanac;
pub use almanac::{Almanac, SeedMode};
pub mod challenge;
