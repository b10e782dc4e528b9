pub mod github;
pub mod source;

pub use github::*;
pub use source::*;
