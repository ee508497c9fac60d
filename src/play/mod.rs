pub mod outcome;
pub use outcome::*;

pub mod showdown;
pub use showdown::*;

pub mod tally;
pub use tally::*;
