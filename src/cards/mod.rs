pub mod card;
pub use card::*;

pub mod evaluator;
pub use evaluator::*;

pub mod frequency;
pub use frequency::*;

pub mod hand;
pub use hand::*;

pub mod kicks;
pub use kicks::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
