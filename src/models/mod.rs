pub mod item;
pub mod phase;
pub mod stage;

pub use item::{Channel, Item, Posted, Sponsorship};
pub use phase::{phase, Phase};
pub use stage::{Stage, StageState, Stages};
