pub mod ball;
pub mod collision;
pub mod health;
pub mod player;

pub use ball::*;
pub use collision::*;
pub use health::*;
pub use player::*;
