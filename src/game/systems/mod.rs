pub mod movement;
pub mod bombs;
pub mod explosions;
pub mod collision;
pub mod round;

pub use movement::*;
pub use bombs::*;
pub use explosions::*;
pub use collision::*;
pub use round::*;
