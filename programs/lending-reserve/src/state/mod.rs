pub mod reserve;
pub mod position;

pub use reserve::*;
pub use position::*;
