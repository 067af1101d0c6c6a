pub mod ray;
pub mod interest;

pub use ray::*;
pub use interest::*;
