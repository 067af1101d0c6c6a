pub mod ledger;
pub mod accrual;
pub mod validation;
pub mod isolation;
pub mod settlement;
pub mod liquidity;
pub mod borrow;
pub mod config;

pub use ledger::*;
pub use accrual::*;
pub use validation::*;
pub use isolation::*;
pub use settlement::*;
pub use liquidity::*;
pub use borrow::*;
pub use config::*;
