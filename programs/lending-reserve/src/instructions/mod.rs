pub mod token_ledger;
pub mod initialize_reserve;
pub mod update_reserve;
pub mod supply;
pub mod withdraw;
pub mod borrow;
pub mod repay;
pub mod isolation_mode;
pub mod get_reserve_data;

pub use initialize_reserve::*;
pub use update_reserve::*;
pub use supply::*;
pub use withdraw::*;
pub use borrow::*;
pub use repay::*;
pub use isolation_mode::*;
pub use get_reserve_data::*;
