pub const RESERVE_SEED: &[u8] = b"reserve";
pub const RESERVE_VAULT_SEED: &[u8] = b"reserve_vault";
pub const USER_POSITION_SEED: &[u8] = b"user_position";

/// Ray precision (1e27) for indices and rates
pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const HALF_RAY: u128 = RAY / 2;

/// 365 days, no leap adjustment
pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Sentinel amount meaning "the whole balance" for repay and withdraw
pub const MAX_AMOUNT: u128 = u128::MAX;

/// Isolation debt is tracked with 2 decimals, whatever the asset decimals are
pub const DEBT_CEILING_DECIMALS: u8 = 2;

/// Keeps 10^decimals and whole-token caps inside u128
pub const MAX_DECIMALS: u8 = 30;

/// Upper bound for any single curve parameter: 1000% APR
pub const MAX_RATE: u128 = 10 * RAY;

/// Default curve (ray): 5% base, 2% slope below the kink, 30% above, kink at 80%
pub const DEFAULT_BASE_RATE: u128 = 50_000_000_000_000_000_000_000_000;
pub const DEFAULT_SLOPE1: u128 = 20_000_000_000_000_000_000_000_000;
pub const DEFAULT_SLOPE2: u128 = 300_000_000_000_000_000_000_000_000;
pub const DEFAULT_OPTIMAL_UTILIZATION: u128 = 800_000_000_000_000_000_000_000_000;
