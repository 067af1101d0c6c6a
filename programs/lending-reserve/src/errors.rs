use anchor_lang::prelude::*;

#[error_code]
pub enum ReserveError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Repaying the whole debt requires the payer to be the borrower")]
    NoExplicitAmountToRepayOnBehalf,

    #[msg("Reserve is not active")]
    ReserveInactive,

    #[msg("Reserve is paused")]
    ReservePaused,

    #[msg("Reserve is frozen")]
    ReserveFrozen,

    #[msg("Borrower has no debt of the selected type in this reserve")]
    NoDebtOfSelectedType,

    #[msg("Insufficient token balance or allowance for transfer")]
    InsufficientFunds,

    #[msg("Borrowing is not enabled on this reserve")]
    BorrowingNotEnabled,

    #[msg("Insufficient reserve liquidity")]
    InsufficientLiquidity,

    #[msg("Supply cap exceeded")]
    SupplyCapExceeded,

    #[msg("Borrow cap exceeded")]
    BorrowCapExceeded,

    #[msg("Withdraw amount exceeds the user balance")]
    NotEnoughAvailableUserBalance,

    #[msg("Amount is too small to mint a scaled unit")]
    InvalidMintAmount,

    #[msg("Amount is too small to burn a scaled unit")]
    InvalidBurnAmount,

    #[msg("Isolation mode debt ceiling exceeded")]
    DebtCeilingExceeded,

    #[msg("Asset cannot be borrowed in isolation mode")]
    AssetNotBorrowableInIsolation,

    #[msg("Reserve has no debt ceiling and cannot back isolation mode")]
    NotIsolatedCollateral,

    #[msg("Isolation mode cannot change while debt is outstanding")]
    IsolationModeChangeWithDebt,

    #[msg("Isolation collateral reserve does not match the position")]
    IsolationCollateralMismatch,

    #[msg("Invalid interest rate curve")]
    InvalidRateCurve,

    #[msg("Asset decimals below the debt ceiling precision")]
    InvalidDecimals,

    #[msg("Unauthorized: signer does not match expected authority")]
    Unauthorized,

    #[msg("Token mint does not match reserve's token mint")]
    MintMismatch,

    #[msg("Vault account does not match reserve's vault")]
    InvalidVault,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Division by zero")]
    DivisionByZero,
}
