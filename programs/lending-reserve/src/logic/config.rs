use anchor_lang::prelude::*;

use crate::logic::accrual::{refresh, update_rates_from_totals};
use crate::state::{InterestRateCurve, ReserveState};

/// Partial configuration change; `None` leaves a field as it is.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReserveConfigUpdate {
    pub is_active: Option<bool>,
    pub is_paused: Option<bool>,
    pub is_frozen: Option<bool>,
    pub borrowing_enabled: Option<bool>,
    pub borrowable_in_isolation: Option<bool>,
    pub supply_cap: Option<u64>,
    pub borrow_cap: Option<u64>,
    pub debt_ceiling: Option<u128>,
    pub curve: Option<InterestRateCurve>,
}

/// Apply `update` to the reserve configuration.
///
/// A curve change first accrues up to `timestamp` on the old curve, then
/// re-rates the current totals on the new one. Dropping the debt ceiling to
/// zero also clears the isolation counter.
pub fn apply_config_update(
    reserve: &mut ReserveState,
    update: &ReserveConfigUpdate,
    timestamp: i64,
) -> Result<()> {
    if let Some(curve) = update.curve.as_ref() {
        curve.validate()?;
    }

    let mut next = reserve.clone();
    let config = &mut next.config;

    if let Some(active) = update.is_active {
        config.is_active = active;
    }
    if let Some(paused) = update.is_paused {
        config.is_paused = paused;
    }
    if let Some(frozen) = update.is_frozen {
        config.is_frozen = frozen;
    }
    if let Some(enabled) = update.borrowing_enabled {
        config.borrowing_enabled = enabled;
    }
    if let Some(enabled) = update.borrowable_in_isolation {
        config.borrowable_in_isolation = enabled;
    }
    if let Some(cap) = update.supply_cap {
        config.supply_cap = cap;
    }
    if let Some(cap) = update.borrow_cap {
        config.borrow_cap = cap;
    }
    if let Some(ceiling) = update.debt_ceiling {
        config.debt_ceiling = ceiling;
        if ceiling == 0 {
            next.isolation_mode_total_debt = 0;
        }
    }

    if let Some(curve) = update.curve {
        refresh(&mut next, timestamp)?;
        next.config.curve = curve;
        update_rates_from_totals(&mut next)?;
    }

    *reserve = next;
    Ok(())
}
