//! Stop-distance position sizing.

use tracing::debug;

use super::types::PositionSize;
use crate::error::{CalcError, require_positive};
use crate::metrics::constants::{DEFAULT_PIP_MULTIPLIER, HUNDRED};

/// Configuration for position sizing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSizerConfig {
    /// Price units to pips (10 000 for most FX pairs, 100 for JPY-quoted).
    pub pip_multiplier: f64,
}

impl Default for PositionSizerConfig {
    fn default() -> Self {
        Self {
            pip_multiplier: DEFAULT_PIP_MULTIPLIER,
        }
    }
}

/// Position sizer converting a risk budget and stop distance into size.
#[derive(Debug, Clone, Default)]
pub struct PositionSizer {
    config: PositionSizerConfig,
}

impl PositionSizer {
    /// Create a position sizer with custom configuration.
    #[must_use]
    pub const fn with_config(config: PositionSizerConfig) -> Self {
        Self { config }
    }

    /// Calculate the position size that loses `risk_percent` of the balance
    /// if the stop is hit.
    ///
    /// # Arguments
    ///
    /// * `account_balance` - Account balance, > 0
    /// * `risk_percent` - Percent of balance to risk (1.0 = 1%), > 0
    /// * `entry_price` - Entry price, > 0
    /// * `stop_loss_price` - Stop price, > 0 and different from entry
    /// * `pip_value` - Account currency per pip per lot, > 0
    ///
    /// # Errors
    ///
    /// Returns `CalcError::InvalidParameter` if any input is not positive,
    /// the stop equals the entry, or the configured pip multiplier is not
    /// positive.
    pub fn size(
        &self,
        account_balance: f64,
        risk_percent: f64,
        entry_price: f64,
        stop_loss_price: f64,
        pip_value: f64,
    ) -> Result<PositionSize, CalcError> {
        let balance = require_positive("account_balance", account_balance)?;
        let risk_percent = require_positive("risk_percent", risk_percent)?;
        let entry = require_positive("entry_price", entry_price)?;
        let stop = require_positive("stop_loss_price", stop_loss_price)?;
        let pip_value = require_positive("pip_value", pip_value)?;
        let pip_multiplier = require_positive("pip_multiplier", self.config.pip_multiplier)?;

        let stop_loss_distance = (entry - stop).abs();
        if stop_loss_distance == 0.0 {
            return Err(CalcError::invalid(
                "stop_loss_price",
                stop,
                "different from entry_price",
            ));
        }

        let risk_amount = balance * risk_percent / HUNDRED;
        let stop_loss_pips = stop_loss_distance * pip_multiplier;
        let lot_size = risk_amount / (stop_loss_pips * pip_value);
        let units = risk_amount / stop_loss_distance;

        debug!(risk_amount, stop_loss_pips, lot_size, units, "Position sized");

        Ok(PositionSize {
            risk_amount,
            stop_loss_distance,
            stop_loss_pips,
            lot_size,
            units,
        })
    }
}
