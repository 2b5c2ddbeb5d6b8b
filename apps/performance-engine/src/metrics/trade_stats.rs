//! Win/loss statistics from a list of per-trade P&L values.

use serde::{Deserialize, Serialize};

use super::math::finite_only;

/// Aggregate trade statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeStats {
    /// Total trades, including breakeven.
    pub total_trades: u32,
    /// Trades with P&L above zero.
    pub winning_trades: u32,
    /// Trades with P&L below zero.
    pub losing_trades: u32,
    /// Winning trades / total trades (0.55 = 55%).
    pub win_rate: f64,
    /// Sum of winning P&L.
    pub gross_profit: f64,
    /// Sum of losing P&L (positive value).
    pub gross_loss: f64,
    /// Average winning trade.
    pub avg_win: f64,
    /// Average losing trade (positive value).
    pub avg_loss: f64,
    /// Gross profit / gross loss; `None` without losses.
    pub profit_factor: Option<f64>,
    /// Expected P&L per trade.
    pub expectancy: f64,
    /// Net P&L.
    pub net_profit: f64,
}

impl TradeStats {
    /// Calculate statistics from per-trade P&L.
    ///
    /// Non-finite values are ignored.
    #[must_use]
    pub fn from_pnls(pnls: &[f64]) -> Self {
        let pnls = finite_only(pnls.iter().copied(), "trade pnl");

        let mut gross_profit = 0.0;
        let mut gross_loss = 0.0;
        let mut winning = 0u32;
        let mut losing = 0u32;

        for pnl in &pnls {
            if *pnl > 0.0 {
                gross_profit += pnl;
                winning += 1;
            } else if *pnl < 0.0 {
                gross_loss += pnl.abs();
                losing += 1;
            }
        }

        let total_trades = pnls.len() as u32;
        let win_rate = if total_trades > 0 {
            f64::from(winning) / f64::from(total_trades)
        } else {
            0.0
        };
        let avg_win = if winning > 0 {
            gross_profit / f64::from(winning)
        } else {
            0.0
        };
        let avg_loss = if losing > 0 {
            gross_loss / f64::from(losing)
        } else {
            0.0
        };
        let profit_factor = (gross_loss > 0.0).then(|| gross_profit / gross_loss);

        // Expectancy = (WinRate * AvgWin) - (LossRate * AvgLoss)
        let loss_rate = if total_trades > 0 {
            f64::from(losing) / f64::from(total_trades)
        } else {
            0.0
        };
        let expectancy = win_rate.mul_add(avg_win, -(loss_rate * avg_loss));

        Self {
            total_trades,
            winning_trades: winning,
            losing_trades: losing,
            win_rate,
            gross_profit,
            gross_loss,
            avg_win,
            avg_loss,
            profit_factor,
            expectancy,
            net_profit: gross_profit - gross_loss,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_stats() {
        let stats = TradeStats::from_pnls(&[100.0, -50.0, 200.0, 0.0, -30.0]);

        assert_eq!(stats.total_trades, 5);
        assert_eq!(stats.winning_trades, 2);
        assert_eq!(stats.losing_trades, 2);
        assert!((stats.win_rate - 0.4).abs() < 1e-12);
        assert!((stats.avg_win - 150.0).abs() < 1e-12);
        assert!((stats.avg_loss - 40.0).abs() < 1e-12);
        assert!((stats.profit_factor.unwrap() - 3.75).abs() < 1e-12);
        // 0.4 * 150 - 0.4 * 40
        assert!((stats.expectancy - 44.0).abs() < 1e-9);
        assert!((stats.net_profit - 220.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_losses_has_no_profit_factor() {
        let stats = TradeStats::from_pnls(&[10.0, 20.0]);
        assert_eq!(stats.profit_factor, None);
        assert_eq!(stats.avg_loss, 0.0);
    }

    #[test]
    fn test_empty() {
        let stats = TradeStats::from_pnls(&[]);
        assert_eq!(stats.total_trades, 0);
        assert_eq!(stats.win_rate, 0.0);
        assert_eq!(stats.expectancy, 0.0);
    }
}
