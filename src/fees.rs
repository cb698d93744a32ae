//! Conversion between the human-facing fee ratios and the flat wire
//! encoding consumed by the swap program.

use anyhow::{Result, bail};
use rust_decimal::Decimal;

use crate::state::SwapFees;

/// A single fee expressed as a numerator / denominator pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeRatio {
    pub numerator: u64,
    pub denominator: u64,
}

impl FeeRatio {
    /// Validates `0 <= numerator <= denominator` with a nonzero denominator.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            bail!("fee denominator must be nonzero");
        }
        if numerator > denominator {
            bail!(
                "fee numerator {} exceeds denominator {}",
                numerator,
                denominator
            );
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Percentage rendering, for logs.
    pub fn as_percent(&self) -> Decimal {
        Decimal::from(self.numerator) * Decimal::from(100u64) / Decimal::from(self.denominator)
    }
}

/// The four fee ratios of a swap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fees {
    pub trade: FeeRatio,
    pub withdraw: FeeRatio,
    pub admin_trade: FeeRatio,
    pub admin_withdraw: FeeRatio,
}

/// The fee schedule applied by the bulk fee scripts.
pub const RECOMMENDED_FEES: Fees = Fees {
    trade: FeeRatio {
        numerator: 6,
        denominator: 10_000,
    },
    withdraw: FeeRatio {
        numerator: 0,
        denominator: 10_000,
    },
    admin_trade: FeeRatio {
        numerator: 0,
        denominator: 10_000,
    },
    admin_withdraw: FeeRatio {
        numerator: 0,
        denominator: 10_000,
    },
};

impl From<Fees> for SwapFees {
    /// Field-by-field flattening. No rounding or normalization; the
    /// denominators are trusted as supplied.
    fn from(fees: Fees) -> Self {
        SwapFees {
            admin_trade_fee_numerator: fees.admin_trade.numerator,
            admin_trade_fee_denominator: fees.admin_trade.denominator,
            admin_withdraw_fee_numerator: fees.admin_withdraw.numerator,
            admin_withdraw_fee_denominator: fees.admin_withdraw.denominator,
            trade_fee_numerator: fees.trade.numerator,
            trade_fee_denominator: fees.trade.denominator,
            withdraw_fee_numerator: fees.withdraw.numerator,
            withdraw_fee_denominator: fees.withdraw.denominator,
        }
    }
}

impl From<SwapFees> for Fees {
    fn from(raw: SwapFees) -> Self {
        Fees {
            trade: FeeRatio {
                numerator: raw.trade_fee_numerator,
                denominator: raw.trade_fee_denominator,
            },
            withdraw: FeeRatio {
                numerator: raw.withdraw_fee_numerator,
                denominator: raw.withdraw_fee_denominator,
            },
            admin_trade: FeeRatio {
                numerator: raw.admin_trade_fee_numerator,
                denominator: raw.admin_trade_fee_denominator,
            },
            admin_withdraw: FeeRatio {
                numerator: raw.admin_withdraw_fee_numerator,
                denominator: raw.admin_withdraw_fee_denominator,
            },
        }
    }
}
