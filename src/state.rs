//! Typed views of the accounts the pools program owns.

use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use anyhow::{Result, bail};
use solana_sdk::clock::Slot;
use solana_sdk::pubkey::{PUBKEY_BYTES, Pubkey};

/// Manages all [Pool]s. Singleton per deployment, addressed by
/// `["SaberPoolManager", base]`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct PoolManager {
    /// The base [Pubkey] the manager address is derived from.
    pub base: Pubkey,
    /// Bump seed
    pub bump: u8,
    /// Total number of [Pool]s being managed.
    pub num_pools: u64,

    /// The admin of the [PoolManager].
    pub admin: Pubkey,
    /// The next admin of the [PoolManager].
    pub pending_admin: Pubkey,

    /// Initial fees used when creating new pools.
    pub initial_fees: SwapFees,

    /// Minimum amp factor for permissionless pools.
    pub min_permissionless_amp_factor: u64,
    /// Maximum amp factor for permissionless pools.
    pub max_permissionless_amp_factor: u64,

    /// Account which has the authority to set the amplification coefficient
    /// of pools.
    pub operator: Pubkey,

    /// Account which all fees may be withdrawn to.
    pub beneficiary: Pubkey,
}

impl PoolManager {
    /// Number of bytes in a serialized [PoolManager].
    pub const LEN: usize =
        PUBKEY_BYTES + 1 + 8 + PUBKEY_BYTES * 2 + SwapFees::LEN + 8 + 8 + PUBKEY_BYTES * 2;

    /// Decodes a fetched pool manager account.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        decode_anchor_account(data, Self::LEN, "pool manager")
    }
}

/// The admin record of a swap. The two mints are stored in canonical order:
/// `mint_a < mint_b` byte-wise.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Pool {
    /// The [PoolManager].
    pub manager: Pubkey,
    /// Mint of token A.
    pub mint_a: Pubkey,
    /// Mint of token B.
    pub mint_b: Pubkey,
    /// Bump seed
    pub bump: u8,

    /// The swap account this pool administers.
    pub swap: Pubkey,
    /// Creation index, 1-indexed.
    pub index: u64,

    /// Token account holding fees of token A.
    pub token_a_fees: Pubkey,
    /// Token account holding fees of token B.
    pub token_b_fees: Pubkey,

    /// LP token mint.
    pub lp_mint: Pubkey,
    /// Decimals of the mints.
    pub token_decimals: u8,
    /// Whether the pool was imported permissionlessly.
    pub permissionless_import: bool,
}

impl Pool {
    /// Number of bytes in a serialized [Pool].
    pub const LEN: usize = PUBKEY_BYTES * 3 + 1 + PUBKEY_BYTES + 8 + PUBKEY_BYTES * 3 + 1 + 1;

    /// Decodes a fetched pool account.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        decode_anchor_account(data, Self::LEN, "pool")
    }
}

/// Wire encoding of the four fee ratios, as the swap program stores and the
/// pools program forwards them.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SwapFees {
    /// Admin trade fee numerator
    pub admin_trade_fee_numerator: u64,
    /// Admin trade fee denominator
    pub admin_trade_fee_denominator: u64,
    /// Admin withdraw fee numerator
    pub admin_withdraw_fee_numerator: u64,
    /// Admin withdraw fee denominator
    pub admin_withdraw_fee_denominator: u64,
    /// Trade fee numerator
    pub trade_fee_numerator: u64,
    /// Trade fee denominator
    pub trade_fee_denominator: u64,
    /// Withdraw fee numerator
    pub withdraw_fee_numerator: u64,
    /// Withdraw fee denominator
    pub withdraw_fee_denominator: u64,
}

impl SwapFees {
    /// Number of bytes in a serialized [SwapFees].
    pub const LEN: usize = 8 * 8;
}

/// A value copy of fetched account state, tagged with the slot it was
/// observed at. Nothing refreshes a snapshot implicitly; reload explicitly
/// before authority-sensitive operations.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<T> {
    pub data: T,
    pub slot: Slot,
}

impl<T> std::ops::Deref for Snapshot<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

fn decode_anchor_account<T: AnchorDeserialize>(data: &[u8], len: usize, name: &str) -> Result<T> {
    if data.len() < 8 + len {
        bail!("{} account data too short: {} bytes", name, data.len());
    }
    Ok(T::deserialize(&mut &data[8..])?)
}
