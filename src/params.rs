use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

use crate::pool_manager::PoolManagerWrapper;

/// Arguments for creating a new pool manager.
#[derive(Debug, Clone, Copy)]
pub struct NewManagerArgs {
    /// Base key the manager address derives from. Must co-sign the returned
    /// transaction.
    pub base: Pubkey,
    /// Admin of the new manager.
    pub admin: Pubkey,
    /// Operator of the new manager; defaults to the admin.
    pub operator: Option<Pubkey>,
    /// Beneficiary of the new manager; defaults to the admin.
    pub beneficiary: Option<Pubkey>,
}

/// Arguments for creating and importing a new StableSwap.
#[derive(Debug, Clone, Copy)]
pub struct NewStableSwapArgs {
    /// Initial amplification coefficient.
    pub amp_factor: u64,
    /// Fresh account the swap lives in. Must co-sign the returned
    /// transaction.
    pub swap_account: Pubkey,
    pub mint_a: Pubkey,
    pub reserve_a: Pubkey,
    pub mint_b: Pubkey,
    pub reserve_b: Pubkey,
    /// LP token mint.
    pub lp_mint: Pubkey,
    /// Account receiving the initial LP mint; the payer's associated token
    /// account if absent.
    pub output_lp: Option<Pubkey>,
}

/// An unsent manager-creation transaction paired with the wrapper it will
/// back once confirmed.
pub struct PendingPoolManager<'a> {
    pub wrapper: PoolManagerWrapper<'a>,
    pub tx: Transaction,
}

/// An unsent swap-creation transaction and the accounts it will create.
#[derive(Debug, Clone)]
pub struct PendingStableSwap {
    pub swap_account: Pubkey,
    pub lp_mint: Pubkey,
    pub pool_key: Pubkey,
    pub pool_bump: u8,
    pub tx: Transaction,
}

/// An unsent pool-import transaction.
#[derive(Debug, Clone)]
pub struct PendingPool {
    pub pool_key: Pubkey,
    pub pool_bump: u8,
    pub tx: Transaction,
}
