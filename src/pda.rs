//! Derivations of the program-owned addresses the pools program uses.

use anyhow::{Result, anyhow};
use solana_sdk::pubkey::Pubkey;

use crate::constants::{POOL_MANAGER_SEED, POOL_SEED, POOLS_PROGRAM_ID};

/// Finds the address of the pool manager derived from `base`.
pub fn find_pool_manager_address(base: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[POOL_MANAGER_SEED, base.as_ref()], &POOLS_PROGRAM_ID)
        .ok_or_else(|| anyhow!("no viable bump seed for pool manager of base {}", base))
}

/// Finds the address of the pool for a mint pair, given in either order.
pub fn find_pool_address(
    pool_manager: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, u8)> {
    let (mint_a, mint_b) = sorted_mints(mint_a, mint_b);
    find_pool_address_sorted(pool_manager, mint_a, mint_b)
}

/// Finds the address of the pool for a canonically ordered mint pair.
pub fn find_pool_address_sorted(
    pool_manager: &Pubkey,
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(
        &[
            POOL_SEED,
            pool_manager.as_ref(),
            mint_a.as_ref(),
            mint_b.as_ref(),
        ],
        &POOLS_PROGRAM_ID,
    )
    .ok_or_else(|| anyhow!("no viable bump seed for pool of mints {} / {}", mint_a, mint_b))
}

/// Canonical mint ordering: the byte-wise lower key is mint A. Mints of a
/// pool are always distinct, so ties cannot occur.
pub fn sorted_mints<'a>(mint_a: &'a Pubkey, mint_b: &'a Pubkey) -> (&'a Pubkey, &'a Pubkey) {
    if mint_a < mint_b {
        (mint_a, mint_b)
    } else {
        (mint_b, mint_a)
    }
}
