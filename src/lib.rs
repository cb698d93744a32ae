//! # Saber Pool Manager SDK
//!
//! A standalone SDK for administering Saber StableSwap pools on Solana
//! through the pools (pool manager) program. The SDK provides two main
//! usage flows:
//!
//! 1. **Transaction functions (`_tx`)**: return fully formed unsigned
//!    transactions that can be signed and sent
//! 2. **Instruction functions (`_ix`)**: return core instructions, for
//!    staging into Goki instruction buffers or composing into larger
//!    transactions
//!
//! All admin logic executes remotely in the pools and StableSwap programs;
//! this crate derives program addresses, builds instructions, and decodes
//! fetched account state.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use saber_pool_manager_sdk::{PoolManagerSDK, RECOMMENDED_FEES};
//! use solana_sdk::commitment_config::CommitmentLevel;
//! use solana_sdk::pubkey::Pubkey;
//!
//! # async fn run(payer: Pubkey, mint_a: Pubkey, mint_b: Pubkey) -> anyhow::Result<()> {
//! let sdk = PoolManagerSDK::new(
//!     "https://api.devnet.solana.com",
//!     CommitmentLevel::Confirmed,
//!     payer,
//! );
//!
//! // Load the deployed manager and one of its pools.
//! let mut manager = sdk.load_default_manager().await?;
//! let pool = manager.load_pool_wrapper_from_mints(&mint_a, &mint_b).await?;
//!
//! // Build an unsigned admin transaction. Signing and submission stay with
//! // the caller; the manager admin must sign.
//! let tx = pool.set_new_fees_tx(&RECOMMENDED_FEES)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Internal state management
//!
//! Wrappers hold value [state::Snapshot]s of fetched account state, tagged
//! with the slot they were observed at. Nothing refreshes a snapshot behind
//! your back: call `reload` on the manager wrapper (or re-load a pool
//! wrapper) before authority-sensitive operations if state may have moved.
//!
//! ## License
//!
//! AGPL-3.0.

mod account_metas;
pub mod buffer;
mod constants;
pub mod fees;
mod params;
pub mod pda;
mod pool;
mod pool_manager;
pub mod registry;
mod sdk;
pub mod state;
pub mod swap;
mod utils;

pub use constants::{
    MIN_RAMP_DURATION, POOL_MANAGER_KEY, POOLS_PROGRAM_ID, SMART_WALLET_PROGRAM_ID,
    SWAP_PROGRAM_ID,
};
pub use fees::{FeeRatio, Fees, RECOMMENDED_FEES};
pub use params::{
    NewManagerArgs, NewStableSwapArgs, PendingPool, PendingPoolManager, PendingStableSwap,
};
pub use pda::{find_pool_address, find_pool_address_sorted, find_pool_manager_address, sorted_mints};
pub use pool::PoolWrapper;
pub use pool_manager::PoolManagerWrapper;
pub use sdk::PoolManagerSDK;
pub use state::{Pool, PoolManager, Snapshot, SwapFees};
pub use swap::{SwapState, SwapTokenInfo, find_swap_authority};
pub use utils::pack_into_transactions;
