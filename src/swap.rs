//! Interface to the external StableSwap program. This crate reads swap
//! state and, when importing an existing swap, drives the swap program's
//! own admin instructions; all curve logic stays remote.

use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use anyhow::{Result, anyhow, bail};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::sysvar;

use crate::constants::SWAP_PROGRAM_ID;
use crate::state::SwapFees;

// Single-byte instruction tags of the swap program. Admin instructions
// start at 100.
const INITIALIZE: u8 = 0;
const SET_FEE_ACCOUNT: u8 = 104;
const APPLY_NEW_ADMIN: u8 = 105;
const COMMIT_NEW_ADMIN: u8 = 106;

/// Token-side addresses of a swap.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SwapTokenInfo {
    /// Reserve account holding the token.
    pub reserves: Pubkey,
    /// Mint of the token.
    pub mint: Pubkey,
    /// Account accumulating admin fees of the token.
    pub admin_fees: Pubkey,
}

/// State of a swap account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct SwapState {
    pub is_initialized: bool,
    pub is_paused: bool,
    /// Nonce the swap authority is derived with.
    pub nonce: u8,

    /// Initial amplification coefficient (A).
    pub initial_amp_factor: u64,
    /// Target amplification coefficient (A).
    pub target_amp_factor: u64,
    /// Ramp A start timestamp.
    pub start_ramp_ts: i64,
    /// Ramp A stop timestamp.
    pub stop_ramp_ts: i64,

    /// When the future admin can no longer become the admin.
    pub future_admin_deadline: i64,
    /// The next admin.
    pub future_admin_key: Pubkey,
    /// The current admin.
    pub admin_key: Pubkey,

    pub token_a: SwapTokenInfo,
    pub token_b: SwapTokenInfo,

    /// Mint of the LP token.
    pub pool_mint: Pubkey,

    /// Fee schedule.
    pub fees: SwapFees,
}

impl SwapState {
    /// Number of bytes in a serialized swap account.
    pub const LEN: usize = 3 + 8 * 5 + 32 * 2 + 96 * 2 + 32 + SwapFees::LEN;

    /// Decodes a fetched swap account.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        if data.len() < Self::LEN {
            bail!("swap account data too short: {} bytes", data.len());
        }
        let state = Self::deserialize(&mut &data[..Self::LEN])?;
        if !state.is_initialized {
            bail!("swap account is not initialized");
        }
        Ok(state)
    }
}

/// Finds the authority owning a swap's reserves.
pub fn find_swap_authority(swap_account: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[swap_account.as_ref()], &SWAP_PROGRAM_ID)
        .ok_or_else(|| anyhow!("no viable bump seed for swap authority of {}", swap_account))
}

pub(crate) struct InitializeSwapArgs<'a> {
    pub swap_account: Pubkey,
    pub authority: Pubkey,
    pub admin: Pubkey,
    pub token_a: SwapTokenInfo,
    pub token_b: SwapTokenInfo,
    pub pool_mint: Pubkey,
    pub destination_pool_token_account: Pubkey,
    pub nonce: u8,
    pub amp_factor: u64,
    pub fees: &'a SwapFees,
}

/// Initializes a fresh swap account. The swap account itself must co-sign.
pub(crate) fn initialize_swap_ix(args: InitializeSwapArgs) -> Result<Instruction> {
    let mut data = vec![INITIALIZE, args.nonce];
    data.extend_from_slice(&args.amp_factor.to_le_bytes());
    data.extend_from_slice(&args.fees.try_to_vec()?);

    Ok(Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(args.swap_account, true),
            AccountMeta::new_readonly(args.authority, false),
            AccountMeta::new_readonly(args.admin, false),
            AccountMeta::new_readonly(args.token_a.admin_fees, false),
            AccountMeta::new_readonly(args.token_b.admin_fees, false),
            AccountMeta::new_readonly(args.token_a.mint, false),
            AccountMeta::new(args.token_a.reserves, false),
            AccountMeta::new_readonly(args.token_b.mint, false),
            AccountMeta::new(args.token_b.reserves, false),
            AccountMeta::new(args.pool_mint, false),
            AccountMeta::new(args.destination_pool_token_account, false),
            AccountMeta::new_readonly(spl_token::ID, false),
        ],
        data,
    })
}

/// Re-points one of the swap's admin fee accounts. Signed by the current
/// swap admin.
pub(crate) fn set_fee_account_ix(
    swap_account: &Pubkey,
    admin: &Pubkey,
    token_account: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*swap_account, false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*token_account, false),
        ],
        data: vec![SET_FEE_ACCOUNT],
    }
}

/// Commits a new admin on the swap itself. Signed by the current swap admin.
pub(crate) fn commit_new_admin_ix(
    swap_account: &Pubkey,
    admin: &Pubkey,
    new_admin: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*swap_account, false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(*new_admin, false),
            AccountMeta::new_readonly(sysvar::clock::ID, false),
        ],
        data: vec![COMMIT_NEW_ADMIN],
    }
}

/// Applies a previously committed swap admin. Signed by the current swap
/// admin.
pub(crate) fn apply_new_admin_ix(swap_account: &Pubkey, admin: &Pubkey) -> Instruction {
    Instruction {
        program_id: SWAP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*swap_account, false),
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new_readonly(sysvar::clock::ID, false),
        ],
        data: vec![APPLY_NEW_ADMIN],
    }
}
