//! Wrapper around a fetched [Pool] account. Builders operate on the
//! wrapper's pool and its swap; every instruction carries the common
//! account set assembled once from the cached snapshot.
//!
//! Two flavors per operation, as with the rest of the SDK:
//!
//! 1. `_ix` functions return the core instruction, for staging into
//!    instruction buffers or composing into larger transactions.
//! 2. `_tx` functions return a fully formed unsigned transaction.

use anchor_lang::AnchorSerialize;
use anyhow::Result;
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;
use spl_associated_token_account::get_associated_token_address;

use crate::account_metas::{
    CommitNewAdmin, SendFeesToBeneficiary, SetBeneficiary, SetOperator, SwapContext,
};
use crate::constants::{POOLS_PROGRAM_ID, SWAP_PROGRAM_ID};
use crate::fees::Fees;
use crate::sdk::PoolManagerSDK;
use crate::state::{Pool, PoolManager, Snapshot, SwapFees};
use crate::swap::SwapState;
use crate::utils::{anchor_sighash, create_ata_idempotent_ix};

pub struct PoolWrapper<'a> {
    sdk: &'a PoolManagerSDK,
    pub key: Pubkey,
    pub data: Snapshot<Pool>,
    /// Admin who must sign the built transactions.
    pub admin: Pubkey,
}

impl<'a> PoolWrapper<'a> {
    /// Typically constructed through the manager wrapper's load functions
    /// rather than directly.
    pub fn new(
        sdk: &'a PoolManagerSDK,
        key: Pubkey,
        data: Snapshot<Pool>,
        admin: Pubkey,
    ) -> Self {
        Self {
            sdk,
            key,
            data,
            admin,
        }
    }

    /// Ramp the swap's amplification coefficient to `target_amp`, finishing
    /// at `stop_ramp_ts`. The swap program enforces a minimum ramp duration
    /// ([crate::MIN_RAMP_DURATION]).
    pub fn ramp_a_ix(&self, target_amp: u64, stop_ramp_ts: i64) -> Instruction {
        let mut data = anchor_sighash("ramp_a").to_vec();
        data.extend_from_slice(&target_amp.to_le_bytes());
        data.extend_from_slice(&stop_ramp_ts.to_le_bytes());
        self.swap_context_ix(data)
    }

    pub fn ramp_a_tx(&self, target_amp: u64, stop_ramp_ts: i64) -> Transaction {
        self.sdk.new_tx(&[self.ramp_a_ix(target_amp, stop_ramp_ts)])
    }

    /// Stop ramping the amplification coefficient.
    pub fn stop_ramp_a_ix(&self) -> Instruction {
        self.swap_context_ix(anchor_sighash("stop_ramp_a").to_vec())
    }

    pub fn stop_ramp_a_tx(&self) -> Transaction {
        self.sdk.new_tx(&[self.stop_ramp_a_ix()])
    }

    /// Pause the swap.
    pub fn pause_swap_ix(&self) -> Instruction {
        self.swap_context_ix(anchor_sighash("pause_swap").to_vec())
    }

    pub fn pause_swap_tx(&self) -> Transaction {
        self.sdk.new_tx(&[self.pause_swap_ix()])
    }

    /// Unpause the swap.
    pub fn unpause_swap_ix(&self) -> Instruction {
        self.swap_context_ix(anchor_sighash("unpause_swap").to_vec())
    }

    pub fn unpause_swap_tx(&self) -> Transaction {
        self.sdk.new_tx(&[self.unpause_swap_ix()])
    }

    /// Commit a new admin on the swap. Takes effect only once applied; the
    /// remote program rejects an apply without a prior commit.
    pub fn commit_new_admin_ix(&self, new_admin: &Pubkey) -> Instruction {
        Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: CommitNewAdmin {
                pool_manager: self.data.manager,
                swap: self.data.swap,
                pool: self.key,
                admin: self.admin,
                new_admin: *new_admin,
                swap_program: SWAP_PROGRAM_ID,
            }
            .into(),
            data: anchor_sighash("commit_new_admin").to_vec(),
        }
    }

    pub fn commit_new_admin_tx(&self, new_admin: &Pubkey) -> Transaction {
        self.sdk.new_tx(&[self.commit_new_admin_ix(new_admin)])
    }

    /// Apply the previously committed admin.
    pub fn apply_new_admin_ix(&self) -> Instruction {
        self.swap_context_ix(anchor_sighash("apply_new_admin").to_vec())
    }

    pub fn apply_new_admin_tx(&self) -> Transaction {
        self.sdk.new_tx(&[self.apply_new_admin_ix()])
    }

    /// Set new fees on the swap.
    pub fn set_new_fees_ix(&self, new_fees: &Fees) -> Result<Instruction> {
        let mut data = anchor_sighash("set_new_fees").to_vec();
        data.extend_from_slice(&SwapFees::from(*new_fees).try_to_vec()?);
        Ok(self.swap_context_ix(data))
    }

    pub fn set_new_fees_tx(&self, new_fees: &Fees) -> Result<Transaction> {
        Ok(self.sdk.new_tx(&[self.set_new_fees_ix(new_fees)?]))
    }

    /// Set the manager's beneficiary.
    pub fn set_beneficiary_ix(&self, new_beneficiary: &Pubkey) -> Instruction {
        Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: SetBeneficiary {
                pool_manager: self.data.manager,
                admin: self.admin,
                beneficiary: *new_beneficiary,
            }
            .into(),
            data: anchor_sighash("set_beneficiary").to_vec(),
        }
    }

    pub fn set_beneficiary_tx(&self, new_beneficiary: &Pubkey) -> Transaction {
        self.sdk.new_tx(&[self.set_beneficiary_ix(new_beneficiary)])
    }

    /// Set the manager's operator.
    pub fn set_operator_ix(&self, new_operator: &Pubkey) -> Instruction {
        Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: SetOperator {
                pool_manager: self.data.manager,
                admin: self.admin,
                operator: *new_operator,
            }
            .into(),
            data: anchor_sighash("set_operator").to_vec(),
        }
    }

    pub fn set_operator_tx(&self, new_operator: &Pubkey) -> Transaction {
        self.sdk.new_tx(&[self.set_operator_ix(new_operator)])
    }

    /// Sweeps accumulated admin fees on both token sides to `beneficiary`,
    /// creating the destination token accounts if needed.
    pub fn send_fees_to_beneficiary_ixs(
        &self,
        swap_state: &SwapState,
        beneficiary: &Pubkey,
    ) -> Vec<Instruction> {
        let payer = self.sdk.payer();
        let beneficiary_a = get_associated_token_address(beneficiary, &self.data.mint_a);
        let beneficiary_b = get_associated_token_address(beneficiary, &self.data.mint_b);

        let mut instructions = vec![
            create_ata_idempotent_ix(&payer, beneficiary, &self.data.mint_a),
            create_ata_idempotent_ix(&payer, beneficiary, &self.data.mint_b),
        ];

        let data = anchor_sighash("send_fees_to_beneficiary").to_vec();
        for (fee_account, beneficiary_account) in [
            (swap_state.token_a.admin_fees, beneficiary_a),
            (swap_state.token_b.admin_fees, beneficiary_b),
        ] {
            instructions.push(Instruction {
                program_id: POOLS_PROGRAM_ID,
                accounts: SendFeesToBeneficiary {
                    pool_manager: self.data.manager,
                    pool: self.key,
                    fee_account,
                    beneficiary_account,
                    token_program: spl_token::ID,
                }
                .into(),
                data: data.clone(),
            });
        }

        instructions
    }

    /// Fetches the manager's current beneficiary, then builds the sweep.
    pub async fn send_fees_to_beneficiary_tx(&self, swap_state: &SwapState) -> Result<Transaction> {
        let (account, _) = self
            .sdk
            .fetch_account(&self.data.manager, "pool manager")
            .await?;
        let manager = PoolManager::from_account_data(&account.data)?;

        Ok(self
            .sdk
            .new_tx(&self.send_fees_to_beneficiary_ixs(swap_state, &manager.beneficiary)))
    }

    fn swap_context_ix(&self, data: Vec<u8>) -> Instruction {
        Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: self.common_accounts().into(),
            data,
        }
    }

    fn common_accounts(&self) -> SwapContext {
        SwapContext {
            pool_manager: self.data.manager,
            swap: self.data.swap,
            pool: self.key,
            swap_program: SWAP_PROGRAM_ID,
            admin: self.admin,
        }
    }
}
