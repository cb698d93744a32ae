use anyhow::{Context, Result, bail};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::clock::Slot;
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

use crate::constants::POOL_MANAGER_KEY;
use crate::params::{NewManagerArgs, PendingPoolManager};
use crate::pool_manager::PoolManagerWrapper;

/// Entry point of the SDK. Owns the RPC connection and the default payer
/// identity; wrappers borrow it.
pub struct PoolManagerSDK {
    rpc_client: RpcClient,
    payer: Pubkey,
}

impl PoolManagerSDK {
    /// Create a new SDK instance.
    pub fn new(rpc_endpoint: &str, commitment_level: CommitmentLevel, payer: Pubkey) -> Self {
        let commitment_config = CommitmentConfig {
            commitment: commitment_level,
        };

        Self {
            rpc_client: RpcClient::new_with_commitment(rpc_endpoint.to_string(), commitment_config),
            payer,
        }
    }

    pub fn rpc(&self) -> &RpcClient {
        &self.rpc_client
    }

    /// Identity paying for (and expected to sign) built transactions.
    pub fn payer(&self) -> Pubkey {
        self.payer
    }

    /// Builds an unsigned transaction paid by the SDK's payer. Signing,
    /// submission and confirmation stay with the caller.
    pub fn new_tx(&self, instructions: &[Instruction]) -> Transaction {
        Transaction::new_with_payer(instructions, Some(&self.payer))
    }

    /// Loads the deployed Saber pool manager.
    pub async fn load_default_manager(&self) -> Result<PoolManagerWrapper<'_>> {
        self.load_manager(POOL_MANAGER_KEY).await
    }

    /// Loads a pool manager by address.
    pub async fn load_manager(&self, key: Pubkey) -> Result<PoolManagerWrapper<'_>> {
        PoolManagerWrapper::load(self, key).await
    }

    /// Derives a new pool manager and builds its init transaction.
    pub fn new_manager(&self, args: NewManagerArgs) -> Result<PendingPoolManager<'_>> {
        PoolManagerWrapper::new_wrapper(self, args)
    }

    /// Fetches raw account data plus the slot it was observed at.
    pub(crate) async fn fetch_account(&self, key: &Pubkey, what: &str) -> Result<(Account, Slot)> {
        let response = self
            .rpc_client
            .get_account_with_commitment(key, self.rpc_client.commitment())
            .await
            .with_context(|| format!("failed to fetch {} {}", what, key))?;
        match response.value {
            Some(account) => Ok((account, response.context.slot)),
            None => bail!("{} not found: {}", what, key),
        }
    }
}
