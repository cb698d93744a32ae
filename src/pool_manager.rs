//! Wrapper around a fetched [PoolManager] account: loads pools, creates new
//! swaps, and imports existing ones.

use anyhow::{Result, bail};
use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;
use solana_system_interface::instruction as system_instruction;
use spl_associated_token_account::get_associated_token_address;

use crate::account_metas::{ImportPool, ImportPoolAsOperator, NewPoolManager};
use crate::constants::{POOLS_PROGRAM_ID, SWAP_PROGRAM_ID};
use crate::params::{
    NewManagerArgs, NewStableSwapArgs, PendingPool, PendingPoolManager, PendingStableSwap,
};
use crate::pda::{find_pool_address, find_pool_address_sorted, find_pool_manager_address};
use crate::pool::PoolWrapper;
use crate::sdk::PoolManagerSDK;
use crate::state::{Pool, PoolManager, Snapshot};
use crate::swap::{
    self, InitializeSwapArgs, SwapState, SwapTokenInfo, find_swap_authority, initialize_swap_ix,
};
use crate::utils::{anchor_sighash, create_ata_idempotent_ix};

pub struct PoolManagerWrapper<'a> {
    sdk: &'a PoolManagerSDK,
    pub key: Pubkey,
    pub data: Option<Snapshot<PoolManager>>,
}

impl<'a> PoolManagerWrapper<'a> {
    /// Derives a new manager and builds its init transaction. The base key
    /// must co-sign the returned transaction.
    pub(crate) fn new_wrapper(
        sdk: &'a PoolManagerSDK,
        args: NewManagerArgs,
    ) -> Result<PendingPoolManager<'a>> {
        let NewManagerArgs {
            base,
            admin,
            operator,
            beneficiary,
        } = args;
        let (pool_manager, bump) = find_pool_manager_address(&base)?;

        let mut data = anchor_sighash("new_pool_manager").to_vec();
        data.push(bump);
        let init_ix = Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: NewPoolManager {
                pool_manager,
                base,
                admin,
                operator: operator.unwrap_or(admin),
                beneficiary: beneficiary.unwrap_or(admin),
                payer: sdk.payer(),
                system_program: solana_system_interface::program::ID,
            }
            .into(),
            data,
        };

        Ok(PendingPoolManager {
            wrapper: Self {
                sdk,
                key: pool_manager,
                data: None,
            },
            tx: sdk.new_tx(&[init_ix]),
        })
    }

    pub(crate) async fn load(sdk: &'a PoolManagerSDK, key: Pubkey) -> Result<Self> {
        let mut wrapper = Self {
            sdk,
            key,
            data: None,
        };
        wrapper.reload().await?;
        Ok(wrapper)
    }

    /// Refetches the manager account. The only way the cached snapshot ever
    /// changes.
    pub async fn reload(&mut self) -> Result<Snapshot<PoolManager>> {
        let (account, slot) = self.sdk.fetch_account(&self.key, "pool manager").await?;
        let snapshot = Snapshot {
            data: PoolManager::from_account_data(&account.data)?,
            slot,
        };
        self.data = Some(snapshot);
        Ok(snapshot)
    }

    /// Fetches a pool account by address.
    pub async fn load_pool(&self, key: Pubkey) -> Result<Snapshot<Pool>> {
        let (account, slot) = self.sdk.fetch_account(&key, "pool").await?;
        Ok(Snapshot {
            data: Pool::from_account_data(&account.data)?,
            slot,
        })
    }

    /// Fetches a pool and wraps it with the manager's current admin.
    pub async fn load_pool_wrapper(&mut self, pool_key: Pubkey) -> Result<PoolWrapper<'a>> {
        let pool = self.load_pool(pool_key).await?;
        let manager = match self.data {
            Some(snapshot) => snapshot,
            None => self.reload().await?,
        };
        Ok(PoolWrapper::new(self.sdk, pool_key, pool, manager.admin))
    }

    /// Derives the pool of the mint pair, then loads its wrapper.
    pub async fn load_pool_wrapper_from_mints(
        &mut self,
        mint_a: &Pubkey,
        mint_b: &Pubkey,
    ) -> Result<PoolWrapper<'a>> {
        let (pool_key, _) = find_pool_address(&self.key, mint_a, mint_b)?;
        self.load_pool_wrapper(pool_key).await
    }

    /// Initializes a new StableSwap for the mint pair, sorting the inputs
    /// into canonical order first.
    pub async fn new_stable_swap(&mut self, args: NewStableSwapArgs) -> Result<PendingStableSwap> {
        let sorted = if args.mint_a < args.mint_b {
            args
        } else {
            NewStableSwapArgs {
                mint_a: args.mint_b,
                reserve_a: args.reserve_b,
                mint_b: args.mint_a,
                reserve_b: args.reserve_a,
                ..args
            }
        };
        self.new_stable_swap_sorted(sorted).await
    }

    /// Initializes a new StableSwap, assuming the inputs are sorted. The
    /// built transaction allocates the swap account, initializes it with
    /// the pool as admin, and imports the pool permissionlessly.
    pub async fn new_stable_swap_sorted(
        &mut self,
        args: NewStableSwapArgs,
    ) -> Result<PendingStableSwap> {
        if args.mint_a >= args.mint_b {
            bail!("mints must be sorted");
        }

        let manager = self.reload().await?;
        let initial_fees = manager.initial_fees;
        let payer = self.sdk.payer();

        let mut instructions: Vec<Instruction> = Vec::new();

        let destination_pool_token_account = match args.output_lp {
            Some(output_lp) => output_lp,
            None => {
                instructions.push(create_ata_idempotent_ix(&payer, &payer, &args.lp_mint));
                get_associated_token_address(&payer, &args.lp_mint)
            }
        };

        let (pool, bump) = find_pool_address_sorted(&self.key, &args.mint_a, &args.mint_b)?;

        // Fee accounts must be ATAs of the pool itself.
        let token_a_fees = get_associated_token_address(&pool, &args.mint_a);
        let token_b_fees = get_associated_token_address(&pool, &args.mint_b);
        instructions.push(create_ata_idempotent_ix(&payer, &pool, &args.mint_a));
        instructions.push(create_ata_idempotent_ix(&payer, &pool, &args.mint_b));

        let balance_needed = self
            .sdk
            .rpc()
            .get_minimum_balance_for_rent_exemption(SwapState::LEN)
            .await?;
        instructions.push(system_instruction::create_account(
            &payer,
            &args.swap_account,
            balance_needed,
            SwapState::LEN as u64,
            &SWAP_PROGRAM_ID,
        ));

        let (swap_authority, swap_nonce) = find_swap_authority(&args.swap_account)?;
        instructions.push(initialize_swap_ix(InitializeSwapArgs {
            swap_account: args.swap_account,
            authority: swap_authority,
            admin: pool,
            token_a: SwapTokenInfo {
                reserves: args.reserve_a,
                mint: args.mint_a,
                admin_fees: token_a_fees,
            },
            token_b: SwapTokenInfo {
                reserves: args.reserve_b,
                mint: args.mint_b,
                admin_fees: token_b_fees,
            },
            pool_mint: args.lp_mint,
            destination_pool_token_account,
            nonce: swap_nonce,
            amp_factor: args.amp_factor,
            fees: &initial_fees,
        })?);

        let mut data = anchor_sighash("import_pool_permissionless").to_vec();
        data.push(bump);
        instructions.push(Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: self
                .import_pool_accounts(args.swap_account, pool, args.lp_mint, token_a_fees, token_b_fees)
                .into(),
            data,
        });

        Ok(PendingStableSwap {
            swap_account: args.swap_account,
            lp_mint: args.lp_mint,
            pool_key: pool,
            pool_bump: bump,
            tx: self.sdk.new_tx(&instructions),
        })
    }

    /// Imports an externally created swap under operator authority. The
    /// swap's current admin must co-sign: the built transaction re-points
    /// the swap's fee accounts and hands the admin role to the pool before
    /// importing it.
    pub async fn import_pool_as_operator(
        &self,
        swap_account: Pubkey,
        admin_or_operator: Option<Pubkey>,
    ) -> Result<PendingPool> {
        let admin_or_operator = admin_or_operator.unwrap_or(self.sdk.payer());
        let (account, _) = self.sdk.fetch_account(&swap_account, "swap").await?;
        let state = SwapState::from_account_data(&account.data)?;

        let (pool, bump) =
            find_pool_address(&self.key, &state.token_a.mint, &state.token_b.mint)?;

        let payer = self.sdk.payer();
        let token_a_fees = get_associated_token_address(&pool, &state.token_a.mint);
        let token_b_fees = get_associated_token_address(&pool, &state.token_b.mint);

        let mut instructions = vec![
            create_ata_idempotent_ix(&payer, &pool, &state.token_a.mint),
            create_ata_idempotent_ix(&payer, &pool, &state.token_b.mint),
            swap::set_fee_account_ix(&swap_account, &state.admin_key, &token_a_fees),
            swap::set_fee_account_ix(&swap_account, &state.admin_key, &token_b_fees),
            swap::commit_new_admin_ix(&swap_account, &state.admin_key, &pool),
            swap::apply_new_admin_ix(&swap_account, &state.admin_key),
        ];

        let mut data = anchor_sighash("import_pool_as_operator").to_vec();
        data.push(bump);
        instructions.push(Instruction {
            program_id: POOLS_PROGRAM_ID,
            accounts: ImportPoolAsOperator {
                admin_or_operator,
                import_pool: self.import_pool_accounts(
                    swap_account,
                    pool,
                    state.pool_mint,
                    token_a_fees,
                    token_b_fees,
                ),
            }
            .into(),
            data,
        });

        Ok(PendingPool {
            pool_key: pool,
            pool_bump: bump,
            tx: self.sdk.new_tx(&instructions),
        })
    }

    fn import_pool_accounts(
        &self,
        swap: Pubkey,
        pool: Pubkey,
        lp_mint: Pubkey,
        token_a_fees: Pubkey,
        token_b_fees: Pubkey,
    ) -> ImportPool {
        ImportPool {
            pool_manager: self.key,
            swap,
            pool,
            token_a_fees,
            token_b_fees,
            lp_mint,
            payer: self.sdk.payer(),
            system_program: solana_system_interface::program::ID,
        }
    }
}
