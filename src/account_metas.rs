use anchor_lang::prelude::AccountMeta;
use solana_sdk::pubkey::Pubkey;

pub(crate) struct NewPoolManager {
    pub pool_manager: Pubkey,
    pub base: Pubkey,
    pub admin: Pubkey,
    pub operator: Pubkey,
    pub beneficiary: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
}

impl From<NewPoolManager> for Vec<AccountMeta> {
    fn from(accounts: NewPoolManager) -> Self {
        vec![
            AccountMeta::new(accounts.pool_manager, false),
            AccountMeta::new_readonly(accounts.base, true),
            AccountMeta::new_readonly(accounts.admin, false),
            AccountMeta::new_readonly(accounts.operator, false),
            AccountMeta::new_readonly(accounts.beneficiary, false),
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(accounts.system_program, false),
        ]
    }
}

/// Common accounts of every swap-admin instruction of the pools program.
pub(crate) struct SwapContext {
    pub pool_manager: Pubkey,
    pub swap: Pubkey,
    pub pool: Pubkey,
    pub swap_program: Pubkey,
    pub admin: Pubkey,
}

impl From<SwapContext> for Vec<AccountMeta> {
    fn from(accounts: SwapContext) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.pool_manager, false),
            AccountMeta::new(accounts.swap, false),
            AccountMeta::new_readonly(accounts.pool, false),
            AccountMeta::new_readonly(accounts.swap_program, false),
            AccountMeta::new_readonly(accounts.admin, true),
        ]
    }
}

pub(crate) struct CommitNewAdmin {
    pub pool_manager: Pubkey,
    pub swap: Pubkey,
    pub pool: Pubkey,
    pub admin: Pubkey,
    pub new_admin: Pubkey,
    pub swap_program: Pubkey,
}

impl From<CommitNewAdmin> for Vec<AccountMeta> {
    fn from(accounts: CommitNewAdmin) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.pool_manager, false),
            AccountMeta::new(accounts.swap, false),
            AccountMeta::new_readonly(accounts.pool, false),
            AccountMeta::new_readonly(accounts.admin, true),
            AccountMeta::new_readonly(accounts.new_admin, false),
            AccountMeta::new_readonly(accounts.swap_program, false),
        ]
    }
}

pub(crate) struct SendFeesToBeneficiary {
    pub pool_manager: Pubkey,
    pub pool: Pubkey,
    pub fee_account: Pubkey,
    pub beneficiary_account: Pubkey,
    pub token_program: Pubkey,
}

impl From<SendFeesToBeneficiary> for Vec<AccountMeta> {
    fn from(accounts: SendFeesToBeneficiary) -> Self {
        vec![
            AccountMeta::new_readonly(accounts.pool_manager, false),
            AccountMeta::new_readonly(accounts.pool, false),
            AccountMeta::new(accounts.fee_account, false),
            AccountMeta::new(accounts.beneficiary_account, false),
            AccountMeta::new_readonly(accounts.token_program, false),
        ]
    }
}

pub(crate) struct SetOperator {
    pub pool_manager: Pubkey,
    pub admin: Pubkey,
    pub operator: Pubkey,
}

impl From<SetOperator> for Vec<AccountMeta> {
    fn from(accounts: SetOperator) -> Self {
        vec![
            AccountMeta::new(accounts.pool_manager, false),
            AccountMeta::new_readonly(accounts.admin, true),
            AccountMeta::new_readonly(accounts.operator, false),
        ]
    }
}

pub(crate) struct SetBeneficiary {
    pub pool_manager: Pubkey,
    pub admin: Pubkey,
    pub beneficiary: Pubkey,
}

impl From<SetBeneficiary> for Vec<AccountMeta> {
    fn from(accounts: SetBeneficiary) -> Self {
        vec![
            AccountMeta::new(accounts.pool_manager, false),
            AccountMeta::new_readonly(accounts.admin, true),
            AccountMeta::new_readonly(accounts.beneficiary, false),
        ]
    }
}

pub(crate) struct ImportPool {
    pub pool_manager: Pubkey,
    pub swap: Pubkey,
    pub pool: Pubkey,
    pub token_a_fees: Pubkey,
    pub token_b_fees: Pubkey,
    pub lp_mint: Pubkey,
    pub payer: Pubkey,
    pub system_program: Pubkey,
}

impl From<ImportPool> for Vec<AccountMeta> {
    fn from(accounts: ImportPool) -> Self {
        vec![
            AccountMeta::new(accounts.pool_manager, false),
            AccountMeta::new_readonly(accounts.swap, false),
            AccountMeta::new(accounts.pool, false),
            AccountMeta::new_readonly(accounts.token_a_fees, false),
            AccountMeta::new_readonly(accounts.token_b_fees, false),
            AccountMeta::new_readonly(accounts.lp_mint, false),
            AccountMeta::new(accounts.payer, true),
            AccountMeta::new_readonly(accounts.system_program, false),
        ]
    }
}

pub(crate) struct ImportPoolAsOperator {
    pub admin_or_operator: Pubkey,
    pub import_pool: ImportPool,
}

impl From<ImportPoolAsOperator> for Vec<AccountMeta> {
    fn from(accounts: ImportPoolAsOperator) -> Self {
        let mut metas = vec![AccountMeta::new_readonly(accounts.admin_or_operator, true)];
        metas.extend(Vec::<AccountMeta>::from(accounts.import_pool));
        metas
    }
}
