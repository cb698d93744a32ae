use saber_pool_manager_sdk::{
    FeeRatio, Fees, MIN_RAMP_DURATION, NewManagerArgs, NewStableSwapArgs, POOLS_PROGRAM_ID, Pool,
    PoolManagerSDK, PoolWrapper, SWAP_PROGRAM_ID, Snapshot, SwapFees, SwapState, SwapTokenInfo,
    find_pool_manager_address,
};
use solana_sdk::hash;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::pubkey::Pubkey;

fn sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash::hash(preimage.as_bytes()).to_bytes()[..8]);
    sighash
}

fn offline_sdk(payer: Pubkey) -> PoolManagerSDK {
    PoolManagerSDK::new("http://127.0.0.1:8899", CommitmentLevel::Confirmed, payer)
}

fn sample_pool(manager: Pubkey) -> Pool {
    Pool {
        manager,
        mint_a: Pubkey::new_from_array([1; 32]),
        mint_b: Pubkey::new_from_array([2; 32]),
        bump: 255,
        swap: Pubkey::new_unique(),
        index: 1,
        token_a_fees: Pubkey::new_unique(),
        token_b_fees: Pubkey::new_unique(),
        lp_mint: Pubkey::new_unique(),
        token_decimals: 6,
        permissionless_import: true,
    }
}

#[test]
fn ramp_a_encodes_target_and_timestamp() {
    let payer = Pubkey::new_unique();
    let sdk = offline_sdk(payer);
    let manager = Pubkey::new_unique();
    let admin = Pubkey::new_unique();
    let pool = sample_pool(manager);
    let pool_key = Pubkey::new_unique();
    let wrapper = PoolWrapper::new(&sdk, pool_key, Snapshot { data: pool, slot: 42 }, admin);

    let stop_ramp_ts = 1_650_000_000 + MIN_RAMP_DURATION;
    let ix = wrapper.ramp_a_ix(200, stop_ramp_ts);

    assert_eq!(ix.program_id, POOLS_PROGRAM_ID);
    assert_eq!(ix.data[..8], sighash("ramp_a"));
    assert_eq!(ix.data[8..16], 200u64.to_le_bytes());
    assert_eq!(ix.data[16..24], stop_ramp_ts.to_le_bytes());

    // common accounts: manager, swap, pool, swap program, admin
    assert_eq!(ix.accounts.len(), 5);
    assert_eq!(ix.accounts[0].pubkey, manager);
    assert_eq!(ix.accounts[1].pubkey, pool.swap);
    assert!(ix.accounts[1].is_writable);
    assert_eq!(ix.accounts[2].pubkey, pool_key);
    assert_eq!(ix.accounts[3].pubkey, SWAP_PROGRAM_ID);
    assert_eq!(ix.accounts[4].pubkey, admin);
    assert!(ix.accounts[4].is_signer);
}

#[test]
fn pause_and_unpause_share_accounts_but_not_data() {
    let sdk = offline_sdk(Pubkey::new_unique());
    let pool = sample_pool(Pubkey::new_unique());
    let wrapper = PoolWrapper::new(
        &sdk,
        Pubkey::new_unique(),
        Snapshot { data: pool, slot: 0 },
        Pubkey::new_unique(),
    );

    let pause = wrapper.pause_swap_ix();
    let unpause = wrapper.unpause_swap_ix();
    assert_eq!(pause.accounts, unpause.accounts);
    assert_eq!(pause.data, sighash("pause_swap"));
    assert_eq!(unpause.data, sighash("unpause_swap"));

    let stop_ramp = wrapper.stop_ramp_a_ix();
    assert_eq!(stop_ramp.data, sighash("stop_ramp_a"));
}

#[test]
fn commit_then_apply_target_the_same_swap() {
    let sdk = offline_sdk(Pubkey::new_unique());
    let pool = sample_pool(Pubkey::new_unique());
    let wrapper = PoolWrapper::new(
        &sdk,
        Pubkey::new_unique(),
        Snapshot { data: pool, slot: 0 },
        Pubkey::new_unique(),
    );

    let new_admin = Pubkey::new_unique();
    let commit = wrapper.commit_new_admin_ix(&new_admin);
    assert_eq!(commit.data, sighash("commit_new_admin"));
    assert_eq!(commit.accounts.len(), 6);
    assert_eq!(commit.accounts[4].pubkey, new_admin);

    let apply = wrapper.apply_new_admin_ix();
    assert_eq!(apply.data, sighash("apply_new_admin"));
    // both address the same swap account
    assert_eq!(commit.accounts[1].pubkey, apply.accounts[1].pubkey);
}

#[test]
fn set_new_fees_encodes_the_wire_order() {
    let sdk = offline_sdk(Pubkey::new_unique());
    let pool = sample_pool(Pubkey::new_unique());
    let wrapper = PoolWrapper::new(
        &sdk,
        Pubkey::new_unique(),
        Snapshot { data: pool, slot: 0 },
        Pubkey::new_unique(),
    );

    let fees = Fees {
        trade: FeeRatio::new(6, 10_000).unwrap(),
        withdraw: FeeRatio::new(0, 10_000).unwrap(),
        admin_trade: FeeRatio::new(1, 10_000).unwrap(),
        admin_withdraw: FeeRatio::new(2, 10_000).unwrap(),
    };
    let ix = wrapper.set_new_fees_ix(&fees).unwrap();

    assert_eq!(ix.data[..8], sighash("set_new_fees"));
    assert_eq!(ix.data.len(), 8 + SwapFees::LEN);
    // admin trade, admin withdraw, trade, withdraw; numerator first
    assert_eq!(ix.data[8..16], 1u64.to_le_bytes());
    assert_eq!(ix.data[24..32], 2u64.to_le_bytes());
    assert_eq!(ix.data[40..48], 6u64.to_le_bytes());
    assert_eq!(ix.data[48..56], 10_000u64.to_le_bytes());
    assert_eq!(ix.data[56..64], 0u64.to_le_bytes());
}

#[test]
fn set_beneficiary_and_operator_address_the_manager() {
    let sdk = offline_sdk(Pubkey::new_unique());
    let manager = Pubkey::new_unique();
    let admin = Pubkey::new_unique();
    let pool = sample_pool(manager);
    let wrapper = PoolWrapper::new(
        &sdk,
        Pubkey::new_unique(),
        Snapshot { data: pool, slot: 0 },
        admin,
    );

    let beneficiary = Pubkey::new_unique();
    let ix = wrapper.set_beneficiary_ix(&beneficiary);
    assert_eq!(ix.data, sighash("set_beneficiary"));
    assert_eq!(ix.accounts.len(), 3);
    assert_eq!(ix.accounts[0].pubkey, manager);
    assert!(ix.accounts[0].is_writable);
    assert_eq!(ix.accounts[1].pubkey, admin);
    assert!(ix.accounts[1].is_signer);
    assert_eq!(ix.accounts[2].pubkey, beneficiary);

    let operator = Pubkey::new_unique();
    let ix = wrapper.set_operator_ix(&operator);
    assert_eq!(ix.data, sighash("set_operator"));
    assert_eq!(ix.accounts[2].pubkey, operator);
}

#[test]
fn fee_sweep_pairs_fee_accounts_with_beneficiary_atas() {
    let sdk = offline_sdk(Pubkey::new_unique());
    let manager = Pubkey::new_unique();
    let pool = sample_pool(manager);
    let pool_key = Pubkey::new_unique();
    let wrapper = PoolWrapper::new(
        &sdk,
        pool_key,
        Snapshot { data: pool, slot: 0 },
        Pubkey::new_unique(),
    );

    let swap_state = SwapState {
        is_initialized: true,
        admin_key: pool_key,
        token_a: SwapTokenInfo {
            reserves: Pubkey::new_unique(),
            mint: pool.mint_a,
            admin_fees: Pubkey::new_unique(),
        },
        token_b: SwapTokenInfo {
            reserves: Pubkey::new_unique(),
            mint: pool.mint_b,
            admin_fees: Pubkey::new_unique(),
        },
        ..SwapState::default()
    };

    let beneficiary = Pubkey::new_unique();
    let ixs = wrapper.send_fees_to_beneficiary_ixs(&swap_state, &beneficiary);

    // two idempotent ATA creations, then one sweep per token side
    assert_eq!(ixs.len(), 4);
    assert_eq!(ixs[0].program_id, spl_associated_token_account::ID);
    assert_eq!(ixs[1].program_id, spl_associated_token_account::ID);

    for (ix, token) in ixs[2..].iter().zip([swap_state.token_a, swap_state.token_b]) {
        assert_eq!(ix.program_id, POOLS_PROGRAM_ID);
        assert_eq!(ix.data, sighash("send_fees_to_beneficiary"));
        assert_eq!(ix.accounts.len(), 5);
        assert_eq!(ix.accounts[0].pubkey, manager);
        assert_eq!(ix.accounts[1].pubkey, pool_key);
        assert_eq!(ix.accounts[2].pubkey, token.admin_fees);
        assert!(ix.accounts[2].is_writable);
        assert_eq!(ix.accounts[4].pubkey, spl_token::ID);
    }
}

#[tokio::test]
async fn unsorted_mints_are_rejected_before_any_network_call() {
    let sdk = offline_sdk(Pubkey::new_unique());
    let pending = sdk
        .new_manager(NewManagerArgs {
            base: Pubkey::new_unique(),
            admin: Pubkey::new_unique(),
            operator: None,
            beneficiary: None,
        })
        .unwrap();
    let mut wrapper = pending.wrapper;

    // mint A above mint B; the sorted entry point must refuse without
    // touching the (unreachable) RPC endpoint
    let args = NewStableSwapArgs {
        amp_factor: 100,
        swap_account: Pubkey::new_unique(),
        mint_a: Pubkey::new_from_array([2; 32]),
        reserve_a: Pubkey::new_unique(),
        mint_b: Pubkey::new_from_array([1; 32]),
        reserve_b: Pubkey::new_unique(),
        lp_mint: Pubkey::new_unique(),
        output_lp: None,
    };
    let err = wrapper.new_stable_swap_sorted(args).await.unwrap_err();
    assert!(err.to_string().contains("mints must be sorted"));
}

#[test]
fn new_manager_derives_and_initializes() {
    let payer = Pubkey::new_unique();
    let sdk = offline_sdk(payer);
    let base = Pubkey::new_unique();
    let admin = Pubkey::new_unique();

    let pending = sdk
        .new_manager(NewManagerArgs {
            base,
            admin,
            operator: None,
            beneficiary: None,
        })
        .unwrap();

    let (expected_key, expected_bump) = find_pool_manager_address(&base).unwrap();
    assert_eq!(pending.wrapper.key, expected_key);
    assert!(pending.wrapper.data.is_none());

    let message = &pending.tx.message;
    assert_eq!(message.instructions.len(), 1);
    let ix = &message.instructions[0];
    assert_eq!(
        message.account_keys[ix.program_id_index as usize],
        POOLS_PROGRAM_ID
    );
    assert_eq!(ix.data[..8], sighash("new_pool_manager"));
    assert_eq!(ix.data[8], expected_bump);

    // accounts: manager, base, admin, operator, beneficiary, payer, system
    let keys: Vec<Pubkey> = ix
        .accounts
        .iter()
        .map(|index| message.account_keys[*index as usize])
        .collect();
    assert_eq!(keys[0], expected_key);
    assert_eq!(keys[1], base);
    assert_eq!(keys[2], admin);
    // operator and beneficiary default to the admin
    assert_eq!(keys[3], admin);
    assert_eq!(keys[4], admin);
    assert_eq!(keys[5], payer);
    assert!(message.is_signer(message
        .account_keys
        .iter()
        .position(|key| *key == base)
        .unwrap()));
}
