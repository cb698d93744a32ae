//! Stages a set-new-fees instruction for every registry pool across the
//! configured instruction buffers, then reads the buffers back.
//!
//! Deprecated pools are skipped unless INCLUDE_DEPRECATED is set.

use std::env;

use anyhow::Result;
use log::{info, warn};
use saber_pool_manager_sdk::buffer::{BufferWriter, load_buffer};
use saber_pool_manager_sdk::registry::{Network, fetch_pools_registry};
use saber_pool_manager_sdk::{PoolManagerSDK, RECOMMENDED_FEES, pack_into_transactions};
use saber_pool_manager_scripts::config;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let network = Network::from_env()?;
    let keys = config::load_keys_config()?;
    let buffers = config::load_buffers()?;
    let include_deprecated = env::var("INCLUDE_DEPRECATED").is_ok();

    let sdk = PoolManagerSDK::new(
        &config::rpc_url(network)?,
        CommitmentLevel::Confirmed,
        keys.payer.pubkey(),
    );
    let mut manager = sdk.load_manager(keys.pool_manager).await?;

    let registry = fetch_pools_registry(network).await?;
    info!("registry lists {} pools on {}", registry.pools.len(), network);

    let mut writer = BufferWriter::new(buffers, keys.buffer_authority.pubkey())?;
    let mut append_ixs = Vec::new();
    for pool in &registry.pools {
        if !include_deprecated && pool.is_deprecated() {
            info!("skipping deprecated pool {}", pool.name);
            continue;
        }

        let (mint_a, mint_b) = match pool.token_mints() {
            Ok(mints) => mints,
            Err(err) => {
                warn!("{:#}", err);
                continue;
            }
        };

        let wrapper = match manager.load_pool_wrapper_from_mints(&mint_a, &mint_b).await {
            Ok(wrapper) => wrapper,
            Err(err) => {
                warn!("failed to load pool wrapper for {}: {:#}", pool.name, err);
                continue;
            }
        };

        let fee_ix = wrapper.set_new_fees_ix(&RECOMMENDED_FEES)?;
        info!(
            "{}: staging trade fee {}%",
            pool.name,
            RECOMMENDED_FEES.trade.as_percent()
        );
        append_ixs.push(writer.stage(&fee_ix)?);
    }
    info!("staged {} instructions", append_ixs.len());

    let txs = pack_into_transactions(&keys.payer.pubkey(), &append_ixs)?;
    for (i, mut tx) in txs.into_iter().enumerate() {
        info!("tx number: {}", i);
        let recent_blockhash = sdk.rpc().get_latest_blockhash().await?;
        tx.sign(&[&keys.payer, &keys.buffer_authority], recent_blockhash);
        let signature = sdk.rpc().send_and_confirm_transaction(&tx).await?;
        info!("confirmed {}", signature);
    }

    for buffer in writer.buffers() {
        let buffer_data = load_buffer(sdk.rpc(), buffer).await?;
        info!("buffer {}, bundles: {}", buffer, buffer_data.bundles.len());
    }

    Ok(())
}
