//! Applies the recommended fee schedule to every registry pool directly,
//! without buffer staging. Requires the payer to be the manager admin.

use anyhow::{Result, bail};
use log::{info, warn};
use saber_pool_manager_sdk::registry::{Network, fetch_pools_registry};
use saber_pool_manager_sdk::{PoolManagerSDK, RECOMMENDED_FEES};
use saber_pool_manager_scripts::config;
use solana_sdk::commitment_config::CommitmentLevel;
use solana_sdk::signer::Signer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let network = Network::from_env()?;
    let keys = config::load_keys_config()?;

    let sdk = PoolManagerSDK::new(
        &config::rpc_url(network)?,
        CommitmentLevel::Confirmed,
        keys.payer.pubkey(),
    );
    let mut manager = sdk.load_manager(keys.pool_manager).await?;

    let admin = match manager.data {
        Some(snapshot) => snapshot.admin,
        None => bail!("pool manager data must exist"),
    };
    if admin != keys.payer.pubkey() {
        bail!("payer {} is not the pool manager admin {}", keys.payer.pubkey(), admin);
    }

    let registry = fetch_pools_registry(network).await?;
    info!("registry lists {} pools on {}", registry.pools.len(), network);

    for pool in &registry.pools {
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

        let mut tx = wrapper.set_new_fees_tx(&RECOMMENDED_FEES)?;
        let recent_blockhash = sdk.rpc().get_latest_blockhash().await?;
        tx.sign(&[&keys.payer], recent_blockhash);
        let signature = sdk.rpc().send_and_confirm_transaction(&tx).await?;
        info!(
            "{}: set trade fee to {}% ({})",
            pool.name,
            RECOMMENDED_FEES.trade.as_percent(),
            signature
        );
    }

    Ok(())
}
