//! Creates a single Goki instruction buffer and prints its address.

use anyhow::Result;
use saber_pool_manager_sdk::buffer::{InitBufferArgs, init_buffer_ixs};
use saber_pool_manager_sdk::registry::Network;
use saber_pool_manager_scripts::config;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::packet::PACKET_DATA_SIZE;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

const NUM_BUNDLES: u8 = 25;
const BUFFER_SIZE: usize = 40 * PACKET_DATA_SIZE;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let network = Network::from_env()?;
    let keys = config::load_keys_config()?;
    let rpc = RpcClient::new_with_commitment(
        config::rpc_url(network)?,
        CommitmentConfig::confirmed(),
    );

    let buffer = Keypair::new();
    let instructions = init_buffer_ixs(
        &rpc,
        InitBufferArgs {
            buffer: buffer.pubkey(),
            buffer_size: BUFFER_SIZE,
            num_bundles: NUM_BUNDLES,
            smart_wallet: keys.smart_wallet,
            eta: -1,
            authority: keys.buffer_authority.pubkey(),
            executor: keys.executor_authority.pubkey(),
            payer: keys.payer.pubkey(),
        },
    )
    .await?;

    let recent_blockhash = rpc.get_latest_blockhash().await?;
    let tx = Transaction::new_signed_with_payer(
        &instructions,
        Some(&keys.payer.pubkey()),
        &[
            &keys.payer,
            &buffer,
            &keys.buffer_authority,
            &keys.executor_authority,
        ],
        recent_blockhash,
    );
    rpc.send_and_confirm_transaction(&tx).await?;

    println!(
        "{}",
        serde_json::to_string_pretty(
            &serde_json::json!({ "bufferAccount": buffer.pubkey().to_string() })
        )?
    );

    Ok(())
}
