//! Creates a set of Goki instruction buffers and records their addresses in
//! `.configs/buffers.json`.

use std::fs;
use std::path::Path;

use anyhow::Result;
use log::info;
use saber_pool_manager_sdk::buffer::{InitBufferArgs, init_buffer_ixs};
use saber_pool_manager_sdk::registry::Network;
use saber_pool_manager_scripts::config;
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;
use solana_sdk::transaction::Transaction;

const NUM_BUNDLES: u8 = 25;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let network = Network::from_env()?;
    let keys = config::load_keys_config()?;
    let rpc = RpcClient::new_with_commitment(
        config::rpc_url(network)?,
        CommitmentConfig::confirmed(),
    );

    let num_buffers = config::env_usize("NUM_BUFFERS", 4)?;
    let buffer_size = config::env_usize("BUFFER_SIZE", 100 * 412)?;

    let mut buffers = Vec::new();
    for i in 0..num_buffers {
        let buffer = Keypair::new();
        let instructions = init_buffer_ixs(
            &rpc,
            InitBufferArgs {
                buffer: buffer.pubkey(),
                buffer_size,
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
        let signature = rpc.send_and_confirm_transaction(&tx).await?;
        info!(
            "buffer {}/{}: {} ({})",
            i + 1,
            num_buffers,
            buffer.pubkey(),
            signature
        );

        buffers.push(buffer.pubkey().to_string());
    }

    let buffers_json =
        serde_json::to_string_pretty(&serde_json::json!({ "buffers": buffers }))?;
    println!("{}", buffers_json);

    let out = Path::new(config::CONFIG_DIR).join("buffers.json");
    fs::write(&out, buffers_json)?;
    info!("wrote {}", out.display());

    Ok(())
}
