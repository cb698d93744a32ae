//! Local configuration: key files, network selection, and previously
//! created buffer addresses under `.configs/`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use saber_pool_manager_sdk::registry::Network;
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, read_keypair_file};

pub const CONFIG_DIR: &str = ".configs";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct KeysFile {
    smart_wallet: String,
    pool_manager: String,
    payer_keyfile: String,
    buffer_authority_keyfile: String,
    executor_authority_keyfile: String,
}

/// Key material and addresses the scripts operate with.
pub struct KeysConfig {
    pub smart_wallet: Pubkey,
    pub pool_manager: Pubkey,
    pub payer: Keypair,
    pub buffer_authority: Keypair,
    pub executor_authority: Keypair,
}

/// Loads `.configs/keys.json`. Missing or malformed configuration is fatal.
pub fn load_keys_config() -> Result<KeysConfig> {
    let keys: KeysFile = read_config_file("keys.json")?;
    Ok(KeysConfig {
        smart_wallet: keys
            .smart_wallet
            .parse()
            .context("bad smartWallet address")?,
        pool_manager: keys
            .pool_manager
            .parse()
            .context("bad poolManager address")?,
        payer: read_keyfile(&keys.payer_keyfile)?,
        buffer_authority: read_keyfile(&keys.buffer_authority_keyfile)?,
        executor_authority: read_keyfile(&keys.executor_authority_keyfile)?,
    })
}

#[derive(Deserialize)]
struct RpcUrls {
    localnet: String,
    devnet: String,
    testnet: String,
    #[serde(rename = "mainnet-beta")]
    mainnet_beta: String,
}

/// RPC endpoint for the network, from `.configs/rpc.json`.
pub fn rpc_url(network: Network) -> Result<String> {
    let urls: RpcUrls = read_config_file("rpc.json")?;
    Ok(match network {
        Network::Localnet => urls.localnet,
        Network::Devnet => urls.devnet,
        Network::Testnet => urls.testnet,
        Network::MainnetBeta => urls.mainnet_beta,
    })
}

#[derive(Deserialize)]
struct BuffersFile {
    buffers: Vec<String>,
}

/// Previously created instruction buffers, from `.configs/buffers.json`.
pub fn load_buffers() -> Result<Vec<Pubkey>> {
    let file: BuffersFile = read_config_file("buffers.json")?;
    if file.buffers.is_empty() {
        bail!("no buffer found");
    }
    file.buffers
        .iter()
        .map(|raw| raw.parse().with_context(|| format!("bad buffer address {}", raw)))
        .collect()
}

/// Reads a JSON keypair file, expanding a leading `~`.
pub fn read_keyfile(path: &str) -> Result<Keypair> {
    let expanded: PathBuf = match path.strip_prefix("~/") {
        Some(rest) => Path::new(&env::var("HOME").context("HOME is not set")?).join(rest),
        None => PathBuf::from(path),
    };
    read_keypair_file(&expanded)
        .map_err(|err| anyhow!("failed to read keypair {}: {}", expanded.display(), err))
}

/// Numeric environment override with a default.
pub fn env_usize(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a number, got {:?}", name, raw)),
        Err(_) => Ok(default),
    }
}

fn read_config_file<T: for<'de> Deserialize<'de>>(name: &str) -> Result<T> {
    let path = Path::new(CONFIG_DIR).join(name);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("malformed {}", path.display()))
}
