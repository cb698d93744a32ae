//! Read-only client for the Saber registry feed describing known pools.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;

pub const REGISTRY_URL: &str = "https://registry.saber.so/data";

/// Cluster selection for registry and RPC endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Localnet,
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Network {
    /// Reads `NETWORK` from the environment, defaulting to devnet.
    pub fn from_env() -> Result<Self> {
        match std::env::var("NETWORK") {
            Ok(raw) => raw.parse(),
            Err(_) => Ok(Network::Devnet),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Localnet => "localnet",
            Network::Devnet => "devnet",
            Network::Testnet => "testnet",
            Network::MainnetBeta => "mainnet-beta",
        }
    }

    // The registry publishes no localnet document; localnet deployments
    // mirror devnet.
    fn registry_name(self) -> &'static str {
        match self {
            Network::Localnet => "devnet",
            other => other.name(),
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "localnet" => Ok(Network::Localnet),
            "devnet" => Ok(Network::Devnet),
            "testnet" => Ok(Network::Testnet),
            "mainnet-beta" => Ok(Network::MainnetBeta),
            other => bail!("unknown network: {}", other),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Root of the registry document.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryData {
    pub pools: Vec<RegistryPool>,
}

/// One pool entry of the registry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryPool {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub lp_token: String,
    pub swap: RegistrySwap,
    /// Present iff the pool is deprecated.
    #[serde(default)]
    pub deprecation_info: Option<DeprecationInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySwap {
    pub config: RegistrySwapConfig,
    pub state: RegistrySwapState,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySwapConfig {
    pub swap_account: String,
    pub authority: String,
    #[serde(rename = "swapProgramID")]
    pub swap_program_id: String,
    #[serde(rename = "tokenProgramID")]
    pub token_program_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySwapState {
    pub is_initialized: bool,
    pub is_paused: bool,
    pub nonce: u8,
    pub admin_account: String,
    pub pool_token_mint: String,
    pub token_a: RegistryTokenInfo,
    pub token_b: RegistryTokenInfo,
    pub initial_amp_factor: String,
    pub target_amp_factor: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryTokenInfo {
    pub admin_fee_account: String,
    pub reserve: String,
    pub mint: String,
}

/// Why a pool is deprecated, and where its users should migrate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeprecationInfo {
    #[serde(default, rename = "newPoolID")]
    pub new_pool_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

impl RegistryPool {
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_info.is_some()
    }

    /// Parses the pool's mint pair.
    pub fn token_mints(&self) -> Result<(Pubkey, Pubkey)> {
        let mint_a = self
            .swap
            .state
            .token_a
            .mint
            .parse()
            .with_context(|| format!("bad token A mint in registry entry {}", self.name))?;
        let mint_b = self
            .swap
            .state
            .token_b
            .mint
            .parse()
            .with_context(|| format!("bad token B mint in registry entry {}", self.name))?;
        Ok((mint_a, mint_b))
    }
}

/// Fetches the registry's pool list for the network.
pub async fn fetch_pools_registry(network: Network) -> Result<RegistryData> {
    let url = format!(
        "{}/pools-info.{}.json",
        REGISTRY_URL,
        network.registry_name()
    );
    log::debug!("fetching registry {}", url);
    let response = reqwest::get(&url)
        .await
        .with_context(|| format!("failed to fetch registry {}", url))?
        .error_for_status()?;
    Ok(response.json().await?)
}
