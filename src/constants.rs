use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// The Saber pools (pool manager) program.
pub const POOLS_PROGRAM_ID: Pubkey = pubkey!("SMANK4F5osjfVpKFH5LPzE6HPpbzSPu5iHPBhuor5xU");

/// The StableSwap program whose pools this program administers.
pub const SWAP_PROGRAM_ID: Pubkey = pubkey!("SSwpkEEcbUqx4vtoEByFjSkhKdCT862DNVb52nZg1UZ");

/// The Goki smart wallet program hosting instruction buffers.
pub const SMART_WALLET_PROGRAM_ID: Pubkey = pubkey!("GokivDYuQXPZCWRkwMhdH2h91KpDQXBEmpgBgs55bnpH");

/// Key of the deployed Saber pool manager.
pub const POOL_MANAGER_KEY: Pubkey = pubkey!("XD5s9eMuSibXzczBysd8VmG6nVe7DjqMQK1iZMQjANd");

// SEEDS
pub const POOL_MANAGER_SEED: &[u8] = b"SaberPoolManager";
pub const POOL_SEED: &[u8] = b"SaberPool";

// Matches Curve's MIN_RAMP_DURATION.
pub const MIN_RAMP_DURATION: i64 = 86_400;
