use saber_pool_manager_sdk::registry::{Network, RegistryData};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

const FIXTURE: &str = r#"{
  "addresses": {},
  "pools": [
    {
      "id": "usdc_usdt",
      "name": "USDT-USDC",
      "tokens": [],
      "currency": "usd",
      "lpToken": "2poo1w1DL6yd2WNTCnNTzDqkC6MBXq7axo77P16yrBuf",
      "swap": {
        "config": {
          "swapAccount": "YAkoNb6HKmSxQN9L8hiBE5tPJRsniSSMzND1boHmZxe",
          "authority": "5C1k9yV7y4CjMnKv8eGYDgWND8P89Pdfj79Trk2qmfGo",
          "swapProgramID": "SSwpkEEcbUqx4vtoEByFjSkhKdCT862DNVb52nZg1UZ",
          "tokenProgramID": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        },
        "state": {
          "isInitialized": true,
          "isPaused": false,
          "nonce": 252,
          "adminAccount": "H9XuKqszWYirDmXDQ12TZXGtxqUYYn4oi7FKzAm7RHGc",
          "poolTokenMint": "2poo1w1DL6yd2WNTCnNTzDqkC6MBXq7axo77P16yrBuf",
          "tokenA": {
            "adminFeeAccount": "9oaFyrMCwxKE6kBQRP5v9Jo5Uh9LaElfiGsgtfmvsugi",
            "reserve": "CfWX7o2TswwbxusJ4hCaPobu2jLCb1hfXuXJQjVq3jQF",
            "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
          },
          "tokenB": {
            "adminFeeAccount": "BBKgw75FivTYXj85D2AWyVdaTdTWuSuHVXRm1Xu7fipb",
            "reserve": "EnTrdMMpdhugeH6Ban6gYZWXughWxKtVGfCwFn78ZmY3",
            "mint": "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB"
          },
          "initialAmpFactor": "0x64",
          "targetAmpFactor": "0x64",
          "startRampTimestamp": 0,
          "stopRampTimestamp": 0
        }
      }
    },
    {
      "id": "old_pool",
      "name": "Deprecated Pool",
      "currency": "usd",
      "lpToken": "So11111111111111111111111111111111111111112",
      "swap": {
        "config": {
          "swapAccount": "YAkoNb6HKmSxQN9L8hiBE5tPJRsniSSMzND1boHmZxe",
          "authority": "5C1k9yV7y4CjMnKv8eGYDgWND8P89Pdfj79Trk2qmfGo",
          "swapProgramID": "SSwpkEEcbUqx4vtoEByFjSkhKdCT862DNVb52nZg1UZ",
          "tokenProgramID": "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA"
        },
        "state": {
          "isInitialized": true,
          "isPaused": true,
          "nonce": 255,
          "adminAccount": "H9XuKqszWYirDmXDQ12TZXGtxqUYYn4oi7FKzAm7RHGc",
          "poolTokenMint": "2poo1w1DL6yd2WNTCnNTzDqkC6MBXq7axo77P16yrBuf",
          "tokenA": {
            "adminFeeAccount": "9oaFyrMCwxKE6kBQRP5v9Jo5Uh9LaElfiGsgtfmvsugi",
            "reserve": "CfWX7o2TswwbxusJ4hCaPobu2jLCb1hfXuXJQjVq3jQF",
            "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v"
          },
          "tokenB": {
            "adminFeeAccount": "BBKgw75FivTYXj85D2AWyVdaTdTWuSuHVXRm1Xu7fipb",
            "reserve": "EnTrdMMpdhugeH6Ban6gYZWXughWxKtVGfCwFn78ZmY3",
            "mint": "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB"
          },
          "initialAmpFactor": "0x64",
          "targetAmpFactor": "0xc8",
          "startRampTimestamp": 0,
          "stopRampTimestamp": 0
        }
      },
      "deprecationInfo": {
        "newPoolID": "usdc_usdt",
        "message": "migrate to the new pool"
      }
    }
  ]
}"#;

#[test]
fn registry_document_deserializes() {
    let data: RegistryData = serde_json::from_str(FIXTURE).unwrap();
    assert_eq!(data.pools.len(), 2);

    let pool = &data.pools[0];
    assert_eq!(pool.name, "USDT-USDC");
    assert!(!pool.is_deprecated());
    assert!(!pool.swap.state.is_paused);
    assert_eq!(pool.swap.state.initial_amp_factor, "0x64");

    let (mint_a, mint_b) = pool.token_mints().unwrap();
    assert_eq!(
        mint_a,
        Pubkey::from_str("EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v").unwrap()
    );
    assert_eq!(
        mint_b,
        Pubkey::from_str("Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB").unwrap()
    );
}

#[test]
fn deprecation_metadata_is_surfaced() {
    let data: RegistryData = serde_json::from_str(FIXTURE).unwrap();
    let deprecated = &data.pools[1];
    assert!(deprecated.is_deprecated());
    let info = deprecated.deprecation_info.as_ref().unwrap();
    assert_eq!(info.new_pool_id.as_deref(), Some("usdc_usdt"));
    assert_eq!(info.message.as_deref(), Some("migrate to the new pool"));
    assert_eq!(info.link, None);
}

#[test]
fn network_parsing_round_trips() {
    for name in ["localnet", "devnet", "testnet", "mainnet-beta"] {
        let network = Network::from_str(name).unwrap();
        assert_eq!(network.to_string(), name);
    }
    assert!(Network::from_str("mainnet").is_err());
}
