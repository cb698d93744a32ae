use saber_pool_manager_sdk::pack_into_transactions;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::packet::PACKET_DATA_SIZE;
use solana_sdk::pubkey::Pubkey;

fn medium_ix() -> Instruction {
    Instruction {
        program_id: Pubkey::new_unique(),
        accounts: vec![
            AccountMeta::new(Pubkey::new_unique(), false),
            AccountMeta::new_readonly(Pubkey::new_unique(), false),
        ],
        data: vec![7u8; 100],
    }
}

#[test]
fn packing_fits_the_packet_limit() {
    let payer = Pubkey::new_unique();
    let instructions: Vec<Instruction> = (0..40).map(|_| medium_ix()).collect();

    let txs = pack_into_transactions(&payer, &instructions).unwrap();
    assert!(txs.len() > 1, "40 instructions cannot fit one packet");

    let mut total = 0;
    for tx in &txs {
        let message_size = bincode::serialized_size(&tx.message).unwrap() as usize;
        let signatures = tx.message.header.num_required_signatures as usize;
        assert!(1 + signatures * 64 + message_size <= PACKET_DATA_SIZE);
        assert!(!tx.message.instructions.is_empty());
        total += tx.message.instructions.len();
    }
    assert_eq!(total, instructions.len());
}

#[test]
fn small_batches_stay_in_one_transaction() {
    let payer = Pubkey::new_unique();
    let instructions = vec![medium_ix(), medium_ix()];
    let txs = pack_into_transactions(&payer, &instructions).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].message.instructions.len(), 2);
}

#[test]
fn no_instructions_produce_no_transactions() {
    let payer = Pubkey::new_unique();
    assert!(pack_into_transactions(&payer, &[]).unwrap().is_empty());
}
