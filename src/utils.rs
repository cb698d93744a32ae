use anyhow::Result;
use solana_sdk::hash;
use solana_sdk::instruction::Instruction;
use solana_sdk::packet::PACKET_DATA_SIZE;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

/// Anchor's global-namespace instruction discriminator for `name`.
pub(crate) fn anchor_sighash(name: &str) -> [u8; 8] {
    let preimage = format!("global:{}", name);
    let mut sighash = [0u8; 8];
    sighash.copy_from_slice(&hash::hash(preimage.as_bytes()).to_bytes()[..8]);
    sighash
}

/// Idempotent creation of `owner`'s associated token account for `mint`,
/// so prior runs leave the built transaction valid.
pub(crate) fn create_ata_idempotent_ix(payer: &Pubkey, owner: &Pubkey, mint: &Pubkey) -> Instruction {
    spl_associated_token_account::instruction::create_associated_token_account_idempotent(
        payer,
        owner,
        mint,
        &spl_token::ID,
    )
}

/// Greedily merges instructions into as few unsigned transactions as fit
/// the wire packet limit. A single oversized instruction still lands in its
/// own transaction; the cluster rejects it at send time.
pub fn pack_into_transactions(
    payer: &Pubkey,
    instructions: &[Instruction],
) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();
    let mut batch: Vec<Instruction> = Vec::new();

    for instruction in instructions {
        let mut candidate = batch.clone();
        candidate.push(instruction.clone());
        let tx = Transaction::new_with_payer(&candidate, Some(payer));
        if transaction_size(&tx)? > PACKET_DATA_SIZE && !batch.is_empty() {
            transactions.push(Transaction::new_with_payer(&batch, Some(payer)));
            batch = vec![instruction.clone()];
        } else {
            batch = candidate;
        }
    }
    if !batch.is_empty() {
        transactions.push(Transaction::new_with_payer(&batch, Some(payer)));
    }

    Ok(transactions)
}

/// Serialized size once signed: the unsigned message plus the signature
/// array it does not carry yet.
fn transaction_size(tx: &Transaction) -> Result<usize> {
    let message_size = bincode::serialized_size(&tx.message)? as usize;
    let num_signatures = tx.message.header.num_required_signatures as usize;
    // 1 byte short-vec length prefix for the signature array
    Ok(1 + num_signatures * 64 + message_size)
}
