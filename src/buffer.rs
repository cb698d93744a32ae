//! Client for the Goki instruction-buffer program the bulk scripts stage
//! admin instructions into. The buffer program executes staged bundles
//! under its own authority later; this crate only constructs calls against
//! it and reads buffers back.

use anchor_lang::{AnchorDeserialize, AnchorSerialize};
use anyhow::{Context, Result, bail};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_system_interface::instruction as system_instruction;

use crate::constants::SMART_WALLET_PROGRAM_ID;
use crate::utils::anchor_sighash;

/// Account meta of a staged instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BufferedAccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// An instruction staged inside a buffer bundle.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct BufferedInstruction {
    pub program_id: Pubkey,
    pub keys: Vec<BufferedAccountMeta>,
    pub data: Vec<u8>,
}

impl From<&Instruction> for BufferedInstruction {
    fn from(ix: &Instruction) -> Self {
        BufferedInstruction {
            program_id: ix.program_id,
            keys: ix
                .accounts
                .iter()
                .map(|meta| BufferedAccountMeta {
                    pubkey: meta.pubkey,
                    is_signer: meta.is_signer,
                    is_writable: meta.is_writable,
                })
                .collect(),
            data: ix.data.clone(),
        }
    }
}

/// A bundle of staged instructions executed together.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, Eq)]
pub struct InstructionBundle {
    pub is_executed: bool,
    pub instructions: Vec<BufferedInstruction>,
}

/// Buffer account state. Read-only from this crate; the buffer program owns
/// all mutation semantics.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstructionBuffer {
    pub owner_set_seqno: u32,
    /// Execution eta; -1 means unset.
    pub eta: i64,
    /// Authority allowed to append instructions.
    pub authority: Pubkey,
    /// Authority allowed to execute staged bundles.
    pub executor: Pubkey,
    /// Smart wallet the staged instructions execute under.
    pub smart_wallet: Pubkey,
    pub bundles: Vec<InstructionBundle>,
}

impl InstructionBuffer {
    // Serialized bytes before the bundles vec.
    const HEADER_LEN: usize = 4 + 8 + 32 * 3 + 4;

    /// Decodes a fetched buffer account.
    pub fn from_account_data(data: &[u8]) -> Result<Self> {
        if data.len() < 8 + Self::HEADER_LEN {
            bail!("instruction buffer account too short: {} bytes", data.len());
        }
        Ok(Self::deserialize(&mut &data[8..])?)
    }
}

/// Arguments for allocating and initializing a buffer.
#[derive(Debug, Clone, Copy)]
pub struct InitBufferArgs {
    /// Fresh account the buffer lives in. Must co-sign.
    pub buffer: Pubkey,
    /// Instruction bytes the buffer must be able to hold.
    pub buffer_size: usize,
    /// Bundles the buffer is sized for.
    pub num_bundles: u8,
    pub smart_wallet: Pubkey,
    /// Execution eta; -1 leaves it unset.
    pub eta: i64,
    /// Authority allowed to append. Must co-sign.
    pub authority: Pubkey,
    /// Authority allowed to execute. Must co-sign.
    pub executor: Pubkey,
    pub payer: Pubkey,
}

/// Builds the allocation and init of a new buffer account.
pub async fn init_buffer_ixs(rpc: &RpcClient, args: InitBufferArgs) -> Result<Vec<Instruction>> {
    // bundle headers (flag + length prefix) plus staged instruction bytes
    let space =
        8 + InstructionBuffer::HEADER_LEN + args.num_bundles as usize * (1 + 4) + args.buffer_size;
    let lamports = rpc.get_minimum_balance_for_rent_exemption(space).await?;

    let mut data = anchor_sighash("init_ix_buffer").to_vec();
    data.extend_from_slice(&args.eta.to_le_bytes());

    Ok(vec![
        system_instruction::create_account(
            &args.payer,
            &args.buffer,
            lamports,
            space as u64,
            &SMART_WALLET_PROGRAM_ID,
        ),
        Instruction {
            program_id: SMART_WALLET_PROGRAM_ID,
            accounts: vec![
                AccountMeta::new(args.buffer, true),
                AccountMeta::new_readonly(args.smart_wallet, false),
                AccountMeta::new_readonly(args.authority, true),
                AccountMeta::new_readonly(args.executor, true),
                AccountMeta::new(args.payer, true),
            ],
            data,
        },
    ])
}

/// Builds the append of `ix` into bundle `bundle_idx` of `buffer`. Must be
/// signed by the buffer's write authority.
pub fn append_instruction_ix(
    buffer: &Pubkey,
    bundle_idx: u8,
    ix: &Instruction,
    authority: &Pubkey,
) -> Result<Instruction> {
    let staged = BufferedInstruction::from(ix);
    let mut data = anchor_sighash("append_instruction").to_vec();
    data.push(bundle_idx);
    data.extend_from_slice(&staged.try_to_vec()?);

    Ok(Instruction {
        program_id: SMART_WALLET_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*buffer, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data,
    })
}

/// Reads back a buffer's staged contents.
pub async fn load_buffer(rpc: &RpcClient, buffer: &Pubkey) -> Result<InstructionBuffer> {
    let account = rpc
        .get_account(buffer)
        .await
        .with_context(|| format!("instruction buffer not found: {}", buffer))?;
    InstructionBuffer::from_account_data(&account.data)
}

/// Assigns staged instructions round-robin across a fixed buffer set,
/// tracking the next bundle slot of each buffer.
pub struct BufferWriter {
    buffers: Vec<Pubkey>,
    bundle_indices: Vec<u8>,
    authority: Pubkey,
    next: usize,
}

impl BufferWriter {
    pub fn new(buffers: Vec<Pubkey>, authority: Pubkey) -> Result<Self> {
        if buffers.is_empty() {
            bail!("no instruction buffers configured");
        }
        let len = buffers.len();
        Ok(Self {
            buffers,
            bundle_indices: vec![0; len],
            authority,
            next: 0,
        })
    }

    pub fn buffers(&self) -> &[Pubkey] {
        &self.buffers
    }

    /// Stages one instruction into the next buffer in rotation and returns
    /// the append instruction to submit.
    pub fn stage(&mut self, ix: &Instruction) -> Result<Instruction> {
        let buffer_idx = self.next;
        self.next = (self.next + 1) % self.buffers.len();

        let bundle_idx = self.bundle_indices[buffer_idx];
        self.bundle_indices[buffer_idx] = bundle_idx
            .checked_add(1)
            .context("buffer bundle capacity exhausted")?;

        append_instruction_ix(&self.buffers[buffer_idx], bundle_idx, ix, &self.authority)
    }
}
