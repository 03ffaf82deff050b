//! Address lookup table program instructions
//!
//! Same wire conventions as the system program: u32 tag, then fields. The
//! table address is a program-derived address of the authority and the slot
//! the table was created at.

use tracing::debug;

use crate::address::{ADDRESS_LOOKUP_TABLE_PROGRAM_ID, Address, SYSTEM_PROGRAM_ID};
use crate::derivation::find_program_address;
use crate::error::{CodecError, Result};
use crate::instruction::{AccountMeta, Instruction};
use crate::system_program::check_program_id;
use crate::wire::{WireReader, encode_address, encode_u8, encode_u32, encode_u64};

pub const CREATE_LOOKUP_TABLE_TAG: u32 = 0;
pub const FREEZE_LOOKUP_TABLE_TAG: u32 = 1;
pub const EXTEND_LOOKUP_TABLE_TAG: u32 = 2;
pub const DEACTIVATE_LOOKUP_TABLE_TAG: u32 = 3;
pub const CLOSE_LOOKUP_TABLE_TAG: u32 = 4;

/// Payload of a lookup table instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTableInstruction {
    CreateLookupTable { recent_slot: u64, bump_seed: u8 },
    FreezeLookupTable,
    ExtendLookupTable { new_addresses: Vec<Address> },
    DeactivateLookupTable,
    CloseLookupTable,
}

impl LookupTableInstruction {
    pub fn tag(&self) -> u32 {
        match self {
            Self::CreateLookupTable { .. } => CREATE_LOOKUP_TABLE_TAG,
            Self::FreezeLookupTable => FREEZE_LOOKUP_TABLE_TAG,
            Self::ExtendLookupTable { .. } => EXTEND_LOOKUP_TABLE_TAG,
            Self::DeactivateLookupTable => DEACTIVATE_LOOKUP_TABLE_TAG,
            Self::CloseLookupTable => CLOSE_LOOKUP_TABLE_TAG,
        }
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut data = encode_u32(self.tag()).to_vec();
        match self {
            Self::CreateLookupTable {
                recent_slot,
                bump_seed,
            } => {
                data.extend_from_slice(&encode_u64(*recent_slot));
                data.extend_from_slice(&encode_u8(*bump_seed));
            }
            Self::ExtendLookupTable { new_addresses } => {
                data.extend_from_slice(&encode_u64(new_addresses.len() as u64));
                for address in new_addresses {
                    data.extend_from_slice(&encode_address(address));
                }
            }
            Self::FreezeLookupTable | Self::DeactivateLookupTable | Self::CloseLookupTable => {}
        }
        data
    }

    pub fn unpack(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let instruction = match reader.read_u32()? {
            CREATE_LOOKUP_TABLE_TAG => Self::CreateLookupTable {
                recent_slot: reader.read_u64()?,
                bump_seed: reader.read_u8()?,
            },
            FREEZE_LOOKUP_TABLE_TAG => Self::FreezeLookupTable,
            EXTEND_LOOKUP_TABLE_TAG => {
                let count = reader.read_u64()?;
                // Addresses are read one by one so a bogus count fails on the
                // first missing address instead of allocating up front
                let mut new_addresses = Vec::new();
                for _ in 0..count {
                    new_addresses.push(reader.read_address()?);
                }
                Self::ExtendLookupTable { new_addresses }
            }
            DEACTIVATE_LOOKUP_TABLE_TAG => Self::DeactivateLookupTable,
            CLOSE_LOOKUP_TABLE_TAG => Self::CloseLookupTable,
            other => {
                debug!("Unknown lookup table instruction tag {}", other);
                return Err(CodecError::UnknownInstructionTag(other));
            }
        };
        Ok(instruction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLookupTableParams {
    pub authority_address: Address,
    pub payer_address: Address,
    pub recent_slot: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendLookupTableParams {
    /// Funds the rent top-up; `None` extends without funding
    pub payer_address: Option<Address>,
    pub lookup_table_address: Address,
    pub authority_address: Address,
    pub new_addresses: Vec<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreezeLookupTableParams {
    pub lookup_table_address: Address,
    pub authority_address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeactivateLookupTableParams {
    pub lookup_table_address: Address,
    pub authority_address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseLookupTableParams {
    pub lookup_table_address: Address,
    pub authority_address: Address,
    pub recipient_address: Address,
}

/// Derives the table address for an authority and creation slot
pub fn derive_lookup_table_address(
    authority_address: &Address,
    recent_slot: u64,
) -> Result<(Address, u8)> {
    find_program_address(
        &[authority_address.as_ref(), &recent_slot.to_le_bytes()],
        &ADDRESS_LOOKUP_TABLE_PROGRAM_ID,
    )
}

fn lookup_table_instruction(
    accounts: Vec<AccountMeta>,
    instruction: LookupTableInstruction,
) -> Instruction {
    Instruction::new(ADDRESS_LOOKUP_TABLE_PROGRAM_ID, accounts, instruction.pack())
}

fn create_lookup_table_with_authority_signer(
    params: &CreateLookupTableParams,
    authority_is_signer: bool,
) -> Result<(Instruction, Address)> {
    let (lookup_table_address, bump_seed) =
        derive_lookup_table_address(&params.authority_address, params.recent_slot)?;
    let instruction = lookup_table_instruction(
        vec![
            AccountMeta::new(lookup_table_address, false),
            AccountMeta::new_readonly(params.authority_address, authority_is_signer),
            AccountMeta::new(params.payer_address, true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        LookupTableInstruction::CreateLookupTable {
            recent_slot: params.recent_slot,
            bump_seed,
        },
    );
    Ok((instruction, lookup_table_address))
}

/// Creates a lookup table and returns the instruction with the table address
///
/// The address is not recoverable from the instruction alone without
/// repeating the derivation, so callers keep it.
pub fn create_lookup_table(params: &CreateLookupTableParams) -> Result<(Instruction, Address)> {
    create_lookup_table_with_authority_signer(params, false)
}

/// Like [`create_lookup_table`] but the authority must sign
pub fn create_lookup_table_signed(
    params: &CreateLookupTableParams,
) -> Result<(Instruction, Address)> {
    create_lookup_table_with_authority_signer(params, true)
}

/// Freezing an empty table fails at the runtime, not here
pub fn freeze_lookup_table(params: &FreezeLookupTableParams) -> Instruction {
    lookup_table_instruction(
        vec![
            AccountMeta::new(params.lookup_table_address, false),
            AccountMeta::new_readonly(params.authority_address, true),
        ],
        LookupTableInstruction::FreezeLookupTable,
    )
}

pub fn extend_lookup_table(params: &ExtendLookupTableParams) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(params.lookup_table_address, false),
        AccountMeta::new_readonly(params.authority_address, true),
    ];
    if let Some(payer_address) = params.payer_address {
        accounts.push(AccountMeta::new(payer_address, true));
        accounts.push(AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false));
    }
    lookup_table_instruction(
        accounts,
        LookupTableInstruction::ExtendLookupTable {
            new_addresses: params.new_addresses.clone(),
        },
    )
}

pub fn deactivate_lookup_table(params: &DeactivateLookupTableParams) -> Instruction {
    lookup_table_instruction(
        vec![
            AccountMeta::new(params.lookup_table_address, false),
            AccountMeta::new_readonly(params.authority_address, true),
        ],
        LookupTableInstruction::DeactivateLookupTable,
    )
}

pub fn close_lookup_table(params: &CloseLookupTableParams) -> Instruction {
    lookup_table_instruction(
        vec![
            AccountMeta::new(params.lookup_table_address, false),
            AccountMeta::new_readonly(params.authority_address, true),
            AccountMeta::new(params.recipient_address, false),
        ],
        LookupTableInstruction::CloseLookupTable,
    )
}

/// Decodes the payload of a lookup table program instruction
pub fn decode_lookup_table_instruction(
    instruction: &Instruction,
) -> Result<LookupTableInstruction> {
    check_program_id(instruction, &ADDRESS_LOOKUP_TABLE_PROGRAM_ID)?;
    LookupTableInstruction::unpack(&instruction.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn authority() -> Address {
        Address::new_from_array([7u8; 32])
    }

    #[test]
    fn test_create_lookup_table_derives_address() {
        let payer = Address::new_unique();
        let params = CreateLookupTableParams {
            authority_address: authority(),
            payer_address: payer,
            recent_slot: 123456,
        };
        let (ix, table) = create_lookup_table(&params).unwrap();

        assert_eq!(
            table.to_string(),
            "5a9dZZxKjp2EzysGBCt1yMZmQmX2gWdoEREbonNQ1gHd"
        );
        assert_eq!(ix.program_id, ADDRESS_LOOKUP_TABLE_PROGRAM_ID);
        assert_eq!(
            ix.accounts,
            vec![
                AccountMeta::new(table, false),
                AccountMeta::new_readonly(authority(), false),
                AccountMeta::new(payer, true),
                AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
            ]
        );

        let mut expected = 0u32.to_le_bytes().to_vec();
        expected.extend_from_slice(&123456u64.to_le_bytes());
        expected.push(255);
        assert_eq!(ix.data, expected);

        // Re-deriving from the same inputs gives the same table
        assert_eq!(
            derive_lookup_table_address(&authority(), 123456).unwrap(),
            (table, 255)
        );
    }

    #[test]
    fn test_create_lookup_table_signed_marks_authority() {
        let params = CreateLookupTableParams {
            authority_address: authority(),
            payer_address: Address::new_unique(),
            recent_slot: 123456,
        };
        let (unsigned_ix, unsigned_table) = create_lookup_table(&params).unwrap();
        let (signed_ix, signed_table) = create_lookup_table_signed(&params).unwrap();
        assert_eq!(unsigned_table, signed_table);
        assert_eq!(unsigned_ix.data, signed_ix.data);
        assert!(signed_ix.accounts[1].is_signer);
    }

    #[test]
    fn test_extend_lookup_table_with_and_without_payer() {
        let table = Address::new_unique();
        let new_addresses = vec![Address::new_unique(), Address::new_unique()];
        let mut params = ExtendLookupTableParams {
            payer_address: None,
            lookup_table_address: table,
            authority_address: authority(),
            new_addresses: new_addresses.clone(),
        };

        let unfunded = extend_lookup_table(&params);
        assert_eq!(unfunded.accounts.len(), 2);
        assert_eq!(&unfunded.data[..4], &[2, 0, 0, 0]);
        assert_eq!(&unfunded.data[4..12], &2u64.to_le_bytes());
        assert_eq!(unfunded.data.len(), 12 + 64);

        let payer = Address::new_unique();
        params.payer_address = Some(payer);
        let funded = extend_lookup_table(&params);
        assert_eq!(funded.accounts.len(), 4);
        assert_eq!(funded.accounts[2], AccountMeta::new(payer, true));
        assert_eq!(
            funded.accounts[3],
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false)
        );
        assert_eq!(funded.data, unfunded.data);

        assert_eq!(
            decode_lookup_table_instruction(&funded).unwrap(),
            LookupTableInstruction::ExtendLookupTable { new_addresses }
        );
    }

    #[test]
    fn test_extend_lookup_table_empty_list() {
        let ix = extend_lookup_table(&ExtendLookupTableParams {
            payer_address: None,
            lookup_table_address: Address::new_unique(),
            authority_address: authority(),
            new_addresses: vec![],
        });
        assert_eq!(ix.data.len(), 12);
        assert_eq!(
            decode_lookup_table_instruction(&ix).unwrap(),
            LookupTableInstruction::ExtendLookupTable {
                new_addresses: vec![]
            }
        );
    }

    #[test]
    fn test_tag_only_instructions() {
        let table = Address::new_unique();
        let recipient = Address::new_unique();

        let freeze = freeze_lookup_table(&FreezeLookupTableParams {
            lookup_table_address: table,
            authority_address: authority(),
        });
        assert_eq!(freeze.data, vec![1, 0, 0, 0]);
        assert_eq!(freeze.accounts.len(), 2);

        let deactivate = deactivate_lookup_table(&DeactivateLookupTableParams {
            lookup_table_address: table,
            authority_address: authority(),
        });
        assert_eq!(deactivate.data, vec![3, 0, 0, 0]);

        let close = close_lookup_table(&CloseLookupTableParams {
            lookup_table_address: table,
            authority_address: authority(),
            recipient_address: recipient,
        });
        assert_eq!(close.data, vec![4, 0, 0, 0]);
        assert_eq!(close.accounts[2], AccountMeta::new(recipient, false));
        assert_eq!(
            decode_lookup_table_instruction(&close).unwrap(),
            LookupTableInstruction::CloseLookupTable
        );
    }

    #[test]
    fn test_every_variant_round_trips() {
        let table = Address::new_unique();
        let new_addresses = vec![Address::new_unique(), Address::new_unique()];
        let (create, _) = create_lookup_table(&CreateLookupTableParams {
            authority_address: authority(),
            payer_address: Address::new_unique(),
            recent_slot: 123456,
        })
        .unwrap();

        let cases = vec![
            (
                create,
                LookupTableInstruction::CreateLookupTable {
                    recent_slot: 123456,
                    bump_seed: 255,
                },
            ),
            (
                freeze_lookup_table(&FreezeLookupTableParams {
                    lookup_table_address: table,
                    authority_address: authority(),
                }),
                LookupTableInstruction::FreezeLookupTable,
            ),
            (
                extend_lookup_table(&ExtendLookupTableParams {
                    payer_address: Some(Address::new_unique()),
                    lookup_table_address: table,
                    authority_address: authority(),
                    new_addresses: new_addresses.clone(),
                }),
                LookupTableInstruction::ExtendLookupTable { new_addresses },
            ),
            (
                deactivate_lookup_table(&DeactivateLookupTableParams {
                    lookup_table_address: table,
                    authority_address: authority(),
                }),
                LookupTableInstruction::DeactivateLookupTable,
            ),
            (
                close_lookup_table(&CloseLookupTableParams {
                    lookup_table_address: table,
                    authority_address: authority(),
                    recipient_address: Address::new_unique(),
                }),
                LookupTableInstruction::CloseLookupTable,
            ),
        ];

        for (ix, expected) in cases {
            assert_eq!(ix.program_id, ADDRESS_LOOKUP_TABLE_PROGRAM_ID);
            assert_eq!(ix.data, expected.pack());
            assert_eq!(decode_lookup_table_instruction(&ix).unwrap(), expected);
        }
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let ix = Instruction::new(ADDRESS_LOOKUP_TABLE_PROGRAM_ID, vec![], vec![5, 0, 0, 0]);
        assert_eq!(
            decode_lookup_table_instruction(&ix),
            Err(CodecError::UnknownInstructionTag(5))
        );

        let ix = Instruction::new(SYSTEM_PROGRAM_ID, vec![], vec![1, 0, 0, 0]);
        assert_matches!(
            decode_lookup_table_instruction(&ix),
            Err(CodecError::WrongProgram { .. })
        );

        // Count claims three addresses but only one follows
        let mut data = 2u32.to_le_bytes().to_vec();
        data.extend_from_slice(&3u64.to_le_bytes());
        data.extend_from_slice(&[1u8; 32]);
        assert_matches!(
            LookupTableInstruction::unpack(&data),
            Err(CodecError::TruncatedInput { .. })
        );
    }
}
