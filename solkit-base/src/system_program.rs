//! System program instruction catalog
//!
//! Every system instruction is a u32 little-endian tag followed by the
//! variant's fields in declaration order. Builders produce the account list
//! the runtime's native system program expects; decoders reverse both the
//! payload and the account layout.

use tracing::debug;

use crate::address::{Address, SYSTEM_PROGRAM_ID, SYSVAR_RECENT_BLOCKHASHES_ID, SYSVAR_RENT_ID};
use crate::derivation::{Seed, derive_with_seed};
use crate::error::{CodecError, Result};
use crate::instruction::{AccountMeta, Instruction};
use crate::wire::{WireReader, encode_address, encode_string, encode_u32, encode_u64};

/// Size in bytes of a nonce account's state
pub const NONCE_STATE_SIZE: u64 = 80;

/// Instruction discriminants of the system program
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemInstructionTag {
    CreateAccount = 0,
    Assign = 1,
    Transfer = 2,
    CreateAccountWithSeed = 3,
    AdvanceNonceAccount = 4,
    WithdrawNonceAccount = 5,
    InitializeNonceAccount = 6,
    AuthorizeNonceAccount = 7,
    Allocate = 8,
    AllocateWithSeed = 9,
    AssignWithSeed = 10,
    TransferWithSeed = 11,
    UpgradeNonceAccount = 12,
}

impl TryFrom<u32> for SystemInstructionTag {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self> {
        Ok(match value {
            0 => Self::CreateAccount,
            1 => Self::Assign,
            2 => Self::Transfer,
            3 => Self::CreateAccountWithSeed,
            4 => Self::AdvanceNonceAccount,
            5 => Self::WithdrawNonceAccount,
            6 => Self::InitializeNonceAccount,
            7 => Self::AuthorizeNonceAccount,
            8 => Self::Allocate,
            9 => Self::AllocateWithSeed,
            10 => Self::AssignWithSeed,
            11 => Self::TransferWithSeed,
            12 => Self::UpgradeNonceAccount,
            other => return Err(CodecError::UnknownInstructionTag(other)),
        })
    }
}

impl From<SystemInstructionTag> for u32 {
    fn from(tag: SystemInstructionTag) -> Self {
        tag as u32
    }
}

/// Payload of a system instruction, without its accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemInstruction {
    CreateAccount {
        lamports: u64,
        space: u64,
        owner: Address,
    },
    Assign {
        owner: Address,
    },
    Transfer {
        lamports: u64,
    },
    CreateAccountWithSeed {
        base: Address,
        seed: Seed,
        lamports: u64,
        space: u64,
        owner: Address,
    },
    AdvanceNonceAccount,
    WithdrawNonceAccount {
        lamports: u64,
    },
    InitializeNonceAccount {
        authority: Address,
    },
    AuthorizeNonceAccount {
        new_authority: Address,
    },
    Allocate {
        space: u64,
    },
    AllocateWithSeed {
        base: Address,
        seed: Seed,
        space: u64,
        owner: Address,
    },
    AssignWithSeed {
        base: Address,
        seed: Seed,
        owner: Address,
    },
    TransferWithSeed {
        lamports: u64,
        from_seed: Seed,
        from_owner: Address,
    },
    UpgradeNonceAccount,
}

impl SystemInstruction {
    pub fn tag(&self) -> SystemInstructionTag {
        match self {
            Self::CreateAccount { .. } => SystemInstructionTag::CreateAccount,
            Self::Assign { .. } => SystemInstructionTag::Assign,
            Self::Transfer { .. } => SystemInstructionTag::Transfer,
            Self::CreateAccountWithSeed { .. } => SystemInstructionTag::CreateAccountWithSeed,
            Self::AdvanceNonceAccount => SystemInstructionTag::AdvanceNonceAccount,
            Self::WithdrawNonceAccount { .. } => SystemInstructionTag::WithdrawNonceAccount,
            Self::InitializeNonceAccount { .. } => SystemInstructionTag::InitializeNonceAccount,
            Self::AuthorizeNonceAccount { .. } => SystemInstructionTag::AuthorizeNonceAccount,
            Self::Allocate { .. } => SystemInstructionTag::Allocate,
            Self::AllocateWithSeed { .. } => SystemInstructionTag::AllocateWithSeed,
            Self::AssignWithSeed { .. } => SystemInstructionTag::AssignWithSeed,
            Self::TransferWithSeed { .. } => SystemInstructionTag::TransferWithSeed,
            Self::UpgradeNonceAccount => SystemInstructionTag::UpgradeNonceAccount,
        }
    }

    /// Serializes the tag and fields into instruction data
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&encode_u32(self.tag().into()));

        match self {
            Self::CreateAccount {
                lamports,
                space,
                owner,
            } => {
                data.extend_from_slice(&encode_u64(*lamports));
                data.extend_from_slice(&encode_u64(*space));
                data.extend_from_slice(&encode_address(owner));
            }
            Self::Assign { owner } => {
                data.extend_from_slice(&encode_address(owner));
            }
            Self::Transfer { lamports } | Self::WithdrawNonceAccount { lamports } => {
                data.extend_from_slice(&encode_u64(*lamports));
            }
            Self::CreateAccountWithSeed {
                base,
                seed,
                lamports,
                space,
                owner,
            } => {
                data.extend_from_slice(&encode_address(base));
                data.extend_from_slice(&encode_string(seed.as_str()));
                data.extend_from_slice(&encode_u64(*lamports));
                data.extend_from_slice(&encode_u64(*space));
                data.extend_from_slice(&encode_address(owner));
            }
            Self::AdvanceNonceAccount | Self::UpgradeNonceAccount => {}
            Self::InitializeNonceAccount { authority } => {
                data.extend_from_slice(&encode_address(authority));
            }
            Self::AuthorizeNonceAccount { new_authority } => {
                data.extend_from_slice(&encode_address(new_authority));
            }
            Self::Allocate { space } => {
                data.extend_from_slice(&encode_u64(*space));
            }
            Self::AllocateWithSeed {
                base,
                seed,
                space,
                owner,
            } => {
                data.extend_from_slice(&encode_address(base));
                data.extend_from_slice(&encode_string(seed.as_str()));
                data.extend_from_slice(&encode_u64(*space));
                data.extend_from_slice(&encode_address(owner));
            }
            Self::AssignWithSeed { base, seed, owner } => {
                data.extend_from_slice(&encode_address(base));
                data.extend_from_slice(&encode_string(seed.as_str()));
                data.extend_from_slice(&encode_address(owner));
            }
            Self::TransferWithSeed {
                lamports,
                from_seed,
                from_owner,
            } => {
                data.extend_from_slice(&encode_u64(*lamports));
                data.extend_from_slice(&encode_string(from_seed.as_str()));
                data.extend_from_slice(&encode_address(from_owner));
            }
        }

        data
    }

    /// Parses instruction data; bytes after the last field are ignored
    pub fn unpack(data: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(data);
        let tag = SystemInstructionTag::try_from(reader.read_u32()?).inspect_err(|e| {
            debug!("Rejecting system instruction: {}", e);
        })?;

        let instruction = match tag {
            SystemInstructionTag::CreateAccount => Self::CreateAccount {
                lamports: reader.read_u64()?,
                space: reader.read_u64()?,
                owner: reader.read_address()?,
            },
            SystemInstructionTag::Assign => Self::Assign {
                owner: reader.read_address()?,
            },
            SystemInstructionTag::Transfer => Self::Transfer {
                lamports: reader.read_u64()?,
            },
            SystemInstructionTag::CreateAccountWithSeed => Self::CreateAccountWithSeed {
                base: reader.read_address()?,
                seed: reader.read_seed()?,
                lamports: reader.read_u64()?,
                space: reader.read_u64()?,
                owner: reader.read_address()?,
            },
            SystemInstructionTag::AdvanceNonceAccount => Self::AdvanceNonceAccount,
            SystemInstructionTag::WithdrawNonceAccount => Self::WithdrawNonceAccount {
                lamports: reader.read_u64()?,
            },
            SystemInstructionTag::InitializeNonceAccount => Self::InitializeNonceAccount {
                authority: reader.read_address()?,
            },
            SystemInstructionTag::AuthorizeNonceAccount => Self::AuthorizeNonceAccount {
                new_authority: reader.read_address()?,
            },
            SystemInstructionTag::Allocate => Self::Allocate {
                space: reader.read_u64()?,
            },
            SystemInstructionTag::AllocateWithSeed => Self::AllocateWithSeed {
                base: reader.read_address()?,
                seed: reader.read_seed()?,
                space: reader.read_u64()?,
                owner: reader.read_address()?,
            },
            SystemInstructionTag::AssignWithSeed => Self::AssignWithSeed {
                base: reader.read_address()?,
                seed: reader.read_seed()?,
                owner: reader.read_address()?,
            },
            SystemInstructionTag::TransferWithSeed => Self::TransferWithSeed {
                lamports: reader.read_u64()?,
                from_seed: reader.read_seed()?,
                from_owner: reader.read_address()?,
            },
            SystemInstructionTag::UpgradeNonceAccount => Self::UpgradeNonceAccount,
        };

        Ok(instruction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountParams {
    pub from_pubkey: Address,
    pub to_pubkey: Address,
    pub lamports: u64,
    pub space: u64,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignParams {
    pub pubkey: Address,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub from_pubkey: Address,
    pub to_pubkey: Address,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountWithSeedParams {
    pub from_pubkey: Address,
    pub to_pubkey: Address,
    pub base: Address,
    pub seed: Seed,
    pub lamports: u64,
    pub space: u64,
    pub owner: Address,
}

impl CreateAccountWithSeedParams {
    /// Builds the params with `to_pubkey` derived from `base`, `seed` and `owner`
    pub fn derived(
        from_pubkey: Address,
        base: Address,
        seed: Seed,
        lamports: u64,
        space: u64,
        owner: Address,
    ) -> Result<Self> {
        let to_pubkey = derive_with_seed(&base, seed.as_str(), &owner)?;
        Ok(Self {
            from_pubkey,
            to_pubkey,
            base,
            seed,
            lamports,
            space,
            owner,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvanceNonceAccountParams {
    pub nonce_pubkey: Address,
    pub authorized_pubkey: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawNonceAccountParams {
    pub nonce_pubkey: Address,
    pub authorized_pubkey: Address,
    pub to_pubkey: Address,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitializeNonceAccountParams {
    pub nonce_pubkey: Address,
    pub authority: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeNonceAccountParams {
    pub nonce_pubkey: Address,
    pub authorized_pubkey: Address,
    pub new_authority: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateParams {
    pub pubkey: Address,
    pub space: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocateWithSeedParams {
    pub address: Address,
    pub base: Address,
    pub seed: Seed,
    pub space: u64,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignWithSeedParams {
    pub address: Address,
    pub base: Address,
    pub seed: Seed,
    pub owner: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferWithSeedParams {
    pub from_pubkey: Address,
    pub from_base: Address,
    pub from_seed: Seed,
    pub from_owner: Address,
    pub to_pubkey: Address,
    pub lamports: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeNonceAccountParams {
    pub nonce_pubkey: Address,
}

/// Decoded system instruction: payload fields plus the addresses taken from
/// the account list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemInstructionParams {
    CreateAccount(CreateAccountParams),
    Assign(AssignParams),
    Transfer(TransferParams),
    CreateAccountWithSeed(CreateAccountWithSeedParams),
    AdvanceNonceAccount(AdvanceNonceAccountParams),
    WithdrawNonceAccount(WithdrawNonceAccountParams),
    InitializeNonceAccount(InitializeNonceAccountParams),
    AuthorizeNonceAccount(AuthorizeNonceAccountParams),
    Allocate(AllocateParams),
    AllocateWithSeed(AllocateWithSeedParams),
    AssignWithSeed(AssignWithSeedParams),
    TransferWithSeed(TransferWithSeedParams),
    UpgradeNonceAccount(UpgradeNonceAccountParams),
}

impl SystemInstructionParams {
    pub fn tag(&self) -> SystemInstructionTag {
        match self {
            Self::CreateAccount(_) => SystemInstructionTag::CreateAccount,
            Self::Assign(_) => SystemInstructionTag::Assign,
            Self::Transfer(_) => SystemInstructionTag::Transfer,
            Self::CreateAccountWithSeed(_) => SystemInstructionTag::CreateAccountWithSeed,
            Self::AdvanceNonceAccount(_) => SystemInstructionTag::AdvanceNonceAccount,
            Self::WithdrawNonceAccount(_) => SystemInstructionTag::WithdrawNonceAccount,
            Self::InitializeNonceAccount(_) => SystemInstructionTag::InitializeNonceAccount,
            Self::AuthorizeNonceAccount(_) => SystemInstructionTag::AuthorizeNonceAccount,
            Self::Allocate(_) => SystemInstructionTag::Allocate,
            Self::AllocateWithSeed(_) => SystemInstructionTag::AllocateWithSeed,
            Self::AssignWithSeed(_) => SystemInstructionTag::AssignWithSeed,
            Self::TransferWithSeed(_) => SystemInstructionTag::TransferWithSeed,
            Self::UpgradeNonceAccount(_) => SystemInstructionTag::UpgradeNonceAccount,
        }
    }

    /// Re-encodes the params as an instruction
    pub fn to_instruction(&self) -> Instruction {
        match self {
            Self::CreateAccount(p) => create_account(p),
            Self::Assign(p) => assign(p),
            Self::Transfer(p) => transfer(p),
            Self::CreateAccountWithSeed(p) => create_account_with_seed(p),
            Self::AdvanceNonceAccount(p) => advance_nonce_account(p),
            Self::WithdrawNonceAccount(p) => withdraw_nonce_account(p),
            Self::InitializeNonceAccount(p) => initialize_nonce_account(p),
            Self::AuthorizeNonceAccount(p) => authorize_nonce_account(p),
            Self::Allocate(p) => allocate(p),
            Self::AllocateWithSeed(p) => allocate_with_seed(p),
            Self::AssignWithSeed(p) => assign_with_seed(p),
            Self::TransferWithSeed(p) => transfer_with_seed(p),
            Self::UpgradeNonceAccount(p) => upgrade_nonce_account(p),
        }
    }
}

fn system_instruction(accounts: Vec<AccountMeta>, instruction: SystemInstruction) -> Instruction {
    Instruction::new(SYSTEM_PROGRAM_ID, accounts, instruction.pack())
}

/// Create a new account owned by `owner`; both `from` and `to` must sign
pub fn create_account(params: &CreateAccountParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.from_pubkey, true),
            AccountMeta::new(params.to_pubkey, true),
        ],
        SystemInstruction::CreateAccount {
            lamports: params.lamports,
            space: params.space,
            owner: params.owner,
        },
    )
}

pub fn assign(params: &AssignParams) -> Instruction {
    system_instruction(
        vec![AccountMeta::new(params.pubkey, true)],
        SystemInstruction::Assign {
            owner: params.owner,
        },
    )
}

pub fn transfer(params: &TransferParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.from_pubkey, true),
            AccountMeta::new(params.to_pubkey, false),
        ],
        SystemInstruction::Transfer {
            lamports: params.lamports,
        },
    )
}

/// Create an account at a seed-derived address
///
/// `to_pubkey` is not a signer. The base key signs instead, and is only
/// listed separately when it differs from the funding account.
pub fn create_account_with_seed(params: &CreateAccountWithSeedParams) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(params.from_pubkey, true),
        AccountMeta::new(params.to_pubkey, false),
    ];
    if params.base != params.from_pubkey {
        accounts.push(AccountMeta::new_readonly(params.base, true));
    }
    system_instruction(
        accounts,
        SystemInstruction::CreateAccountWithSeed {
            base: params.base,
            seed: params.seed.clone(),
            lamports: params.lamports,
            space: params.space,
            owner: params.owner,
        },
    )
}

pub fn advance_nonce_account(params: &AdvanceNonceAccountParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.nonce_pubkey, false),
            AccountMeta::new_readonly(SYSVAR_RECENT_BLOCKHASHES_ID, false),
            AccountMeta::new_readonly(params.authorized_pubkey, true),
        ],
        SystemInstruction::AdvanceNonceAccount,
    )
}

pub fn withdraw_nonce_account(params: &WithdrawNonceAccountParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.nonce_pubkey, false),
            AccountMeta::new(params.to_pubkey, false),
            AccountMeta::new_readonly(SYSVAR_RECENT_BLOCKHASHES_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
            AccountMeta::new_readonly(params.authorized_pubkey, true),
        ],
        SystemInstruction::WithdrawNonceAccount {
            lamports: params.lamports,
        },
    )
}

pub fn initialize_nonce_account(params: &InitializeNonceAccountParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.nonce_pubkey, false),
            AccountMeta::new_readonly(SYSVAR_RECENT_BLOCKHASHES_ID, false),
            AccountMeta::new_readonly(SYSVAR_RENT_ID, false),
        ],
        SystemInstruction::InitializeNonceAccount {
            authority: params.authority,
        },
    )
}

pub fn authorize_nonce_account(params: &AuthorizeNonceAccountParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.nonce_pubkey, false),
            AccountMeta::new_readonly(params.authorized_pubkey, true),
        ],
        SystemInstruction::AuthorizeNonceAccount {
            new_authority: params.new_authority,
        },
    )
}

pub fn allocate(params: &AllocateParams) -> Instruction {
    system_instruction(
        vec![AccountMeta::new(params.pubkey, true)],
        SystemInstruction::Allocate {
            space: params.space,
        },
    )
}

pub fn allocate_with_seed(params: &AllocateWithSeedParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.address, false),
            AccountMeta::new_readonly(params.base, true),
        ],
        SystemInstruction::AllocateWithSeed {
            base: params.base,
            seed: params.seed.clone(),
            space: params.space,
            owner: params.owner,
        },
    )
}

pub fn assign_with_seed(params: &AssignWithSeedParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.address, false),
            AccountMeta::new_readonly(params.base, true),
        ],
        SystemInstruction::AssignWithSeed {
            base: params.base,
            seed: params.seed.clone(),
            owner: params.owner,
        },
    )
}

/// Transfer from a seed-derived account; `from_base` signs for it
pub fn transfer_with_seed(params: &TransferWithSeedParams) -> Instruction {
    system_instruction(
        vec![
            AccountMeta::new(params.from_pubkey, false),
            AccountMeta::new_readonly(params.from_base, true),
            AccountMeta::new(params.to_pubkey, false),
        ],
        SystemInstruction::TransferWithSeed {
            lamports: params.lamports,
            from_seed: params.from_seed.clone(),
            from_owner: params.from_owner,
        },
    )
}

pub fn upgrade_nonce_account(params: &UpgradeNonceAccountParams) -> Instruction {
    system_instruction(
        vec![AccountMeta::new(params.nonce_pubkey, false)],
        SystemInstruction::UpgradeNonceAccount,
    )
}

/// One transfer per recipient, all funded by `from_pubkey`, in the given order
pub fn transfer_many(from_pubkey: &Address, to_lamports: &[(Address, u64)]) -> Vec<Instruction> {
    to_lamports
        .iter()
        .map(|(to_pubkey, lamports)| {
            transfer(&TransferParams {
                from_pubkey: *from_pubkey,
                to_pubkey: *to_pubkey,
                lamports: *lamports,
            })
        })
        .collect()
}

/// Create and initialize a nonce account in two instructions
pub fn create_nonce_account(
    from_pubkey: &Address,
    nonce_pubkey: &Address,
    authority: &Address,
    lamports: u64,
) -> [Instruction; 2] {
    [
        create_account(&CreateAccountParams {
            from_pubkey: *from_pubkey,
            to_pubkey: *nonce_pubkey,
            lamports,
            space: NONCE_STATE_SIZE,
            owner: SYSTEM_PROGRAM_ID,
        }),
        initialize_nonce_account(&InitializeNonceAccountParams {
            nonce_pubkey: *nonce_pubkey,
            authority: *authority,
        }),
    ]
}

/// Same as [`create_nonce_account`] but at an address derived from `base` and `seed`
pub fn create_nonce_account_with_seed(
    from_pubkey: &Address,
    nonce_pubkey: &Address,
    base: &Address,
    seed: &Seed,
    authority: &Address,
    lamports: u64,
) -> [Instruction; 2] {
    [
        create_account_with_seed(&CreateAccountWithSeedParams {
            from_pubkey: *from_pubkey,
            to_pubkey: *nonce_pubkey,
            base: *base,
            seed: seed.clone(),
            lamports,
            space: NONCE_STATE_SIZE,
            owner: SYSTEM_PROGRAM_ID,
        }),
        initialize_nonce_account(&InitializeNonceAccountParams {
            nonce_pubkey: *nonce_pubkey,
            authority: *authority,
        }),
    ]
}

/// First `N` account addresses of the instruction
pub(crate) fn account_keys<const N: usize>(instruction: &Instruction) -> Result<[Address; N]> {
    let found = instruction.accounts.len();
    if found < N {
        return Err(CodecError::NotEnoughAccounts { expected: N, found });
    }
    Ok(std::array::from_fn(|i| instruction.accounts[i].pubkey))
}

pub(crate) fn check_program_id(instruction: &Instruction, expected: &Address) -> Result<()> {
    if instruction.program_id != *expected {
        debug!(
            "Instruction for program {} passed to {} decoder",
            instruction.program_id, expected
        );
        return Err(CodecError::WrongProgram {
            expected: *expected,
            found: instruction.program_id,
        });
    }
    Ok(())
}

/// Decodes any system program instruction into its params
///
/// # Errors
/// * `WrongProgram` - the instruction targets another program
/// * `UnknownInstructionTag` - the tag is outside the catalog
/// * `TruncatedInput` / `InvalidUtf8` / `SeedTooLong` - malformed payload
/// * `NotEnoughAccounts` - fewer accounts than the variant's layout
pub fn decode_system_instruction(instruction: &Instruction) -> Result<SystemInstructionParams> {
    check_program_id(instruction, &SYSTEM_PROGRAM_ID)?;

    let params = match SystemInstruction::unpack(&instruction.data)? {
        SystemInstruction::CreateAccount {
            lamports,
            space,
            owner,
        } => {
            let [from_pubkey, to_pubkey] = account_keys::<2>(instruction)?;
            SystemInstructionParams::CreateAccount(CreateAccountParams {
                from_pubkey,
                to_pubkey,
                lamports,
                space,
                owner,
            })
        }
        SystemInstruction::Assign { owner } => {
            let [pubkey] = account_keys::<1>(instruction)?;
            SystemInstructionParams::Assign(AssignParams { pubkey, owner })
        }
        SystemInstruction::Transfer { lamports } => {
            let [from_pubkey, to_pubkey] = account_keys::<2>(instruction)?;
            SystemInstructionParams::Transfer(TransferParams {
                from_pubkey,
                to_pubkey,
                lamports,
            })
        }
        SystemInstruction::CreateAccountWithSeed {
            base,
            seed,
            lamports,
            space,
            owner,
        } => {
            let [from_pubkey, to_pubkey] = account_keys::<2>(instruction)?;
            SystemInstructionParams::CreateAccountWithSeed(CreateAccountWithSeedParams {
                from_pubkey,
                to_pubkey,
                base,
                seed,
                lamports,
                space,
                owner,
            })
        }
        SystemInstruction::AdvanceNonceAccount => {
            let [nonce_pubkey, _, authorized_pubkey] = account_keys::<3>(instruction)?;
            SystemInstructionParams::AdvanceNonceAccount(AdvanceNonceAccountParams {
                nonce_pubkey,
                authorized_pubkey,
            })
        }
        SystemInstruction::WithdrawNonceAccount { lamports } => {
            let [nonce_pubkey, to_pubkey, _, _, authorized_pubkey] =
                account_keys::<5>(instruction)?;
            SystemInstructionParams::WithdrawNonceAccount(WithdrawNonceAccountParams {
                nonce_pubkey,
                authorized_pubkey,
                to_pubkey,
                lamports,
            })
        }
        SystemInstruction::InitializeNonceAccount { authority } => {
            let [nonce_pubkey, _, _] = account_keys::<3>(instruction)?;
            SystemInstructionParams::InitializeNonceAccount(InitializeNonceAccountParams {
                nonce_pubkey,
                authority,
            })
        }
        SystemInstruction::AuthorizeNonceAccount { new_authority } => {
            let [nonce_pubkey, authorized_pubkey] = account_keys::<2>(instruction)?;
            SystemInstructionParams::AuthorizeNonceAccount(AuthorizeNonceAccountParams {
                nonce_pubkey,
                authorized_pubkey,
                new_authority,
            })
        }
        SystemInstruction::Allocate { space } => {
            let [pubkey] = account_keys::<1>(instruction)?;
            SystemInstructionParams::Allocate(AllocateParams { pubkey, space })
        }
        SystemInstruction::AllocateWithSeed {
            base,
            seed,
            space,
            owner,
        } => {
            let [address, _] = account_keys::<2>(instruction)?;
            SystemInstructionParams::AllocateWithSeed(AllocateWithSeedParams {
                address,
                base,
                seed,
                space,
                owner,
            })
        }
        SystemInstruction::AssignWithSeed { base, seed, owner } => {
            let [address, _] = account_keys::<2>(instruction)?;
            SystemInstructionParams::AssignWithSeed(AssignWithSeedParams {
                address,
                base,
                seed,
                owner,
            })
        }
        SystemInstruction::TransferWithSeed {
            lamports,
            from_seed,
            from_owner,
        } => {
            let [from_pubkey, from_base, to_pubkey] = account_keys::<3>(instruction)?;
            SystemInstructionParams::TransferWithSeed(TransferWithSeedParams {
                from_pubkey,
                from_base,
                from_seed,
                from_owner,
                to_pubkey,
                lamports,
            })
        }
        SystemInstruction::UpgradeNonceAccount => {
            let [nonce_pubkey] = account_keys::<1>(instruction)?;
            SystemInstructionParams::UpgradeNonceAccount(UpgradeNonceAccountParams {
                nonce_pubkey,
            })
        }
    };

    Ok(params)
}

macro_rules! variant_decoder {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $params:ty) => {
        $(#[$doc])*
        pub fn $name(instruction: &Instruction) -> Result<$params> {
            match decode_system_instruction(instruction)? {
                SystemInstructionParams::$variant(params) => Ok(params),
                other => Err(CodecError::UnexpectedInstruction {
                    expected: SystemInstructionTag::$variant.into(),
                    found: other.tag().into(),
                }),
            }
        }
    };
}

variant_decoder!(
    /// Decode a create account instruction
    decode_create_account,
    CreateAccount,
    CreateAccountParams
);
variant_decoder!(decode_assign, Assign, AssignParams);
variant_decoder!(
    /// Decode a transfer instruction
    decode_transfer,
    Transfer,
    TransferParams
);
variant_decoder!(
    decode_create_account_with_seed,
    CreateAccountWithSeed,
    CreateAccountWithSeedParams
);
variant_decoder!(
    decode_advance_nonce_account,
    AdvanceNonceAccount,
    AdvanceNonceAccountParams
);
variant_decoder!(
    decode_withdraw_nonce_account,
    WithdrawNonceAccount,
    WithdrawNonceAccountParams
);
variant_decoder!(
    decode_initialize_nonce_account,
    InitializeNonceAccount,
    InitializeNonceAccountParams
);
variant_decoder!(
    decode_authorize_nonce_account,
    AuthorizeNonceAccount,
    AuthorizeNonceAccountParams
);
variant_decoder!(decode_allocate, Allocate, AllocateParams);
variant_decoder!(decode_allocate_with_seed, AllocateWithSeed, AllocateWithSeedParams);
variant_decoder!(decode_assign_with_seed, AssignWithSeed, AssignWithSeedParams);
variant_decoder!(decode_transfer_with_seed, TransferWithSeed, TransferWithSeedParams);
variant_decoder!(
    decode_upgrade_nonce_account,
    UpgradeNonceAccount,
    UpgradeNonceAccountParams
);
