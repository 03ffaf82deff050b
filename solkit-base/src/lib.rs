pub mod address;
pub mod derivation;
pub mod error;
pub mod instruction;
pub mod lookup_table;
pub mod system_program;
pub mod wire;


// re-export value types
pub use address::{
    ADDRESS_LOOKUP_TABLE_PROGRAM_ID, Address, SYSTEM_PROGRAM_ID, SYSVAR_RECENT_BLOCKHASHES_ID,
    SYSVAR_RENT_ID, Signature,
};
pub use instruction::{AccountMeta, Instruction};

// re-export derivation utilities
pub use derivation::{
    MAX_SEED_LEN, MAX_SEEDS, Seed, create_program_address, derive_with_seed,
    find_program_address, is_on_curve,
};

// re-export codec entry points
pub use error::{CodecError, Result};
pub use lookup_table::{LookupTableInstruction, decode_lookup_table_instruction};
pub use system_program::{
    SystemInstruction, SystemInstructionParams, SystemInstructionTag, decode_system_instruction,
};
