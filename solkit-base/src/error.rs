use thiserror::Error;

use crate::address::Address;

/// Errors raised while encoding, decoding or deriving addresses for native instructions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Truncated input: needed {needed} bytes, {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },
    #[error("String bytes are not valid UTF-8")]
    InvalidUtf8,
    #[error("Unknown instruction tag {0}")]
    UnknownInstructionTag(u32),
    #[error("Instruction belongs to program {found}, expected {expected}")]
    WrongProgram { expected: Address, found: Address },
    #[error("Seed is {len} bytes, maximum is 32")]
    SeedTooLong { len: usize },
    #[error("Too many seeds: {count}, maximum is 16")]
    TooManySeeds { count: usize },
    #[error("Derived address lies on the curve")]
    AddressOnCurve,
    #[error("No bump in [0, 255] yields an off-curve address")]
    NoValidBumpFound,
    #[error("Instruction has {found} accounts, layout needs {expected}")]
    NotEnoughAccounts { expected: usize, found: usize },
    #[error("Expected instruction tag {expected}, found {found}")]
    UnexpectedInstruction { expected: u32, found: u32 },
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::TruncatedInput {
            needed: 8,
            remaining: 3,
        };
        assert_eq!(
            err.to_string(),
            "Truncated input: needed 8 bytes, 3 remaining"
        );

        let err = CodecError::WrongProgram {
            expected: Address::default(),
            found: Address::new_from_array([1u8; 32]),
        };
        assert!(
            err.to_string()
                .ends_with("expected 11111111111111111111111111111111")
        );
    }
}
