use serde::{Deserialize, Serialize};

use crate::address::Address;

/// An account referenced by an instruction, with its access flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMeta {
    pub pubkey: Address,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// Writable account, signer if `is_signer`
    pub fn new(pubkey: Address, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// Read-only account, signer if `is_signer`
    pub fn new_readonly(pubkey: Address, is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// A single program invocation: target program, ordered accounts and opaque data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub program_id: Address,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

impl Instruction {
    pub fn new(program_id: Address, accounts: Vec<AccountMeta>, data: Vec<u8>) -> Self {
        Self {
            program_id,
            accounts,
            data,
        }
    }

    /// Address of the account at `index`, if present
    pub fn account(&self, index: usize) -> Option<&Address> {
        self.accounts.get(index).map(|meta| &meta.pubkey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_meta_flags() {
        let key = Address::new_unique();
        let writable = AccountMeta::new(key, true);
        assert!(writable.is_signer && writable.is_writable);

        let readonly = AccountMeta::new_readonly(key, false);
        assert!(!readonly.is_signer && !readonly.is_writable);
    }

    #[test]
    fn test_instruction_account_lookup() {
        let first = Address::new_unique();
        let ix = Instruction::new(
            Address::default(),
            vec![AccountMeta::new(first, false)],
            vec![1, 2, 3],
        );
        assert_eq!(ix.account(0), Some(&first));
        assert_eq!(ix.account(1), None);
    }
}
