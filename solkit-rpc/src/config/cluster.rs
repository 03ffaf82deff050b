//! Config objects for supply, validator and leader queries

use serde::{Deserialize, Serialize};
use solkit_base::Address;

use super::common::CommitmentLevel;

/// Configuration for `getSupply`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSupplyConfig {
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// Leave the non-circulating account list out of the result
    #[serde(default)]
    pub exclude_non_circulating_accounts_list: bool,
}

impl RpcSupplyConfig {
    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Leave the non-circulating account list out of the result
    pub fn with_exclude_non_circulating_accounts_list(mut self, exclude: bool) -> Self {
        self.exclude_non_circulating_accounts_list = exclude;
        self
    }
}

/// Configuration for `getVoteAccounts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcGetVoteAccountsConfig {
    /// Only return this vote account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vote_pubkey: Option<Address>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
    /// Keep delinquent validators with no stake
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_unstaked_delinquents: Option<bool>,
    /// Slots behind the tip after which a validator counts as delinquent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delinquent_slot_distance: Option<u64>,
}

impl RpcGetVoteAccountsConfig {
    /// Only return this vote account
    pub fn with_vote_pubkey(mut self, vote_pubkey: Address) -> Self {
        self.vote_pubkey = Some(vote_pubkey);
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }

    /// Keep delinquent validators with no stake
    pub fn with_keep_unstaked_delinquents(mut self, keep: bool) -> Self {
        self.keep_unstaked_delinquents = Some(keep);
        self
    }

    /// Set the delinquency distance in slots
    pub fn with_delinquent_slot_distance(mut self, distance: u64) -> Self {
        self.delinquent_slot_distance = Some(distance);
        self
    }
}

/// Configuration for `getLeaderSchedule`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLeaderScheduleConfig {
    /// Only return the schedule of this validator identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Address>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
}

impl RpcLeaderScheduleConfig {
    /// Only return the schedule of this validator identity
    pub fn with_identity(mut self, identity: Address) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }
}

/// Slot range for `getBlockProduction`; the end is inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockProductionConfigRange {
    /// First slot of the range
    pub first_slot: u64,
    /// Last slot of the range, the highest slot when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_slot: Option<u64>,
}

impl RpcBlockProductionConfigRange {
    /// Range from `first_slot` to the highest slot
    pub fn new(first_slot: u64) -> Self {
        Self {
            first_slot,
            last_slot: None,
        }
    }

    /// Close the range at `last_slot`
    pub fn with_last_slot(mut self, last_slot: u64) -> Self {
        self.last_slot = Some(last_slot);
        self
    }
}

/// Configuration for `getBlockProduction`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcBlockProductionConfig {
    /// Only return production of this validator identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<Address>,
    /// Slot range, the current epoch when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RpcBlockProductionConfigRange>,
    /// Commitment level of the queried state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<CommitmentLevel>,
}

impl RpcBlockProductionConfig {
    /// Only return production of this validator identity
    pub fn with_identity(mut self, identity: Address) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Set the slot range
    pub fn with_range(mut self, range: RpcBlockProductionConfigRange) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the commitment level
    pub fn with_commitment(mut self, commitment: CommitmentLevel) -> Self {
        self.commitment = Some(commitment);
        self
    }
}
