//! Bundle simulation config and its shape-discriminated bank selector

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value, json};
use solkit_base::Address;
use tracing::debug;

use super::common::{CommitmentLevel, UiAccountEncoding, UiTransactionEncoding};
use crate::error::{Result, RpcError};

const FIELD: &str = "simulationBank";

/// Named banks accepted as bare string literals
const NAMED_BANKS: &[(&str, SimulationBank)] = &[("tip", SimulationBank::Tip)];

/// Which bank a bundle is simulated against
///
/// On the wire this is distinguished by shape rather than by a tag: a named
/// literal (`"tip"`), an object `{"slot": n}`, or a nested commitment object
/// `{"commitment": {"commitment": "confirmed"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationBank {
    /// The bank at the tip of the node's fork
    Tip,
    /// The bank frozen at a specific slot
    Slot(u64),
    /// The latest bank reaching a commitment level
    Commitment(CommitmentLevel),
}

type ShapeValidator = fn(&Value) -> Option<SimulationBank>;

/// Tried in order; the first validator that accepts the value wins
const VALIDATORS: &[ShapeValidator] = &[named_bank, slot_bank, commitment_bank];

fn named_bank(value: &Value) -> Option<SimulationBank> {
    let name = value.as_str()?;
    NAMED_BANKS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, bank)| *bank)
}

fn single_key<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let object: &Map<String, Value> = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.get(key)
}

fn slot_bank(value: &Value) -> Option<SimulationBank> {
    single_key(value, "slot")?.as_u64().map(SimulationBank::Slot)
}

fn commitment_bank(value: &Value) -> Option<SimulationBank> {
    let level = single_key(single_key(value, "commitment")?, "commitment")?;
    serde_json::from_value::<CommitmentLevel>(level.clone())
        .ok()
        .map(SimulationBank::Commitment)
}

impl SimulationBank {
    /// The JSON shape this bank is sent as
    pub fn to_value(&self) -> Value {
        match self {
            Self::Tip => Value::from("tip"),
            Self::Slot(slot) => json!({ "slot": slot }),
            Self::Commitment(level) => json!({ "commitment": { "commitment": level } }),
        }
    }
}

impl TryFrom<&Value> for SimulationBank {
    type Error = RpcError;

    fn try_from(value: &Value) -> Result<Self> {
        VALIDATORS
            .iter()
            .find_map(|validate| validate(value))
            .ok_or_else(|| {
                debug!("rejected {FIELD} value {value}");
                RpcError::invalid_union_variant(FIELD, value)
            })
    }
}

impl TryFrom<Value> for SimulationBank {
    type Error = RpcError;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

impl FromStr for SimulationBank {
    type Err = RpcError;

    /// Parse a bare bank name such as `tip`
    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(Value::from(s))
    }
}

impl Serialize for SimulationBank {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SimulationBank {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from(&value).map_err(serde::de::Error::custom)
    }
}

/// Accounts to capture before or after one transaction of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSimulateBundleAccountsConfig {
    /// Accounts to capture
    pub addresses: Vec<Address>,
    /// Encoding for captured account data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<UiAccountEncoding>,
}

impl RpcSimulateBundleAccountsConfig {
    /// Capture `addresses` with the given encoding
    pub fn new(addresses: Vec<Address>, encoding: Option<UiAccountEncoding>) -> Self {
        Self {
            addresses,
            encoding,
        }
    }
}

/// Configuration for `simulateBundle`
///
/// The account-capture lists hold one entry per bundled transaction, `None`
/// meaning nothing is captured for that position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcSimulateBundleConfig {
    /// Account captures before each transaction executes
    pub pre_execution_accounts_configs: Vec<Option<RpcSimulateBundleAccountsConfig>>,
    /// Account captures after each transaction executes
    pub post_execution_accounts_configs: Vec<Option<RpcSimulateBundleAccountsConfig>>,
    /// Encoding of the bundled transactions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_encoding: Option<UiTransactionEncoding>,
    /// Bank to simulate against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_bank: Option<SimulationBank>,
    /// Skip signature verification
    #[serde(default)]
    pub skip_sig_verify: bool,
    /// Replace each transaction's blockhash with the latest one
    #[serde(default)]
    pub replace_recent_blockhash: bool,
}

impl RpcSimulateBundleConfig {
    /// Create a config with per-transaction account captures
    pub fn new(
        pre_execution_accounts_configs: Vec<Option<RpcSimulateBundleAccountsConfig>>,
        post_execution_accounts_configs: Vec<Option<RpcSimulateBundleAccountsConfig>>,
    ) -> Self {
        Self {
            pre_execution_accounts_configs,
            post_execution_accounts_configs,
            ..Self::default()
        }
    }

    /// Set the transaction encoding
    pub fn with_transaction_encoding(mut self, encoding: UiTransactionEncoding) -> Self {
        self.transaction_encoding = Some(encoding);
        self
    }

    /// Set an already validated simulation bank
    pub fn with_simulation_bank(mut self, bank: SimulationBank) -> Self {
        self.simulation_bank = Some(bank);
        self
    }

    /// Validate an untyped bank selector and set it
    ///
    /// Fails with [`RpcError::InvalidUnionVariant`] when the value matches none
    /// of the accepted shapes, so a malformed selector never reaches a request.
    pub fn with_simulation_bank_value(mut self, value: Value) -> Result<Self> {
        self.simulation_bank = Some(SimulationBank::try_from(value)?);
        Ok(self)
    }

    /// Skip or perform signature verification
    pub fn with_skip_sig_verify(mut self, skip: bool) -> Self {
        self.skip_sig_verify = skip;
        self
    }

    /// Replace blockhashes before simulating
    pub fn with_replace_recent_blockhash(mut self, replace: bool) -> Self {
        self.replace_recent_blockhash = replace;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_accepted_bank_shapes_round_trip() {
        for value in [
            json!("tip"),
            json!({"slot": 373976835}),
            json!({"commitment": {"commitment": "confirmed"}}),
        ] {
            let bank = SimulationBank::try_from(&value).unwrap();
            assert_eq!(serde_json::to_value(bank).unwrap(), value);
        }
        assert_eq!("tip".parse::<SimulationBank>().unwrap(), SimulationBank::Tip);
        assert_eq!(
            SimulationBank::try_from(json!({"slot": 5})).unwrap(),
            SimulationBank::Slot(5)
        );
    }

    #[test]
    fn test_rejected_bank_shapes() {
        for value in [
            json!("processed"),
            json!("Tip"),
            json!({"slot": -1}),
            json!({"slot": "5"}),
            json!({"slot": 5, "extra": true}),
            json!({"commitment": "processed"}),
            json!({"commitment": {"commitment": "rooted"}}),
            json!(7),
            json!(null),
        ] {
            assert_matches!(
                SimulationBank::try_from(&value),
                Err(RpcError::InvalidUnionVariant { field: "simulationBank", .. }),
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_processed_literal_error_message() {
        let err = "processed".parse::<SimulationBank>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for simulationBank: \"processed\"");
    }

    #[test]
    fn test_deserialize_uses_validators() {
        let config: RpcSimulateBundleConfig = serde_json::from_value(json!({
            "preExecutionAccountsConfigs": [],
            "postExecutionAccountsConfigs": [],
            "simulationBank": {"slot": 9}
        }))
        .unwrap();
        assert_eq!(config.simulation_bank, Some(SimulationBank::Slot(9)));

        let result = serde_json::from_value::<RpcSimulateBundleConfig>(json!({
            "preExecutionAccountsConfigs": [],
            "postExecutionAccountsConfigs": [],
            "simulationBank": "processed"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_bundle_config_serialization() {
        let config = RpcSimulateBundleConfig::new(
            vec![Some(RpcSimulateBundleAccountsConfig::new(
                vec![Address::default()],
                Some(UiAccountEncoding::Base64),
            ))],
            vec![None],
        )
        .with_transaction_encoding(UiTransactionEncoding::Base64)
        .with_simulation_bank_value(json!({"commitment": {"commitment": "processed"}}))
        .unwrap()
        .with_skip_sig_verify(true);

        assert_eq!(
            serde_json::to_string(&config).unwrap(),
            concat!(
                r#"{"preExecutionAccountsConfigs":[{"addresses":["11111111111111111111111111111111"],"encoding":"base64"}],"#,
                r#""postExecutionAccountsConfigs":[null],"transactionEncoding":"base64","#,
                r#""simulationBank":{"commitment":{"commitment":"processed"}},"#,
                r#""skipSigVerify":true,"replaceRecentBlockhash":false}"#
            )
        );
    }

    #[test]
    fn test_invalid_bank_fails_at_construction() {
        let result =
            RpcSimulateBundleConfig::default().with_simulation_bank_value(json!("processed"));
        assert_matches!(result, Err(RpcError::InvalidUnionVariant { .. }));
    }
}
