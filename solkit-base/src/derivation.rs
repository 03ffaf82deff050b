//! Address derivation: seed-derived addresses and program-derived addresses

use curve25519_dalek::edwards::CompressedEdwardsY;
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::{debug, trace};

use crate::address::Address;
use crate::error::{CodecError, Result};

/// Maximum length in bytes of a single derivation seed
pub const MAX_SEED_LEN: usize = 32;
/// Maximum number of seeds for a program-derived address, bump included
pub const MAX_SEEDS: usize = 16;

const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// UTF-8 seed string of at most 32 encoded bytes
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Seed(String);

impl Seed {
    pub fn new(seed: impl Into<String>) -> Result<Self> {
        let seed = seed.into();
        check_seed_len(seed.len())?;
        Ok(Self(seed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<&str> for Seed {
    type Error = CodecError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for Seed {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for Seed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn check_seed_len(len: usize) -> Result<()> {
    if len > MAX_SEED_LEN {
        return Err(CodecError::SeedTooLong { len });
    }
    Ok(())
}

fn digest_to_address(hasher: Sha256) -> Address {
    let hash = hasher.finalize();
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hash[..32]);
    Address::new_from_array(bytes)
}

/// Returns true when the bytes decompress to a point on the ed25519 curve,
/// i.e. when they could be a real public key
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}

/// Derives an address from a base address, a seed string and an owner program
///
/// The result is SHA-256(base || seed || owner). No private key exists for it
/// unless the base key signs on its behalf.
pub fn derive_with_seed(base: &Address, seed: &str, owner: &Address) -> Result<Address> {
    check_seed_len(seed.len())?;
    let mut hasher = Sha256::new();
    hasher.update(base.as_ref());
    hasher.update(seed.as_bytes());
    hasher.update(owner.as_ref());
    Ok(digest_to_address(hasher))
}

/// Computes a program address from an exact seed list
///
/// # Errors
/// * `TooManySeeds` - more than 16 seeds
/// * `SeedTooLong` - any seed longer than 32 bytes
/// * `AddressOnCurve` - the digest is a valid curve point and cannot be used
pub fn create_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<Address> {
    if seeds.len() > MAX_SEEDS {
        return Err(CodecError::TooManySeeds { count: seeds.len() });
    }
    for seed in seeds {
        check_seed_len(seed.len())?;
    }

    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update(program_id.as_ref());
    hasher.update(PDA_MARKER);
    let address = digest_to_address(hasher);

    if is_on_curve(address.as_array()) {
        return Err(CodecError::AddressOnCurve);
    }
    Ok(address)
}

/// Finds the program address for `seeds` with the highest valid bump byte
///
/// Bumps are tried from 255 down to 0 and the first off-curve result wins, so
/// the same inputs always yield the same (address, bump) pair.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Address) -> Result<(Address, u8)> {
    if seeds.len() >= MAX_SEEDS {
        return Err(CodecError::TooManySeeds {
            count: seeds.len() + 1,
        });
    }

    for bump in (0..=u8::MAX).rev() {
        let bump_seed = [bump];
        let mut seeds_with_bump = seeds.to_vec();
        seeds_with_bump.push(&bump_seed);

        match create_program_address(&seeds_with_bump, program_id) {
            Ok(address) => {
                debug!("Found program address {} with bump {}", address, bump);
                return Ok((address, bump));
            }
            Err(CodecError::AddressOnCurve) => {
                trace!("Bump {} lands on the curve, trying next", bump);
            }
            Err(e) => return Err(e),
        }
    }

    debug!("Exhausted bump search for program {}", program_id);
    Err(CodecError::NoValidBumpFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::SYSTEM_PROGRAM_ID;
    use assert_matches::assert_matches;
    use ed25519_dalek::SigningKey;
    use rand::RngCore;

    #[test]
    fn test_derive_with_seed_known_vector() {
        let derived =
            derive_with_seed(&Address::default(), "limber chicken: 4/45", &Address::default())
                .unwrap();
        assert_eq!(
            derived.to_string(),
            "9h1HyLCW5dZnBVap8C5egQ9Z6pHyjsh5MNy83iPqqRuq"
        );
    }

    #[test]
    fn test_derive_with_seed_is_deterministic() {
        let base = Address::new_from_array([3u8; 32]);
        let owner = Address::new_from_array([4u8; 32]);
        let a = derive_with_seed(&base, "nonce", &owner).unwrap();
        let b = derive_with_seed(&base, "nonce", &owner).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, derive_with_seed(&base, "nonce2", &owner).unwrap());
    }

    #[test]
    fn test_seed_length_boundary() {
        let base = Address::new_unique();
        let owner = Address::new_unique();
        let exact = "a".repeat(MAX_SEED_LEN);
        assert!(derive_with_seed(&base, &exact, &owner).is_ok());
        assert!(Seed::new(exact).is_ok());

        let over = "a".repeat(MAX_SEED_LEN + 1);
        assert_eq!(
            derive_with_seed(&base, &over, &owner),
            Err(CodecError::SeedTooLong { len: 33 })
        );
        assert_eq!(Seed::new(over), Err(CodecError::SeedTooLong { len: 33 }));

        // Length is counted in encoded bytes, not characters
        let multibyte = "é".repeat(17);
        assert_eq!(
            Seed::new(multibyte),
            Err(CodecError::SeedTooLong { len: 34 })
        );
    }

    #[test]
    fn test_create_program_address_known_vector() {
        let program_id: Address = "BPFLoaderUpgradeab1e11111111111111111111111".parse().unwrap();
        let address = create_program_address(&[b"", &[1]], &program_id).unwrap();
        assert_eq!(
            address.to_string(),
            "BwqrghZA2htAcqq8dzP1WDAhTXYTYWj7CHxF5j7TDBAe"
        );
    }

    #[test]
    fn test_create_program_address_limits() {
        let program_id = Address::new_unique();
        let long = [0u8; MAX_SEED_LEN + 1];
        assert_eq!(
            create_program_address(&[&long], &program_id),
            Err(CodecError::SeedTooLong { len: 33 })
        );

        let seeds: Vec<&[u8]> = vec![&b"s"[..]; MAX_SEEDS + 1];
        assert_eq!(
            create_program_address(&seeds, &program_id),
            Err(CodecError::TooManySeeds { count: 17 })
        );
    }

    #[test]
    fn test_find_program_address_picks_highest_bump() {
        // Bump 255 lands on the curve for this input, so 254 is selected
        let (address, bump) = find_program_address(&[b"seed0"], &SYSTEM_PROGRAM_ID).unwrap();
        assert_eq!(bump, 254);
        assert_eq!(
            address.to_string(),
            "Gu6jrJzvaS3wGZk7boG5kfU5GVkh1zTFwkiM2Vnx3gHm"
        );
        assert_matches!(
            create_program_address(&[b"seed0", &[255]], &SYSTEM_PROGRAM_ID),
            Err(CodecError::AddressOnCurve)
        );

        let (address, bump) = find_program_address(&[b"hello"], &SYSTEM_PROGRAM_ID).unwrap();
        assert_eq!(bump, 255);
        assert_eq!(
            address.to_string(),
            "2PjSSVURwJV4o9wz1BDVwwddvcUCuF1NKFpcQBF9emYJ"
        );
    }

    #[test]
    fn test_find_program_address_matches_create() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let program_id = Address::new_unique();
            let mut seed = [0u8; 32];
            rng.fill_bytes(&mut seed);

            let (address, bump) = find_program_address(&[&seed], &program_id).unwrap();
            assert_eq!(
                create_program_address(&[&seed, &[bump]], &program_id).unwrap(),
                address
            );
            assert!(!is_on_curve(address.as_array()));
            // Every higher bump must have landed on the curve
            for higher in (u16::from(bump) + 1)..=255 {
                assert_matches!(
                    create_program_address(&[&seed, &[higher as u8]], &program_id),
                    Err(CodecError::AddressOnCurve)
                );
            }
        }
    }

    #[test]
    fn test_find_program_address_seed_errors_propagate() {
        let program_id = Address::new_unique();
        let long = [1u8; 40];
        assert_eq!(
            find_program_address(&[&long], &program_id),
            Err(CodecError::SeedTooLong { len: 40 })
        );
        let seeds: Vec<&[u8]> = vec![&b"s"[..]; MAX_SEEDS];
        assert_eq!(
            find_program_address(&seeds, &program_id),
            Err(CodecError::TooManySeeds { count: 17 })
        );
    }

    #[test]
    fn test_is_on_curve_for_real_public_keys() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let mut secret = [0u8; 32];
            rng.fill_bytes(&mut secret);
            let public = SigningKey::from_bytes(&secret).verifying_key().to_bytes();
            assert!(is_on_curve(&public));
        }
    }
}
