//! Keys, permission levels, and authorities.

use serde::{Deserialize, Serialize};

use crate::name::Name;

/// Key algorithm tag. Only the secp256k1 (`K1`) scheme exists here; its wire
/// tag is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    K1,
}

impl KeyType {
    /// The numeric tag carried on the wire.
    pub fn tag(&self) -> u8 {
        match self {
            KeyType::K1 => 0,
        }
    }
}

/// A compressed public key with its algorithm tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub key_type: KeyType,
    /// 33-byte compressed secp256k1 point.
    #[serde(with = "serde_key_bytes")]
    pub data: [u8; 33],
}

impl PublicKey {
    /// Wrap raw compressed key material as a `K1` key.
    pub fn k1(data: [u8; 33]) -> Self {
        PublicKey {
            key_type: KeyType::K1,
            data,
        }
    }
}

/// Serde helpers for the 33-byte key material (hex text form).
mod serde_key_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 33], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 33], D::Error> {
        let text = String::deserialize(deserializer)?;
        let bytes = hex::decode(&text).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 33 bytes of key material"))
    }
}

/// An actor plus the permission it acts under, e.g. `creator@active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionLevel {
    pub actor: Name,
    pub permission: Name,
}

impl PermissionLevel {
    pub fn new(actor: Name, permission: Name) -> Self {
        PermissionLevel { actor, permission }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyWeight {
    pub key: PublicKey,
    pub weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionLevelWeight {
    pub permission: PermissionLevel,
    pub weight: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitWeight {
    pub wait_sec: u32,
    pub weight: u16,
}

/// A weighted-threshold authority over an account role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    pub threshold: u32,
    pub keys: Vec<KeyWeight>,
    pub accounts: Vec<PermissionLevelWeight>,
    pub waits: Vec<WaitWeight>,
}

impl Authority {
    /// Threshold-1 authority satisfied by a single weight-1 key.
    pub fn single_key(key: PublicKey) -> Self {
        Authority {
            threshold: 1,
            keys: vec![KeyWeight { key, weight: 1 }],
            accounts: Vec::new(),
            waits: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_key() -> PublicKey {
        let mut data = [0u8; 33];
        data[0] = 0x02;
        data[32] = 0x7f;
        PublicKey::k1(data)
    }

    #[test]
    fn k1_tag_is_zero() {
        assert_eq!(KeyType::K1.tag(), 0);
    }

    #[test]
    fn single_key_authority_shape() {
        let auth = Authority::single_key(sample_key());
        assert_eq!(auth.threshold, 1);
        assert_eq!(auth.keys.len(), 1);
        assert_eq!(auth.keys[0].weight, 1);
        assert_eq!(auth.keys[0].key, sample_key());
        assert!(auth.accounts.is_empty());
        assert!(auth.waits.is_empty());
    }

    #[test]
    fn public_key_serde_roundtrip() {
        let key = sample_key();
        let json = serde_json::to_string(&key).unwrap();
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn public_key_serializes_as_hex() {
        let json = serde_json::to_value(sample_key()).unwrap();
        let data = json["data"].as_str().unwrap();
        assert_eq!(data.len(), 66);
        assert!(data.starts_with("02"));
    }

    #[test]
    fn public_key_deserialize_wrong_length_rejected() {
        let json = r#"{"key_type":"K1","data":"0202"}"#;
        assert!(serde_json::from_str::<PublicKey>(json).is_err());
    }

    #[test]
    fn permission_level_fields() {
        let level = PermissionLevel::new(
            Name::from_static("signup"),
            Name::from_static("active"),
        );
        assert_eq!(level.actor, Name::from_static("signup"));
        assert_eq!(level.permission, Name::from_static("active"));
    }
}
