//! # Commitment Codec
//!
//! A commitment is `[version_byte][backend_payload]`. The version byte alone
//! decides how the payload is read, so decoding never touches backend state.
//!
//! On the alt-DA wire the commitment is additionally prefixed with the
//! commitment type byte. Only generic commitments are produced or accepted.
//!
//! ```text
//! wire:        [0x01][0x0c][metadata_uri ...]
//!               type  ver   payload
//! commitment:        [0x0c][metadata_uri ...]
//! ```

use std::fmt;

use super::errors::InvalidCommitment;

/// Version byte of commitments carrying a Sunrise metadata URI.
pub const SUNRISE_VERSION_BYTE: u8 = 0x0c;

/// Alt-DA commitment type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CommitmentType {
    /// Keccak256 of the input. Not served by this store.
    Keccak256 = 0x00,
    /// Opaque, backend-defined payload.
    Generic = 0x01,
}

impl CommitmentType {
    /// Type byte as written on the wire.
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for CommitmentType {
    type Error = InvalidCommitment;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x00 => Ok(Self::Keccak256),
            0x01 => Ok(Self::Generic),
            other => Err(InvalidCommitment::UnsupportedType(other)),
        }
    }
}

/// Encoded commitment bytes, version byte included.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Commitment(Vec<u8>);

impl Commitment {
    /// Version byte.
    pub fn version(&self) -> u8 {
        self.0[0]
    }

    /// Backend payload after the version byte.
    pub fn payload(&self) -> &[u8] {
        &self.0[1..]
    }

    /// Full encoding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the full encoding.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Generic alt-DA wire form: `[0x01][version][payload]`.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut wire = Vec::with_capacity(self.0.len() + 1);
        wire.push(CommitmentType::Generic.as_byte());
        wire.extend_from_slice(&self.0);
        wire
    }
}

impl AsRef<[u8]> for Commitment {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Commitment> for Vec<u8> {
    fn from(commitment: Commitment) -> Self {
        commitment.0
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment(0x{})", hex::encode(&self.0))
    }
}

/// Codec for one commitment scheme, identified by its version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitmentCodec {
    version: u8,
}

impl CommitmentCodec {
    /// Codec for an arbitrary version byte.
    pub const fn new(version: u8) -> Self {
        Self { version }
    }

    /// Codec for Sunrise metadata URIs.
    pub const fn sunrise() -> Self {
        Self::new(SUNRISE_VERSION_BYTE)
    }

    /// Version byte this codec writes and accepts.
    pub const fn version(&self) -> u8 {
        self.version
    }

    /// Prepend the version byte.
    pub fn encode(&self, payload: &[u8]) -> Commitment {
        let mut bytes = Vec::with_capacity(payload.len() + 1);
        bytes.push(self.version);
        bytes.extend_from_slice(payload);
        Commitment(bytes)
    }

    /// Strip and check the version byte.
    pub fn decode<'a>(&self, commitment: &'a [u8]) -> Result<&'a [u8], InvalidCommitment> {
        match commitment.split_first() {
            None => Err(InvalidCommitment::Empty),
            Some((&found, payload)) if found == self.version => Ok(payload),
            Some((&found, _)) => Err(InvalidCommitment::VersionMismatch {
                expected: self.version,
                found,
            }),
        }
    }
}

/// Strip the alt-DA type byte, accepting generic commitments only.
pub fn decode_wire(wire: &[u8]) -> Result<&[u8], InvalidCommitment> {
    let (&type_byte, rest) = wire.split_first().ok_or(InvalidCommitment::Empty)?;
    match CommitmentType::try_from(type_byte)? {
        CommitmentType::Generic => Ok(rest),
        CommitmentType::Keccak256 => Err(InvalidCommitment::UnsupportedType(type_byte)),
    }
}

/// Parse `0x`-prefixed (or bare) hex from a request path.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, InvalidCommitment> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(InvalidCommitment::Empty);
    }
    hex::decode(digits).map_err(|e| InvalidCommitment::MalformedHex(e.to_string()))
}

/// Render bytes as `0x`-prefixed lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}
