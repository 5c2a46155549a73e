// libclf/src/types.rs

//! Bitrate types and identifier newtypes.

use crate::Error;
use derive_more::Display;
use std::str::FromStr;

/// Bitrate and modulation type carried on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitrateType {
    /// NFC-A, 106 kbps
    #[display(fmt = "106A")]
    #[cfg_attr(feature = "serde", serde(rename = "106A"))]
    A106,
    /// NFC-B, 106 kbps
    #[display(fmt = "106B")]
    #[cfg_attr(feature = "serde", serde(rename = "106B"))]
    B106,
    /// NFC-F, 212 kbps
    #[display(fmt = "212F")]
    #[cfg_attr(feature = "serde", serde(rename = "212F"))]
    F212,
    /// NFC-F, 424 kbps
    #[display(fmt = "424F")]
    #[cfg_attr(feature = "serde", serde(rename = "424F"))]
    F424,
}

impl BitrateType {
    /// Every bitrate type.
    pub const ALL: [BitrateType; 4] = [Self::A106, Self::B106, Self::F212, Self::F424];

    /// Wire notation, e.g. `"106A"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A106 => "106A",
            Self::B106 => "106B",
            Self::F212 => "212F",
            Self::F424 => "424F",
        }
    }

    /// True for the NFC-F bitrates.
    pub fn is_type_f(&self) -> bool {
        matches!(self, Self::F212 | Self::F424)
    }
}

impl FromStr for BitrateType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|brty| brty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::MalformedFrame(format!("unknown bitrate type '{}'", s)))
    }
}

/// NFC-A UID of 4, 7 or 10 bytes (single, double or triple size).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    /// Single, double and triple size.
    pub const VALID_LENGTHS: [usize; 3] = [4, 7, 10];

    /// UID bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// UID size in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed UID.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex notation.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !Self::VALID_LENGTHS.contains(&bytes.len()) {
            // Report the next valid size as the expectation.
            let expected = Self::VALID_LENGTHS
                .iter()
                .copied()
                .find(|&n| n >= bytes.len())
                .unwrap_or(10);
            return Err(Error::InvalidLength {
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

impl TryFrom<Vec<u8>> for Uid {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(&bytes[..])
    }
}

/// IDm - Newtype Pattern (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex notation.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// PMm - Newtype Pattern (8 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Wrap raw bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 8] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 8,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

/// NFC-F system code, transmitted MSB first in SENSF_REQ/SENSF_RES.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard matching every system code.
    pub const ANY: Self = Self(0xffff);
    /// NFC Forum Type 3 Tag system code
    pub const NDEF: Self = Self(0x12fc);

    /// System code from its numeric value.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Numeric value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire order bytes.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// System code from wire order bytes.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }

    /// Wildcard match: a 0xFF byte in the requested code matches any value.
    pub fn matches(&self, requested: SystemCode) -> bool {
        let own = self.to_be_bytes();
        let req = requested.to_be_bytes();
        own.iter()
            .zip(req.iter())
            .all(|(&o, &r)| r == 0xff || o == r)
    }
}
