use crate::errors::DomainError;
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Record types the resolution cache stores.
///
/// Only address records are cacheable; any other type coming off the wire
/// is rejected at the boundary by [`RecordType::from_wire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// IPv4 address record
    A,
    /// IPv6 address record
    AAAA,
}

/// Wire-format RR TYPE code for A records (RFC 1035)
const WIRE_TYPE_A: u16 = 1;
/// Wire-format RR TYPE code for AAAA records (RFC 3596)
const WIRE_TYPE_AAAA: u16 = 28;

impl RecordType {
    /// Map a wire-format TYPE code to a cacheable record type.
    ///
    /// Returns `UnsupportedRecordType` for everything that is not A or AAAA.
    pub fn from_wire(code: u16) -> Result<Self, DomainError> {
        match code {
            WIRE_TYPE_A => Ok(Self::A),
            WIRE_TYPE_AAAA => Ok(Self::AAAA),
            other => Err(DomainError::UnsupportedRecordType(other)),
        }
    }

    pub fn to_wire(&self) -> u16 {
        match self {
            Self::A => WIRE_TYPE_A,
            Self::AAAA => WIRE_TYPE_AAAA,
        }
    }

    /// RDATA length in bytes for this record type.
    pub fn address_len(&self) -> usize {
        match self {
            Self::A => 4,
            Self::AAAA => 16,
        }
    }

    /// Decode RDATA bytes into an address, checking the exact length.
    pub fn parse_address(&self, bytes: &[u8]) -> Result<IpAddr, DomainError> {
        if bytes.len() != self.address_len() {
            return Err(DomainError::AddressLengthMismatch {
                record_type: *self,
                expected: self.address_len(),
                actual: bytes.len(),
            });
        }

        match self {
            Self::A => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(bytes);
                Ok(IpAddr::from(octets))
            }
            Self::AAAA => {
                let mut octets = [0u8; 16];
                octets.copy_from_slice(bytes);
                Ok(IpAddr::from(octets))
            }
        }
    }

    /// Whether an address belongs to this record type's family.
    pub fn matches(&self, address: &IpAddr) -> bool {
        matches!(
            (self, address),
            (Self::A, IpAddr::V4(_)) | (Self::AAAA, IpAddr::V6(_))
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "AAAA" => Ok(Self::AAAA),
            other => Err(DomainError::UnsupportedRecordTypeName(other.to_string())),
        }
    }
}
