use crate::dns_record::RecordType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unsupported record type code: {0}")]
    UnsupportedRecordType(u16),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordTypeName(String),

    #[error("Address length mismatch for {record_type} record: expected {expected} bytes, got {actual}")]
    AddressLengthMismatch {
        record_type: RecordType,
        expected: usize,
        actual: usize,
    },

    #[error("Address family does not match {record_type} record")]
    AddressFamilyMismatch { record_type: RecordType },

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),
}
