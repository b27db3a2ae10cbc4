use crate::errors::DomainError;

/// Maximum length of a domain name in presentation form (RFC 1035).
pub const MAX_DOMAIN_LEN: usize = 253;

/// Validate a domain name at the cache boundary.
///
/// The cache itself never truncates or rejects names; callers feeding it
/// from the wire are expected to have validated here first.
pub fn validate_domain_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "name cannot be empty".to_string(),
        ));
    }
    if name.len() > MAX_DOMAIN_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "name cannot exceed {MAX_DOMAIN_LEN} bytes"
        )));
    }
    Ok(())
}
