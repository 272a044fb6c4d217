use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Address cannot be empty")]
    EmptyAddress,
    #[error("Address must be 56 characters long, got {0}")]
    AddressLength(usize),
    #[error("Address must contain only uppercase letters and digits")]
    AddressCharset,
    #[error("Address must start with '{expected}'")]
    AddressPrefix { expected: &'static str },
    #[error("WASM hash must be 64 hex characters")]
    HashLength,
    #[error("WASM hash must be hexadecimal")]
    HashCharset,
    #[error("WASM hash must not be zero")]
    ZeroHash,
    #[error("Store name must be 1 to 32 characters of [A-Za-z0-9_]")]
    InvalidSymbol,
}

fn validate_strkey(address: &str) -> Result<(), ValidationError> {
    if address.is_empty() {
        return Err(ValidationError::EmptyAddress);
    }

    if address.len() != 56 {
        return Err(ValidationError::AddressLength(address.len()));
    }

    if !address
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    {
        return Err(ValidationError::AddressCharset);
    }

    Ok(())
}

/// Account addresses start with 'G'.
pub fn validate_account_address(address: &str) -> Result<(), ValidationError> {
    validate_strkey(address)?;
    if !address.starts_with('G') {
        return Err(ValidationError::AddressPrefix { expected: "G" });
    }
    Ok(())
}

/// Contract addresses start with 'C'.
pub fn validate_contract_address(address: &str) -> Result<(), ValidationError> {
    validate_strkey(address)?;
    if !address.starts_with('C') {
        return Err(ValidationError::AddressPrefix { expected: "C" });
    }
    Ok(())
}

/// Either an account or a contract.
pub fn validate_address(address: &str) -> Result<(), ValidationError> {
    validate_strkey(address)?;
    if !(address.starts_with('G') || address.starts_with('C')) {
        return Err(ValidationError::AddressPrefix { expected: "G or C" });
    }
    Ok(())
}

pub fn validate_wasm_hash(hash: &str) -> Result<(), ValidationError> {
    if hash.len() != 64 {
        return Err(ValidationError::HashLength);
    }
    if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::HashCharset);
    }
    if hash.chars().all(|c| c == '0') {
        return Err(ValidationError::ZeroHash);
    }
    Ok(())
}

pub fn validate_symbol(name: &str) -> Result<(), ValidationError> {
    if name.is_empty()
        || name.len() > 32
        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::InvalidSymbol);
    }
    Ok(())
}

pub fn truncate_address(address: &str, chars: usize) -> String {
    if address.len() <= chars * 2 {
        return address.to_string();
    }

    format!(
        "{}...{}",
        &address[..chars],
        &address[address.len() - chars..]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
    const CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAE";

    #[test]
    fn test_validate_addresses() {
        assert_eq!(validate_account_address(ACCOUNT), Ok(()));
        assert_eq!(validate_contract_address(CONTRACT), Ok(()));
        assert_eq!(validate_address(ACCOUNT), Ok(()));
        assert_eq!(validate_address(CONTRACT), Ok(()));

        assert_eq!(
            validate_account_address(CONTRACT),
            Err(ValidationError::AddressPrefix { expected: "G" })
        );
        assert_eq!(validate_address(""), Err(ValidationError::EmptyAddress));
        assert_eq!(
            validate_address("GABC"),
            Err(ValidationError::AddressLength(4))
        );
        assert_eq!(
            validate_address(&ACCOUNT.to_lowercase()),
            Err(ValidationError::AddressCharset)
        );
    }

    #[test]
    fn test_validate_wasm_hash() {
        let good = "ab".repeat(32);
        assert_eq!(validate_wasm_hash(&good), Ok(()));
        assert_eq!(validate_wasm_hash("abcd"), Err(ValidationError::HashLength));
        assert_eq!(
            validate_wasm_hash(&"zz".repeat(32)),
            Err(ValidationError::HashCharset)
        );
        assert_eq!(
            validate_wasm_hash(&"0".repeat(64)),
            Err(ValidationError::ZeroHash)
        );
    }

    #[test]
    fn test_validate_symbol() {
        assert_eq!(validate_symbol("Corner_Shop_42"), Ok(()));
        assert_eq!(validate_symbol(""), Err(ValidationError::InvalidSymbol));
        assert_eq!(validate_symbol("has space"), Err(ValidationError::InvalidSymbol));
        assert_eq!(
            validate_symbol(&"a".repeat(33)),
            Err(ValidationError::InvalidSymbol)
        );
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ACCOUNT, 4), "GAAA...AWHF");
        assert_eq!(truncate_address("GABC", 4), "GABC");
    }
}
