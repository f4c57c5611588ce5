use crate::utils::error::{Result, ScaffoldError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScaffoldError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let well_formed = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };

    if !well_formed {
        return Err(ScaffoldError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected an address of the form user@host.tld".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("homepage", "https://github.com/user/repo").is_ok());
        assert!(validate_url("homepage", "http://example.com").is_ok());
        assert!(validate_url("homepage", "").is_err());
        assert!(validate_url("homepage", "not-a-url").is_err());
        assert!(validate_url("homepage", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("module_name", "my-module").is_ok());
        assert!(validate_non_empty_string("module_name", "").is_err());
        assert!(validate_non_empty_string("module_name", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("email", "dev@example.com").is_ok());
        assert!(validate_email("email", "dev.example.com").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "dev@localhost").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_root", "stable").is_ok());
        assert!(validate_path("output_root", "").is_err());
        assert!(validate_path("output_root", "bad\0path").is_err());
    }
}
