// src/config/credentials.rs
// API credential lookup, kept behind a trait so tests can supply keys directly

/// Environment variable holding the chat completions API key
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Supplies the API key at call time
pub trait CredentialProvider: Send + Sync {
    /// The key, or `None` when no usable key is configured
    fn api_key(&self) -> Option<String>;
}

/// Reads the key from the process environment on every call
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(API_KEY_ENV_VAR)
    }
}

/// Trim a raw key; blank values count as missing.
fn usable_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        usable_key(std::env::var(&self.var).ok())
    }
}

/// Fixed key, for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(pub Option<String>);

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_credentials() {
        assert_eq!(StaticCredentials::new("sk-test").api_key().as_deref(), Some("sk-test"));
        assert_eq!(StaticCredentials::missing().api_key(), None);
    }

    #[test]
    fn test_env_credentials_missing_var() {
        let creds = EnvCredentials::new("EXPERT_DESK_TEST_SURELY_UNSET_KEY");
        assert_eq!(creds.api_key(), None);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        assert_eq!(usable_key(Some("   \t\n".to_string())), None);
        assert_eq!(usable_key(Some(String::new())), None);
        assert_eq!(usable_key(Some("  sk-live  ".to_string())).as_deref(), Some("sk-live"));
        assert_eq!(usable_key(None), None);
    }

    #[test]
    fn test_env_credentials_whitespace_var() {
        let var = "EXPERT_DESK_TEST_WHITESPACE_KEY";
        // SAFETY: the variable name is unique to this test
        unsafe { std::env::set_var(var, "   ") };
        assert_eq!(EnvCredentials::new(var).api_key(), None);

        unsafe { std::env::set_var(var, " sk-padded ") };
        assert_eq!(EnvCredentials::new(var).api_key().as_deref(), Some("sk-padded"));
        unsafe { std::env::remove_var(var) };
    }

    #[test]
    fn test_default_reads_openai_key() {
        assert_eq!(EnvCredentials::default().var, API_KEY_ENV_VAR);
    }
}
