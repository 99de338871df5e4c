//! Client configuration: one immutable value shared by every resource.

use url::Url;

use crate::domain::{ApiKey, ApiSecret, ValidationError};

pub const DEFAULT_API_ROOT: &str = "https://rest.nexmo.com";

pub const ENV_API_KEY: &str = "NEXMO_API_KEY";
pub const ENV_API_SECRET: &str = "NEXMO_API_SECRET";
pub const ENV_API_ROOT: &str = "NEXMO_API_ROOT";
pub const ENV_USE_OAUTH: &str = "NEXMO_USE_OAUTH";
pub const ENV_VERBOSE: &str = "NEXMO_VERBOSE";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    MissingVar(&'static str),

    #[error("invalid api root {input:?}: {source}")]
    InvalidApiRoot {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("api root {input:?} cannot be used as a base URL")]
    OpaqueApiRoot { input: String },

    #[error("invalid credentials: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Credentials and switches used by [`crate::NexmoClient`].
///
/// `use_oauth` only affects `sms/json`: the key/secret form fields are left out and
/// authorization is expected to happen elsewhere. Number management always embeds the
/// key and secret in the request path.
pub struct ClientConfig {
    api_root: Url,
    api_key: ApiKey,
    api_secret: ApiSecret,
    use_oauth: bool,
    verbose: bool,
}

impl ClientConfig {
    pub fn new(api_key: ApiKey, api_secret: ApiSecret) -> Self {
        Self {
            api_root: default_api_root(),
            api_key,
            api_secret,
            use_oauth: false,
            verbose: false,
        }
    }

    /// Validate raw key/secret strings and build a config with defaults.
    pub fn with_credentials(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(ApiKey::new(api_key)?, ApiSecret::new(api_secret)?))
    }

    /// Read the configuration from `NEXMO_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY).ok_or(ConfigError::MissingVar(ENV_API_KEY))?;
        let api_secret = lookup(ENV_API_SECRET).ok_or(ConfigError::MissingVar(ENV_API_SECRET))?;

        let mut config = Self::with_credentials(api_key, api_secret)?
            .use_oauth(lookup(ENV_USE_OAUTH).is_some_and(|v| is_truthy(&v)))
            .verbose(lookup(ENV_VERBOSE).is_some_and(|v| is_truthy(&v)));

        if let Some(root) = lookup(ENV_API_ROOT).filter(|root| !root.trim().is_empty()) {
            config = config.api_root(&root)?;
        }
        Ok(config)
    }

    /// Override the API root (`https://rest.nexmo.com` by default).
    pub fn api_root(mut self, root: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(root.trim()).map_err(|source| ConfigError::InvalidApiRoot {
            input: root.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::OpaqueApiRoot {
                input: root.to_owned(),
            });
        }
        self.api_root = url;
        Ok(self)
    }

    pub fn use_oauth(mut self, use_oauth: bool) -> Self {
        self.use_oauth = use_oauth;
        self
    }

    /// Log request and response bodies through the `log` facade at debug level.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn root(&self) -> &Url {
        &self.api_root
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    pub fn is_oauth(&self) -> bool {
        self.use_oauth
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

fn default_api_root() -> Url {
    Url::parse(DEFAULT_API_ROOT).expect("default api root is a valid URL")
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
