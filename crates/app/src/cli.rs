//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use courier_domain::{
    AuthConfig, DomainResult, HttpMethod, KeyValue, RawKind, RequestBody, RequestSpec,
};

#[derive(Debug, Parser)]
#[command(version, name = "courier", about = "Compose, send and keep HTTP requests")]
pub struct Cli {
    /// Directory holding settings, collections, environments and history
    /// (defaults to $COURIER_DATA_DIR, then the platform config directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sends a request and records it in history
    Send(SendArgs),

    /// Shows recent requests, newest first
    History {
        /// Maximum number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },

    /// Manages collections
    #[command(subcommand)]
    Collections(CollectionsCommand),

    /// Manages environments
    #[command(subcommand)]
    Env(EnvCommand),
}

#[derive(Debug, Subcommand)]
pub enum CollectionsCommand {
    /// Lists collections with their request counts
    List,
    /// Creates an empty collection
    Add {
        /// Collection name
        name: String,
    },
    /// Shows one collection and its requests
    Show {
        /// Collection id
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum EnvCommand {
    /// Lists environments
    List,
    /// Creates an empty environment
    Add {
        /// Environment name
        name: String,
    },
    /// Sets a variable on an environment
    Set {
        /// Environment id
        id: String,
        /// Variable name
        key: String,
        /// Variable value
        value: String,
        /// Store the variable switched off
        #[arg(long)]
        disabled: bool,
    },
    /// Selects an environment and shows it
    Use {
        /// Environment id
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// HTTP method
    pub method: HttpMethod,

    /// Target URL; may already carry a query string
    pub url: String,

    /// Request name used in history and collections
    #[arg(long, default_value = "New Request")]
    pub name: String,

    /// Query parameter as key=value (repeatable)
    #[arg(short = 'q', long = "query", value_parser = parse_query_pair)]
    pub params: Vec<KeyValue>,

    /// Header as key:value (repeatable)
    #[arg(short = 'H', long = "header", value_parser = parse_header_pair)]
    pub headers: Vec<KeyValue>,

    /// Basic auth as user:pass
    #[arg(long, value_name = "USER:PASS", conflicts_with_all = ["bearer", "api_key"])]
    pub basic: Option<String>,

    /// Bearer token
    #[arg(long, value_name = "TOKEN", conflicts_with = "api_key")]
    pub bearer: Option<String>,

    /// API key as key=value, sent as a header unless --api-key-in-query
    #[arg(long, value_parser = parse_query_pair)]
    pub api_key: Option<KeyValue>,

    /// Send the API key as a query parameter
    #[arg(long)]
    pub api_key_in_query: bool,

    /// Raw body, sent verbatim
    #[arg(long, conflicts_with_all = ["form", "urlencoded"])]
    pub raw: Option<String>,

    /// Raw body flavour: text, json, xml or javascript
    #[arg(long, default_value = "text")]
    pub raw_type: RawKind,

    /// Multipart form field as key=value (repeatable)
    #[arg(long, value_parser = parse_query_pair, conflicts_with = "urlencoded")]
    pub form: Vec<KeyValue>,

    /// URL-encoded form field as key=value (repeatable)
    #[arg(long, value_parser = parse_query_pair)]
    pub urlencoded: Vec<KeyValue>,

    /// Also save the request into this collection
    #[arg(long, value_name = "COLLECTION_ID")]
    pub save_to: Option<String>,
}

fn parse_query_pair(input: &str) -> DomainResult<KeyValue> {
    KeyValue::parse(input, '=')
}

fn parse_header_pair(input: &str) -> DomainResult<KeyValue> {
    KeyValue::parse(input, ':')
}

impl SendArgs {
    /// Builds the request described by the arguments.
    pub fn to_request(&self) -> DomainResult<RequestSpec> {
        let mut request =
            RequestSpec::new(self.name.as_str()).with_url(self.method, self.url.as_str());
        request.params = self.params.iter().cloned().collect();
        request.headers = self.headers.iter().cloned().collect();
        request.body = self.body();
        request.auth = self.auth()?;
        Ok(request)
    }

    fn body(&self) -> RequestBody {
        if let Some(content) = &self.raw {
            RequestBody::raw(content.as_str(), self.raw_type)
        } else if !self.form.is_empty() {
            RequestBody::form_data(self.form.iter().cloned())
        } else if !self.urlencoded.is_empty() {
            RequestBody::url_encoded(self.urlencoded.iter().cloned())
        } else {
            RequestBody::None
        }
    }

    fn auth(&self) -> DomainResult<AuthConfig> {
        if let Some(credentials) = &self.basic {
            // Passwords may contain ':'; only the first one splits.
            let pair = KeyValue::parse(credentials, ':')?;
            return Ok(AuthConfig::basic(pair.key, pair.value));
        }
        if let Some(token) = &self.bearer {
            return Ok(AuthConfig::bearer(token.as_str()));
        }
        Ok(match &self.api_key {
            Some(pair) if self.api_key_in_query => {
                AuthConfig::api_key_query(pair.key.as_str(), pair.value.as_str())
            }
            Some(pair) => AuthConfig::api_key_header(pair.key.as_str(), pair.value.as_str()),
            None => AuthConfig::None,
        })
    }
}
