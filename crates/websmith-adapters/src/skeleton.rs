//! The built-in web-service skeleton.
//!
//! [`web_service_skeleton`] returns the fixed template set websmith ships:
//! an Axum service with a config loader, explicit logging setup, typed HTTP
//! errors, CORS + request-logging middleware, and a record field-copy helper.
//!
//! Content conventions:
//! - `Parameterized` files carry `{{VAR}}` placeholders resolved by the
//!   renderer (`PROJECT_NAME*`, `SERVER_PORT`, `SERVER_MODE`, `SECRET_TOKEN`).
//! - `Literal` files are emitted verbatim.
//!
//! The generated `config/config.toml` is the contract consumed by the
//! generated `src/config.rs`: `server.port`, `server.mode`, `secret.token`,
//! `db.user`, `db.password`, `db.host`, `db.port`, `db.name`.

use websmith_core::domain::{
    DirectorySpec, FileSpec, Skeleton, SkeletonContent::Literal,
    SkeletonContent::Parameterized, SkeletonNode,
};

/// Build the web-service skeleton shipped with this binary.
pub fn web_service_skeleton() -> Skeleton {
    Skeleton::new(
        "web-service",
        "1.0.0",
        "Axum web service with config, logging, typed errors, and CORS/trace middleware.",
    )
    .with_node(SkeletonNode::Directory(DirectorySpec::new("src")))
    .with_node(SkeletonNode::Directory(DirectorySpec::new("config")))
    .with_node(SkeletonNode::File(FileSpec::new(
        "Cargo.toml",
        Parameterized(MANIFEST),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        ".gitignore",
        Literal(GITIGNORE),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "config/config.toml",
        Parameterized(CONFIG_FILE),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "src/main.rs",
        Parameterized(MAIN_RS),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "src/config.rs",
        Literal(CONFIG_RS),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "src/logging.rs",
        Literal(LOGGING_RS),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "src/error.rs",
        Literal(ERROR_RS),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "src/middleware.rs",
        Literal(MIDDLEWARE_RS),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "src/record.rs",
        Literal(RECORD_RS),
    )))
    .with_node(SkeletonNode::File(FileSpec::new(
        "README.md",
        Parameterized(README),
    )))
}

// ── Template texts ────────────────────────────────────────────────────────────

const MANIFEST: &str = r##"[package]
name = "{{PROJECT_NAME_KEBAB}}"
version = "0.1.0"
edition = "2021"

[dependencies]
axum = "0.8"
tokio = { version = "1", features = ["full"] }
tower = "0.5"
tower-http = { version = "0.6", features = ["cors", "trace"] }
serde = { version = "1", features = ["derive"] }
serde_json = "1"
toml = "0.8"
anyhow = "1"
thiserror = "2"
tracing = "0.1"
tracing-subscriber = { version = "0.3", features = ["env-filter"] }
"##;

const GITIGNORE: &str = r##"/target
config/config.toml
docker-compose.yml
docker-compose.*.yml
.env
"##;

const CONFIG_FILE: &str = r##"[server]
port = {{SERVER_PORT}}
mode = "{{SERVER_MODE}}"

[secret]
token = "{{SECRET_TOKEN}}"

[db]
user = "postgres"
password = "postgres"
host = "127.0.0.1"
port = 5432
name = "{{PROJECT_NAME_SNAKE}}"
"##;

const MAIN_RS: &str = r##"mod config;
mod error;
mod logging;
mod middleware;
mod record;

use std::net::SocketAddr;

use axum::{Router, routing::get};

use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    logging::init(&config.server.mode)?;

    let app = Router::new()
        .route("/healthz", get(health))
        .layer(middleware::request_trace())
        .layer(middleware::cors());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!(%addr, "{{PROJECT_NAME}} listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}
"##;

const CONFIG_RS: &str = r##"//! Configuration loading.
//!
//! Reads `config/config.toml` (override the path with `CONFIG_PATH`) and
//! applies the `RUN_MODE` environment variable on top of `server.mode`.

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub secret: SecretConfig,
    pub db: DbConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_mode")]
    pub mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

fn default_port() -> u16 {
    8888
}

fn default_mode() -> String {
    "debug".to_string()
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config/config.toml".into());
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {path}"))?;

        let mut config: AppConfig =
            toml::from_str(&raw).with_context(|| format!("failed to parse config file: {path}"))?;

        if let Ok(mode) = std::env::var("RUN_MODE") {
            config.server.mode = mode;
        }

        Ok(config)
    }

    pub fn db_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db.user, self.db.password, self.db.host, self.db.port, self.db.name
        )
    }
}
"##;

const LOGGING_RS: &str = r##"//! Logging setup.
//!
//! The subscriber is constructed explicitly and installed once from `main`;
//! no module holds a mutable logger handle.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `debug` mode logs at DEBUG, anything else at INFO. `RUST_LOG` overrides
/// both. Returns an error if a subscriber is already installed.
pub fn init(mode: &str) -> anyhow::Result<()> {
    let default_level = if mode == "debug" { "debug" } else { "info" };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
"##;

const ERROR_RS: &str = r##"//! API error taxonomy.
//!
//! Each failure maps one-to-one onto an HTTP status; no retries, no
//! recovery. Handlers return `Result<T, ApiError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("not acceptable: {0}")]
    NotAcceptable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotAcceptable(_) => StatusCode::NOT_ACCEPTABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "code": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}
"##;

const MIDDLEWARE_RS: &str = r##"//! HTTP middleware: CORS and request logging.

use axum::http::Method;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Permissive CORS for development; tighten the origin list before
/// production.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any)
}

/// Per-request tracing spans with latency on close.
pub fn request_trace() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
"##;

const RECORD_RS: &str = r##"//! Best-effort record field copier.
//!
//! Copies all same-named, same-kinded fields from one serializable record
//! into another, skipping everything else. Useful for mapping request DTOs
//! onto domain structs without hand-written field lists.

#![allow(dead_code)]

use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

/// Copy matching fields from `source` into `dest`.
///
/// Both values must serialize to JSON objects; anything else is rejected as
/// an invalid argument. Fields whose names match but whose value kinds
/// differ are skipped.
pub fn copy_fields<S, D>(source: &S, dest: &mut D) -> anyhow::Result<()>
where
    S: Serialize,
    D: Serialize + DeserializeOwned,
{
    let Value::Object(src) = serde_json::to_value(source)? else {
        anyhow::bail!("invalid argument: source must be a struct with named fields");
    };
    let Value::Object(mut dst) = serde_json::to_value(&*dest)? else {
        anyhow::bail!("invalid argument: destination must be a struct with named fields");
    };

    for (name, value) in src {
        if let Some(existing) = dst.get(&name) {
            if std::mem::discriminant(existing) == std::mem::discriminant(&value) {
                dst.insert(name, value);
            }
        }
    }

    *dest = serde_json::from_value(Value::Object(dst))?;
    Ok(())
}
"##;

const README: &str = r##"# {{PROJECT_NAME}}

Generated by websmith.

## Running

```sh
cargo run
```

The service reads `config/config.toml` (override with `CONFIG_PATH`) and
listens on port {{SERVER_PORT}} by default. Set `RUN_MODE=release` to switch
off debug logging.

Rotate `secret.token` before deploying anywhere real.
"##;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use websmith_core::domain::SkeletonContent;

    #[test]
    fn skeleton_is_valid() {
        assert!(web_service_skeleton().validate().is_ok());
    }

    #[test]
    fn skeleton_has_expected_files() {
        let s = web_service_skeleton();
        let paths: Vec<_> = s.files().map(|f| f.path).collect();

        for expected in [
            "Cargo.toml",
            ".gitignore",
            "config/config.toml",
            "src/main.rs",
            "src/config.rs",
            "src/logging.rs",
            "src/error.rs",
            "src/middleware.rs",
            "src/record.rs",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn config_file_carries_token_and_port_placeholders() {
        let s = web_service_skeleton();
        let config = s.files().find(|f| f.path == "config/config.toml").unwrap();
        let SkeletonContent::Parameterized(text) = &config.content else {
            panic!("config file must be parameterized");
        };
        assert!(text.contains("port = {{SERVER_PORT}}"));
        assert!(text.contains("mode = \"{{SERVER_MODE}}\""));
        assert!(text.contains("token = \"{{SECRET_TOKEN}}\""));
    }

    #[test]
    fn config_file_covers_full_key_layout() {
        let s = web_service_skeleton();
        let config = s.files().find(|f| f.path == "config/config.toml").unwrap();
        let SkeletonContent::Parameterized(text) = &config.content else {
            panic!("config file must be parameterized");
        };
        for key in ["[server]", "mode =", "[secret]", "[db]", "user =", "password =", "host =", "name ="] {
            assert!(text.contains(key), "missing {key}");
        }
    }

    #[test]
    fn gitignore_excludes_config_and_compose_files() {
        let s = web_service_skeleton();
        let ignore = s.files().find(|f| f.path == ".gitignore").unwrap();
        let SkeletonContent::Literal(text) = &ignore.content else {
            panic!(".gitignore must be literal");
        };
        assert!(text.contains("config/config.toml"));
        assert!(text.contains("docker-compose"));
        assert!(text.contains("/target"));
    }

    #[test]
    fn error_template_lists_full_taxonomy() {
        let s = web_service_skeleton();
        let error = s.files().find(|f| f.path == "src/error.rs").unwrap();
        let SkeletonContent::Literal(text) = &error.content else {
            panic!("src/error.rs must be literal");
        };
        for variant in [
            "BadRequest",
            "Unauthorized",
            "NotFound",
            "NotAcceptable",
            "Internal",
        ] {
            assert!(text.contains(variant), "missing {variant}");
        }
    }
}
