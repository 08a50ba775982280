//! Render context: the variable map applied to parameterized skeleton files.
//!
//! ## Built-in Variables
//!
//! | Variable | Example | Source |
//! |----------|---------|--------|
//! | `PROJECT_NAME` | "billing service" | User input |
//! | `PROJECT_NAME_SNAKE` | "billing_service" | Computed |
//! | `PROJECT_NAME_KEBAB` | "billing-service" | Computed |
//! | `PROJECT_NAME_PASCAL` | "BillingService" | Computed |
//! | `SERVER_PORT` | "8888" | Default, `--port` override |
//! | `SERVER_MODE` | "debug" | Default, tool config override |
//! | `SECRET_TOKEN` | 64 hex chars | Freshly generated per scaffold |
//!
//! All built-ins are `SCREAMING_SNAKE_CASE` to avoid collision with any
//! user-defined variables.

use std::collections::HashMap;

use uuid::Uuid;

/// Default listen port baked into generated configuration files.
pub const DEFAULT_SERVER_PORT: u16 = 8888;

/// Default run mode baked into generated configuration files.
pub const DEFAULT_SERVER_MODE: &str = "debug";

/// Context for skeleton rendering.
///
/// Immutable after creation - transformations create new instances (see
/// [`Self::with_variable`]).
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Original project name as provided by the user.
    /// Kept separate from variables for debugging and display purposes.
    project_name: String,

    /// Variable map for substitution.
    variables: HashMap<String, String>,
}

impl RenderContext {
    /// Create a new render context with automatic variable derivation.
    ///
    /// The project name is transformed into casing variants covering common
    /// conventions (snake for module paths, kebab for package names, Pascal
    /// for type names), and a fresh secret token is generated.
    pub fn new(project_name: impl Into<String>) -> Self {
        let name = project_name.into();
        let mut vars = HashMap::new();

        // Standard variables - the contract between websmith and skeletons.
        vars.insert("PROJECT_NAME".to_string(), name.clone());
        vars.insert("PROJECT_NAME_SNAKE".to_string(), to_snake_case(&name));
        vars.insert("PROJECT_NAME_KEBAB".to_string(), to_kebab_case(&name));
        vars.insert("PROJECT_NAME_PASCAL".to_string(), to_pascal_case(&name));
        vars.insert("SERVER_PORT".to_string(), DEFAULT_SERVER_PORT.to_string());
        vars.insert("SERVER_MODE".to_string(), DEFAULT_SERVER_MODE.to_string());
        vars.insert("SECRET_TOKEN".to_string(), fresh_secret_token());

        Self {
            project_name: name,
            variables: vars,
        }
    }

    /// Add or override a variable, consuming self and returning a new context.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Override the server port variable.
    pub fn with_port(self, port: u16) -> Self {
        self.with_variable("SERVER_PORT", port.to_string())
    }

    /// Override the run mode variable.
    pub fn with_mode(self, mode: impl Into<String>) -> Self {
        self.with_variable("SERVER_MODE", mode)
    }

    /// The original, untransformed project name.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Get a variable value if it exists.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|s| s.as_str())
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Simple linear scan and replace; adequate for skeleton file sizes.
    /// Unknown placeholders remain as literal text.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

/// Generate a 64-character lowercase hexadecimal secret token.
///
/// Two v4 UUIDs in `simple` form give 2 x 32 hex characters. Not a
/// cryptographic API: generated services are expected to rotate the token
/// before production use.
pub fn fresh_secret_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

// ============================================================================
// String Case Conversion Helpers
// ============================================================================

fn to_snake_case(s: &str) -> String {
    split_words(s).join("_")
}

fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into lowercase words based on casing and separators.
///
/// Boundaries: explicit separators (`_`, `-`, whitespace), camelCase
/// transitions (`aB`), and acronym ends (`HTTPRequest` splits between `P`
/// and `R`).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || (chars[i - 1].is_uppercase() && next_lower) {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
