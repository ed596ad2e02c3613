//! The per-user Solana CLI config: its template text, its file name, and a
//! typed view for reading generated files back.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tera::Context;

use crate::error::{EmitError, TemplateError};
use crate::template::Template;

/// Template variable holding the user id.
pub const UID_KEY: &str = "uid";

/// RPC endpoint every user config points at.
pub const DEVNET_RPC_URL: &str = "https://api.devnet.solana.com";

/// Directory holding the per-user keypair files.
pub const KEYPAIR_DIR: &str = "/Users/mfrager/Build/solana/aqua-dex/js/users";

/// Address of the system program, labelled in every config.
pub const SYSTEM_PROGRAM_ID: &str = "11111111111111111111111111111111";

/// Source text of the per-user config.
pub const USER_TEMPLATE_TEXT: &str = r#"---
json_rpc_url: "https://api.devnet.solana.com"
websocket_url: ""
keypair_path: /Users/mfrager/Build/solana/aqua-dex/js/users/{{ uid }}.json
address_labels:
  "11111111111111111111111111111111": System Program
commitment: confirmed
"#;

static USER_TEMPLATE: OnceLock<Template> = OnceLock::new();

/// The user config template, compiled on first use.
///
/// # Errors
///
/// Returns the compile error if [`USER_TEMPLATE_TEXT`] is malformed.
pub fn user_template() -> Result<&'static Template, TemplateError> {
    if let Some(tmpl) = USER_TEMPLATE.get() {
        return Ok(tmpl);
    }
    let tmpl = Template::parse(USER_TEMPLATE_TEXT)?;
    Ok(USER_TEMPLATE.get_or_init(|| tmpl))
}

/// Render the config document for `uid`.
///
/// # Errors
///
/// Returns [`EmitError::Template`] if the template cannot be rendered.
pub fn render_user_config(uid: u32) -> Result<String, EmitError> {
    let mut context = Context::new();
    context.insert(UID_KEY, &uid);
    Ok(user_template()?.render(&context)?)
}

/// File name of the config for `uid`: `user_<uid>.yml`.
#[must_use]
pub fn config_file_name(uid: u32) -> String {
    format!("user_{uid}.yml")
}

/// Typed shape of a generated config document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserConfig {
    pub json_rpc_url: String,
    pub websocket_url: String,
    pub keypair_path: String,
    pub address_labels: BTreeMap<String, String>,
    pub commitment: String,
}

impl UserConfig {
    /// The config the template produces for `uid`.
    #[must_use]
    pub fn for_user(uid: u32) -> Self {
        let mut address_labels = BTreeMap::new();
        address_labels.insert(SYSTEM_PROGRAM_ID.to_string(), "System Program".to_string());
        Self {
            json_rpc_url: DEVNET_RPC_URL.to_string(),
            websocket_url: String::new(),
            keypair_path: format!("{KEYPAIR_DIR}/{uid}.json"),
            address_labels,
            commitment: "confirmed".to_string(),
        }
    }

    /// Parse a config document.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if `text` is not a well-formed config.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
