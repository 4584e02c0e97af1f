// Third-party integration settings
// Read once from the plain process environment (no prefix)

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

pub const DEFAULT_SITE_URL: &str = "https://www.aquatech-pumps.example";
pub const DEFAULT_CONTACT_TABLE: &str = "contact_messages";
pub const DEFAULT_CHATBOT_PROVIDER: &str = "openai";
pub const DEFAULT_CHATBOT_MODEL: &str = "gpt-4o-mini";

/// Raw view of the environment variables we care about.
/// `config::Environment` lowercases keys, so `SUPABASE_URL` lands in `supabase_url`.
#[derive(Debug, Deserialize)]
struct EnvSettings {
    #[serde(default)]
    supabase_url: String,
    #[serde(default)]
    supabase_anon_key: String,
    supabase_contact_table: String,
    chatbot_provider: String,
    chatbot_model: String,
    #[serde(default)]
    chatbot_api_key: Option<String>,
    site_url: String,
}

/// Supabase connection settings for the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub contact_table: String,
}

impl SupabaseConfig {
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }
}

/// Serialized for templates with the derived `is_configured` flag alongside
/// the stored fields.
impl Serialize for SupabaseConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SupabaseConfig", 4)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("anon_key", &self.anon_key)?;
        state.serialize_field("contact_table", &self.contact_table)?;
        state.serialize_field("is_configured", &self.is_configured())?;
        state.end()
    }
}

/// Chatbot provider settings. The API key itself is never kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatbotConfig {
    pub provider: String,
    pub model: String,
    pub has_api_key: bool,
}

/// Everything read from the un-prefixed environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integrations {
    pub site_url: String,
    pub supabase: SupabaseConfig,
    pub chatbot: ChatbotConfig,
}

impl Integrations {
    /// Read from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(None)
    }

    /// Read from an explicit variable map instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::from_source(Some(vars))
    }

    fn from_source(vars: Option<HashMap<String, String>>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::default().source(vars))
            .set_default("supabase_contact_table", DEFAULT_CONTACT_TABLE)?
            .set_default("chatbot_provider", DEFAULT_CHATBOT_PROVIDER)?
            .set_default("chatbot_model", DEFAULT_CHATBOT_MODEL)?
            .set_default("site_url", DEFAULT_SITE_URL)?
            .build()?;

        let env: EnvSettings = settings.try_deserialize()?;
        Ok(env.into())
    }
}

impl From<EnvSettings> for Integrations {
    fn from(env: EnvSettings) -> Self {
        let site_url = if env.site_url.trim().is_empty() {
            DEFAULT_SITE_URL.to_string()
        } else {
            env.site_url.trim().to_string()
        };

        Self {
            site_url,
            supabase: SupabaseConfig {
                url: env.supabase_url.trim().to_string(),
                anon_key: env.supabase_anon_key.trim().to_string(),
                contact_table: env.supabase_contact_table,
            },
            chatbot: ChatbotConfig {
                provider: env.chatbot_provider,
                model: env.chatbot_model,
                has_api_key: env
                    .chatbot_api_key
                    .is_some_and(|key| !key.trim().is_empty()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let integrations = Integrations::from_vars(HashMap::new()).unwrap();
        assert_eq!(integrations.site_url, DEFAULT_SITE_URL);
        assert_eq!(integrations.supabase.contact_table, "contact_messages");
        assert_eq!(integrations.chatbot.provider, "openai");
        assert_eq!(integrations.chatbot.model, "gpt-4o-mini");
        assert!(!integrations.chatbot.has_api_key);
        assert!(!integrations.supabase.is_configured());
    }

    #[test]
    fn test_reads_variables() {
        let integrations = Integrations::from_vars(vars(&[
            ("SUPABASE_URL", "https://db.example.com"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("SUPABASE_CONTACT_TABLE", "leads"),
            ("CHATBOT_MODEL", "small"),
            ("CHATBOT_API_KEY", "secret"),
            ("SITE_URL", "https://pumps.example.org/"),
        ]))
        .unwrap();

        assert!(integrations.supabase.is_configured());
        assert_eq!(integrations.supabase.contact_table, "leads");
        assert_eq!(integrations.chatbot.model, "small");
        assert!(integrations.chatbot.has_api_key);
        assert_eq!(integrations.site_url, "https://pumps.example.org/");
    }

    #[test]
    fn test_supabase_needs_both_url_and_key() {
        let integrations =
            Integrations::from_vars(vars(&[("SUPABASE_URL", "https://db.example.com")])).unwrap();
        assert!(!integrations.supabase.is_configured());
    }

    #[test]
    fn test_supabase_serializes_with_configured_flag() {
        let integrations = Integrations::from_vars(vars(&[
            ("SUPABASE_URL", "https://db.example.com"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        let value = serde_json::to_value(&integrations.supabase).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://db.example.com",
                "anon_key": "anon",
                "contact_table": "contact_messages",
                "is_configured": true,
            })
        );
    }
}
