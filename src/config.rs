use dioxus::prelude::*;
use serde::Deserialize;

pub const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_WHATSAPP_NUMBER: &str = "2349152660114";
pub const DEFAULT_WHATSAPP_MESSAGE: &str = "Hello BanjoTech! I'm interested in your services.";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    #[serde(alias = "emailjsServiceId")]
    pub emailjs_service_id: String,
    #[serde(alias = "emailjsTemplateId")]
    pub emailjs_template_id: String,
    #[serde(alias = "emailjsPublicKey")]
    pub emailjs_public_key: String,
    #[serde(alias = "emailjsEndpoint")]
    pub emailjs_endpoint: String,
    #[serde(alias = "whatsappNumber")]
    pub whatsapp_number: String,
    #[serde(alias = "whatsappMessage")]
    pub whatsapp_message: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            emailjs_service_id: String::new(),
            emailjs_template_id: String::new(),
            emailjs_public_key: String::new(),
            emailjs_endpoint: DEFAULT_EMAILJS_ENDPOINT.to_string(),
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            whatsapp_message: DEFAULT_WHATSAPP_MESSAGE.to_string(),
        }
    }
}

impl RuntimeConfig {
    pub fn email_configured(&self) -> bool {
        [
            &self.emailjs_service_id,
            &self.emailjs_template_id,
            &self.emailjs_public_key,
        ]
        .iter()
        .all(|value| !value.trim().is_empty())
    }
}

pub fn use_runtime_config() -> Resource<Result<RuntimeConfig, String>> {
    use_resource(|| async move {
        let config = fetch_runtime_config().await?;
        if !config.email_configured() {
            tracing::warn!("config: EmailJS identifiers missing, contact form will not deliver");
        }
        Ok(config)
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    match fetch_config_from("/config.json").await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from("/assets/config.json").await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(path: &str) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: status {}", response.status()));
    }
    response
        .json::<RuntimeConfig>()
        .await
        .map_err(|err| format!("config decode failed: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Result<RuntimeConfig, String> {
    Ok(config_from_env(|key| std::env::var(key).ok()))
}

#[cfg(not(target_arch = "wasm32"))]
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> RuntimeConfig {
    let defaults = RuntimeConfig::default();
    let read = |key: &str, fallback: String| lookup(key).unwrap_or(fallback);
    RuntimeConfig {
        emailjs_service_id: read("EMAILJS_SERVICE_ID", defaults.emailjs_service_id),
        emailjs_template_id: read("EMAILJS_TEMPLATE_ID", defaults.emailjs_template_id),
        emailjs_public_key: read("EMAILJS_PUBLIC_KEY", defaults.emailjs_public_key),
        emailjs_endpoint: read("EMAILJS_ENDPOINT", defaults.emailjs_endpoint),
        whatsapp_number: read("WHATSAPP_NUMBER", defaults.whatsapp_number),
        whatsapp_message: read("WHATSAPP_MESSAGE", defaults.whatsapp_message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{"emailjsServiceId":"svc","emailjs_template_id":"tpl"}"#)
                .unwrap();
        assert_eq!(config.emailjs_service_id, "svc");
        assert_eq!(config.emailjs_template_id, "tpl");
        assert_eq!(config.emailjs_endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert_eq!(config.whatsapp_number, DEFAULT_WHATSAPP_NUMBER);
        assert!(!config.email_configured());
    }

    #[test]
    fn blank_identifier_is_not_configured() {
        let config = RuntimeConfig {
            emailjs_service_id: "svc".into(),
            emailjs_template_id: "tpl".into(),
            emailjs_public_key: "  ".into(),
            ..RuntimeConfig::default()
        };
        assert!(!config.email_configured());
    }

    #[test]
    fn env_overrides_defaults() {
        let config = config_from_env(|key| match key {
            "EMAILJS_SERVICE_ID" => Some("svc".to_string()),
            "EMAILJS_TEMPLATE_ID" => Some("tpl".to_string()),
            "EMAILJS_PUBLIC_KEY" => Some("key".to_string()),
            "WHATSAPP_NUMBER" => Some("15550001111".to_string()),
            _ => None,
        });
        assert!(config.email_configured());
        assert_eq!(config.whatsapp_number, "15550001111");
        assert_eq!(config.whatsapp_message, DEFAULT_WHATSAPP_MESSAGE);
    }
}
