use std::collections::HashMap;

use actix_web::HttpRequest;
use anyhow::{anyhow, bail};

/// Which of the two configured price tiers checkout should sell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivePrice {
    Tier29,
    Tier49,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub demo_mode: bool,
    pub stripe_secret_key: Option<String>,
    pub stripe_webhook_secret: Option<String>,
    pub stripe_price_id_49: Option<String>,
    pub stripe_price_id_29: Option<String>,
    pub stripe_active_price: ActivePrice,
    pub app_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub leads_sheet_id: Option<String>,
    pub leads_apps_script_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_map(&std::env::vars().collect())
    }

    /// Build and validate configuration from a plain name/value mapping.
    /// Handlers never read process state; tests pass a fixture map here.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, anyhow::Error> {
        let demo_mode = match vars.get("DEMO_MODE").map(String::as_str) {
            None | Some("false") => false,
            Some("true") => true,
            Some(other) => bail!("DEMO_MODE must be \"true\" or \"false\", got {:?}", other),
        };

        let stripe_active_price = match vars.get("STRIPE_ACTIVE_PRICE").map(String::as_str) {
            None | Some("29") => ActivePrice::Tier29,
            Some("49") => ActivePrice::Tier49,
            Some(other) => bail!(
                "STRIPE_ACTIVE_PRICE must be \"49\" or \"29\", got {:?}",
                other
            ),
        };

        let app_url = match non_empty(vars, "APP_URL")? {
            Some(raw) => {
                let url = reqwest::Url::parse(&raw)
                    .map_err(|e| anyhow!("APP_URL is not a valid URL: {}", e))?;
                if !matches!(url.scheme(), "http" | "https") {
                    bail!("APP_URL must be an http(s) URL");
                }
                Some(raw.trim_end_matches('/').to_string())
            }
            None => None,
        };

        // An empty OPENAI_API_KEY is treated as absent rather than rejected;
        // generation falls back to demo content or a config error per mode.
        let openai_api_key = vars
            .get("OPENAI_API_KEY")
            .filter(|value| !value.is_empty())
            .cloned();

        let config = AppConfig {
            demo_mode,
            stripe_secret_key: non_empty(vars, "STRIPE_SECRET_KEY")?,
            stripe_webhook_secret: non_empty(vars, "STRIPE_WEBHOOK_SECRET")?,
            stripe_price_id_49: non_empty(vars, "STRIPE_PRICE_ID_49")?,
            stripe_price_id_29: non_empty(vars, "STRIPE_PRICE_ID_29")?,
            stripe_active_price,
            app_url,
            openai_api_key,
            leads_sheet_id: non_empty(vars, "LEADS_SHEET_ID")?,
            leads_apps_script_url: non_empty(vars, "LEADS_APPS_SCRIPT_URL")?,
        };

        // Outside demo mode the payment path must be fully configured.
        if !config.demo_mode {
            if config.stripe_secret_key.is_none() {
                bail!("STRIPE_SECRET_KEY not found");
            }
            if config.active_price_id().is_none() {
                match config.stripe_active_price {
                    ActivePrice::Tier29 => bail!("STRIPE_PRICE_ID_29 not found"),
                    ActivePrice::Tier49 => bail!("STRIPE_PRICE_ID_49 not found"),
                }
            }
        }

        Ok(config)
    }

    /// Resolve the active-price selector to the configured price id.
    pub fn active_price_id(&self) -> Option<&str> {
        match self.stripe_active_price {
            ActivePrice::Tier29 => self.stripe_price_id_29.as_deref(),
            ActivePrice::Tier49 => self.stripe_price_id_49.as_deref(),
        }
    }
}

fn non_empty(vars: &HashMap<String, String>, name: &str) -> Result<Option<String>, anyhow::Error> {
    match vars.get(name) {
        None => Ok(None),
        Some(value) if value.is_empty() => Err(anyhow!("{} must not be empty", name)),
        Some(value) => Ok(Some(value.clone())),
    }
}

/// Externally-visible base URL for redirect targets: explicit APP_URL wins,
/// then the request's Origin header, then the forwarded proto/host pair.
pub fn resolve_base_url(config: &AppConfig, req: &HttpRequest) -> Option<String> {
    if let Some(app_url) = &config.app_url {
        return Some(app_url.clone());
    }

    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    if let Some(origin) = header("origin").filter(|origin| origin != "null") {
        return Some(origin.trim_end_matches('/').to_string());
    }

    match (header("x-forwarded-proto"), header("x-forwarded-host")) {
        (Some(proto), Some(host)) => {
            // Proxies may append hops as a comma-separated list.
            let proto = proto.split(',').next().unwrap_or_default().trim();
            let host = host.split(',').next().unwrap_or_default().trim();
            if proto.is_empty() || host.is_empty() {
                return None;
            }
            Some(format!("{}://{}", proto, host))
        }
        _ => None,
    }
}
