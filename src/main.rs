use actix_cors::Cors;
use actix_web::{get, web, App, HttpServer};
use async_openai::config::OpenAIConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod gate;
mod plan;
mod prompts;
mod routes;
mod types;
mod validate;
mod wizard;

use config::AppConfig;
use gate::PaymentGate;

pub struct AppState {
    pub config: AppConfig,
    pub gate: PaymentGate,
    pub stripe_client: Option<stripe::Client>,
    pub oai_client: Option<async_openai::Client<OpenAIConfig>>,
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, anyhow::Error> {
        let gate = PaymentGate::from_config(&config)?;
        let stripe_client = config
            .stripe_secret_key
            .as_ref()
            .map(|key| stripe::Client::new(key.clone()));
        let oai_client = config
            .openai_api_key
            .as_ref()
            .map(|key| {
                async_openai::Client::with_config(OpenAIConfig::new().with_api_key(key.clone()))
            });

        Ok(AppState {
            config,
            gate,
            stripe_client,
            oai_client,
            http_client: reqwest::Client::new(),
        })
    }
}

#[get("/")]
async fn index() -> &'static str {
    "launchpack is up"
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    if config.demo_mode {
        info!("Demo mode active: payment verification is bypassed");
    }
    let app_state = web::Data::new(AppState::new(config)?);

    info!("Starting launchpack on 0.0.0.0:8000");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            .service(index)
            .service(
                web::scope("/api")
                    .service(routes::pay::create_checkout_session)
                    .service(routes::pay::success)
                    .service(routes::generate::generate)
                    .service(routes::leads::leads)
                    .service(routes::wizard::wizard_plan),
            )
    })
    .bind(("0.0.0.0", 8000))?
    .run()
    .await?;

    Ok(())
}
