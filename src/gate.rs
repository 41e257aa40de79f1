use anyhow::anyhow;
use stripe::{CheckoutSession, CheckoutSessionId, CheckoutSessionPaymentStatus, Client};
use tracing::{info, warn};

use crate::config::AppConfig;

/// Sentinel session id accepted as paid with zero provider calls, so the
/// full flow stays testable before payments are wired up.
pub const DEMO_SESSION_ID: &str = "demo";

/// Single capability check shared by the success endpoint and the generate
/// endpoint. The variant is picked once at construction: either a live
/// Stripe lookup or the demo stub, never a conditional inside handlers.
pub enum PaymentGate {
    Live(Client),
    Demo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentVerdict {
    Paid { session_id: String },
    Unpaid,
}

impl PaymentGate {
    pub fn from_config(config: &AppConfig) -> Result<Self, anyhow::Error> {
        if config.demo_mode {
            return Ok(PaymentGate::Demo);
        }
        let secret_key = config
            .stripe_secret_key
            .as_ref()
            .ok_or_else(|| anyhow!("STRIPE_SECRET_KEY not found"))?;
        Ok(PaymentGate::Live(Client::new(secret_key.clone())))
    }

    /// Re-verifies on every call; a paid verdict is authoritative only for
    /// the request that asked.
    pub async fn verify(&self, session_id: &str) -> PaymentVerdict {
        if session_id == DEMO_SESSION_ID {
            info!("Accepting demo sentinel session");
            return PaymentVerdict::Paid {
                session_id: session_id.to_string(),
            };
        }

        match self {
            PaymentGate::Demo => PaymentVerdict::Paid {
                session_id: session_id.to_string(),
            },
            PaymentGate::Live(client) => {
                let id = match session_id.parse::<CheckoutSessionId>() {
                    Ok(id) => id,
                    Err(e) => {
                        warn!("Rejecting malformed checkout session id: {}", e);
                        return PaymentVerdict::Unpaid;
                    }
                };

                match CheckoutSession::retrieve(client, &id, &[]).await {
                    Ok(session) => {
                        if matches!(session.payment_status, CheckoutSessionPaymentStatus::Paid) {
                            PaymentVerdict::Paid {
                                session_id: session.id.to_string(),
                            }
                        } else {
                            warn!("Checkout session {} is not paid", session.id);
                            PaymentVerdict::Unpaid
                        }
                    }
                    Err(e) => {
                        // Provider failures must never read as paid.
                        warn!("Failed to retrieve checkout session: {:?}", e);
                        PaymentVerdict::Unpaid
                    }
                }
            }
        }
    }
}
