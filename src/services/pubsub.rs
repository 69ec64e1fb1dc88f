// ============================================================================
// PUBSUB - TELEMETRÍA Y COMANDOS DE DISPOSITIVOS
// ============================================================================
// Suscripción puntual (último registro de un topic) y publicación de
// comandos. El broker usa una credencial fija de demo.
// ============================================================================

use gloo_net::http::Request;

use crate::models::{PubSubRecord, SubscribeResponse};
use crate::services::{PUBSUB_TOKEN, PUBSUB_URL};

/// Último registro publicado en un topic, si existe
pub async fn subscribe_latest(topic: &str) -> Result<Option<PubSubRecord>, String> {
    let url = format!(
        "{}/pubsub/subscribe?topic={}&num_records=1",
        PUBSUB_URL, topic
    );

    let response = Request::get(&url)
        .header("accept", "application/json")
        .header("Authorization", &format!("Bearer {}", PUBSUB_TOKEN))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    let envelope = response
        .json::<SubscribeResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(envelope.records.into_iter().next())
}

/// Publica un mensaje `{action, ...}` en el topic de un dispositivo
pub async fn publish(topic: &str, message: &serde_json::Value) -> Result<(), String> {
    let url = format!("{}/pubsub/publish?topic={}", PUBSUB_URL, topic);

    log::info!("📡 Publicando en {}: {}", topic, message);

    let response = Request::post(&url)
        .header("accept", "application/json")
        .header("Authorization", &format!("Bearer {}", PUBSUB_TOKEN))
        .json(message)
        .map_err(|e| format!("Serialization error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "HTTP {}: {}",
            response.status(),
            response.status_text()
        ));
    }

    Ok(())
}
