// ============================================================================
// ROBOT MANAGER - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Llamadas tipadas al servicio robot-manager. Sin lógica de negocio:
// cada función hace un request, valida el sobre y devuelve los registros.
// ============================================================================

use gloo_net::http::Request;

use crate::models::{ReadyTray, RecordsResponse, StatusResponse, Task, Tray, ValidateResponse};
use crate::services::ROBOT_MANAGER_URL;

pub const TASK_STATUS_IN_PROGRESS: &str = "in progress";
pub const TASK_STATUS_PENDING: &str = "pending";
pub const TRAY_STATUS_ACTIVE: &str = "active";

/// Login contra `GET /user/validate`
pub async fn validate_user(user_phone: &str, password: &str) -> Result<ValidateResponse, String> {
    let url = format!(
        "{}/user/validate?user_phone={}&password={}",
        ROBOT_MANAGER_URL,
        encode_query_value(user_phone),
        encode_query_value(password)
    );

    log::info!("🔐 Validando usuario {}", user_phone);

    let response = Request::get(&url)
        .header("accept", "application/json")
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

    response
        .json::<ValidateResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Bandejas filtradas por estado, ordenadas por identificador
pub async fn fetch_trays(token: &str, tray_status: &str) -> Result<Vec<Tray>, String> {
    let url = format!(
        "{}/robotmanager/trays?tray_status={}&order_by_field=tray_id&order_by_type=ASC",
        ROBOT_MANAGER_URL,
        encode_query_value(tray_status)
    );

    let envelope: RecordsResponse<Tray> = get_records(&url, token).await?;
    Ok(envelope.records)
}

/// Tareas de una bandeja filtradas por estado, ascendente por actualización
pub async fn fetch_tasks(
    token: &str,
    tray_id: &str,
    task_status: &str,
) -> Result<Vec<Task>, String> {
    let url = format!(
        "{}/robotmanager/task?tray_id={}&task_status={}&order_by_field=updated_at&order_by_type=ASC",
        ROBOT_MANAGER_URL,
        encode_query_value(tray_id),
        encode_query_value(task_status)
    );

    let envelope: RecordsResponse<Task> = get_records(&url, token).await?;
    Ok(envelope.records)
}

/// Bandejas listas en estación. Con `tray_id` consulta una sola bandeja;
/// sin él devuelve el snapshot completo que pinta la vista de estaciones.
pub async fn is_tray_ready(token: &str, tray_id: Option<&str>) -> Result<Vec<ReadyTray>, String> {
    let url = match tray_id {
        Some(tray_id) => format!(
            "{}/robotmanager/is_tray_ready?tray_id={}",
            ROBOT_MANAGER_URL,
            encode_query_value(tray_id)
        ),
        None => format!("{}/robotmanager/is_tray_ready", ROBOT_MANAGER_URL),
    };

    let envelope: RecordsResponse<ReadyTray> = get_records(&url, token).await?;
    Ok(envelope.records)
}

/// Comando de retrieve con etiquetas requeridas repetibles
pub async fn retrieve_tray(
    token: &str,
    tray_id: &str,
    required_tags: &[String],
) -> Result<StatusResponse, String> {
    let url = format!(
        "{}/robotmanager/retrieve_tray?tray_id={}&{}",
        ROBOT_MANAGER_URL,
        encode_query_value(tray_id),
        repeat_query("required_tags", required_tags)
    );

    log::info!("📤 Retrieve de la bandeja {} ({:?})", tray_id, required_tags);

    let response = Request::post(&url)
        .header("accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
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

    response
        .json::<StatusResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Comando de release con las etiquetas de la bandeja
pub async fn release_tray(
    token: &str,
    tray_id: &str,
    tags: &[String],
) -> Result<StatusResponse, String> {
    let url = format!(
        "{}/robotmanager/release_tray?tray_id={}&{}",
        ROBOT_MANAGER_URL,
        encode_query_value(tray_id),
        repeat_query("tags", tags)
    );

    log::info!("📤 Release de la bandeja {} ({:?})", tray_id, tags);

    let response = Request::patch(&url)
        .header("accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
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

    response
        .json::<StatusResponse>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// GET autenticado que valida el sobre `{status, records}`
async fn get_records<T: serde::de::DeserializeOwned>(
    url: &str,
    token: &str,
) -> Result<RecordsResponse<T>, String> {
    let response = Request::get(url)
        .header("accept", "application/json")
        .header("Authorization", &format!("Bearer {}", token))
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
        .json::<RecordsResponse<T>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    if !envelope.is_success() {
        return Err(format!("Robot manager devolvió {}", envelope.status));
    }

    Ok(envelope)
}

/// Serializa un parámetro repetible (?tags=a&tags=b) como espera el robot-manager
pub(crate) fn repeat_query(key: &str, values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("{}={}", key, encode_query_value(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Los estados de tarea viajan con espacios ("in progress")
pub(crate) fn encode_query_value(value: &str) -> String {
    value.replace(' ', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_query_joins_each_value() {
        let tags = vec!["station".to_string(), "scara".to_string()];
        assert_eq!(repeat_query("tags", &tags), "tags=station&tags=scara");
    }

    #[test]
    fn repeat_query_handles_a_single_tag() {
        let tags = vec!["amr".to_string()];
        assert_eq!(repeat_query("required_tags", &tags), "required_tags=amr");
    }

    #[test]
    fn query_values_escape_spaces() {
        assert_eq!(encode_query_value(TASK_STATUS_IN_PROGRESS), "in%20progress");
        assert_eq!(encode_query_value(TASK_STATUS_PENDING), "pending");
    }
}
