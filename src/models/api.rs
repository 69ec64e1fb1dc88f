use serde::Deserialize;

use super::device::PubSubRecord;

/// Respuesta de `GET /user/validate`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidateResponse {
    pub status: String,
    #[serde(default)]
    pub statusbool: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Sobre genérico del robot-manager: estado más una lista de registros.
/// `records` puede faltar en la respuesta (p. ej. `is_tray_ready` sin resultados).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct RecordsResponse<T> {
    pub status: String,
    #[serde(default)]
    pub records: Vec<T>,
}

impl<T> RecordsResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Sobre de las operaciones de comando (`retrieve_tray`, `release_tray`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl StatusResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Respuesta de `GET /pubsub/subscribe`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscribeResponse {
    #[serde(default)]
    pub records: Vec<PubSubRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadyTray;

    #[test]
    fn validate_response_parses_success_envelope() {
        let json = r#"{
            "status": "success",
            "statusbool": true,
            "token": "T",
            "user_name": "Admin",
            "user_id": 1
        }"#;

        let response: ValidateResponse = serde_json::from_str(json).expect("validate envelope");
        assert!(response.statusbool);
        assert_eq!(response.token.as_deref(), Some("T"));
        assert_eq!(response.user_name.as_deref(), Some("Admin"));
        assert_eq!(response.user_id, Some(1));
    }

    #[test]
    fn validate_response_parses_failure_without_token() {
        let json = r#"{"status": "failure", "statusbool": false, "message": "bad credentials"}"#;

        let response: ValidateResponse = serde_json::from_str(json).expect("failure envelope");
        assert!(!response.statusbool);
        assert_eq!(response.token, None);
        assert_eq!(response.message.as_deref(), Some("bad credentials"));
    }

    #[test]
    fn records_response_defaults_to_empty_when_absent() {
        let json = r#"{"status": "success"}"#;

        let response: RecordsResponse<ReadyTray> =
            serde_json::from_str(json).expect("envelope without records");
        assert!(response.is_success());
        assert!(response.records.is_empty());
    }

    #[test]
    fn records_response_parses_ready_trays() {
        let json = r#"{
            "status": "success",
            "records": [{
                "id": 3,
                "tray_id": "TRAY003",
                "station_name": "ST-B",
                "tags": ["station", "scara"],
                "task_status": "completed",
                "station_slot_id": "B-1"
            }]
        }"#;

        let response: RecordsResponse<ReadyTray> = serde_json::from_str(json).expect("ready trays");
        assert_eq!(response.records.len(), 1);
        assert_eq!(response.records[0].station_name, "ST-B");
        assert!(response.records[0].has_scara_tag());
    }

    #[test]
    fn status_response_success_check() {
        let ok: StatusResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        let bad: StatusResponse =
            serde_json::from_str(r#"{"status": "failure", "message": "no slot"}"#).unwrap();
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
