use serde::{Deserialize, Serialize};

/// Bandeja de almacenamiento tal como la devuelve el robot-manager.
/// El cliente solo la lee; los cambios de estado se hacen con comandos y re-poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tray {
    pub id: i64,
    pub tray_id: String,
    pub tray_status: String,
    pub tray_height: f64,
    pub tray_weight: f64,
    pub tray_divider: i64,
}

/// Tarea asociada a una bandeja (consultada por las guardias del secuenciador)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub tray_id: String,
    pub task_status: String,
    #[serde(default)]
    pub task_type: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Bandeja presente en una estación física, lista para liberar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadyTray {
    pub id: i64,
    pub tray_id: String,
    pub station_name: String,
    pub tags: Vec<String>,
    pub task_status: String,
    pub station_slot_id: String,
}

impl ReadyTray {
    /// Una bandeja destinada al SCARA lleva una etiqueta "scara"
    /// (sin distinguir mayúsculas de minúsculas)
    pub fn has_scara_tag(&self) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.to_ascii_lowercase().contains("scara"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_tray(tags: &[&str]) -> ReadyTray {
        ReadyTray {
            id: 1,
            tray_id: "TRAY010".to_string(),
            station_name: "ST-A".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            task_status: "completed".to_string(),
            station_slot_id: "A-3".to_string(),
        }
    }

    #[test]
    fn scara_tag_is_case_insensitive() {
        assert!(ready_tray(&["station", "scara"]).has_scara_tag());
        assert!(ready_tray(&["station", "SCARA"]).has_scara_tag());
        assert!(ready_tray(&["station", "Scara"]).has_scara_tag());
    }

    #[test]
    fn non_scara_tags_do_not_match() {
        assert!(!ready_tray(&["station", "amr"]).has_scara_tag());
        assert!(!ready_tray(&[]).has_scara_tag());
    }

    #[test]
    fn tray_parses_from_robot_manager_record() {
        let json = r#"{
            "id": 7,
            "tray_id": "TRAY007",
            "tray_status": "active",
            "tray_height": 120.0,
            "tray_weight": 3.5,
            "tray_divider": 4
        }"#;

        let tray: Tray = serde_json::from_str(json).expect("tray record");
        assert_eq!(tray.tray_id, "TRAY007");
        assert_eq!(tray.tray_status, "active");
        assert_eq!(tray.tray_divider, 4);
    }
}
