use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Registro crudo del broker pub/sub
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PubSubRecord {
    pub topic: String,
    pub message: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Dispositivos que publican estado y aceptan comandos por pub/sub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Locker,
    Conveyor,
    BayDoor,
    Shuttle,
    Scara,
}

impl Device {
    pub const ALL: [Device; 5] = [
        Device::Locker,
        Device::Conveyor,
        Device::BayDoor,
        Device::Shuttle,
        Device::Scara,
    ];

    /// Topic del broker para este dispositivo
    pub fn topic(&self) -> &'static str {
        match self {
            Device::Locker => "Locker",
            Device::Conveyor => "Conveyor",
            Device::BayDoor => "Bay",
            Device::Shuttle => "Shuttle",
            Device::Scara => "Scara",
        }
    }

    /// El locker se lee una sola vez al abrir el panel; el resto se refresca en vivo
    pub fn live_monitor(&self) -> bool {
        !matches!(self, Device::Locker)
    }

    /// Acciones que expone el panel de control de cada dispositivo
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Device::Locker => &["open", "close"],
            Device::Conveyor => &["start", "stop"],
            Device::BayDoor => &["open", "close"],
            Device::Shuttle => &["raise", "lower"],
            Device::Scara => &["pick", "place"],
        }
    }

    /// Decodifica el `message` de un registro al payload del dispositivo
    pub fn decode_status(&self, record: &PubSubRecord) -> Result<DeviceStatus, String> {
        let message = record.message.clone();
        let decoded = match self {
            Device::Locker => serde_json::from_value(message).map(DeviceStatus::Locker),
            Device::Conveyor => serde_json::from_value(message).map(DeviceStatus::Conveyor),
            Device::BayDoor => serde_json::from_value(message).map(DeviceStatus::BayDoor),
            Device::Shuttle => serde_json::from_value(message).map(DeviceStatus::Shuttle),
            Device::Scara => serde_json::from_value(message).map(DeviceStatus::Scara),
        };
        decoded.map_err(|e| format!("Parse error: {}", e))
    }
}

/// Último estado conocido de un dispositivo, variante por tipo.
/// Se reemplaza entero en cada tick del poller; no se guarda historial.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceStatus {
    Locker(LockerStatus),
    Conveyor(ConveyorStatus),
    BayDoor(BayDoorStatus),
    Shuttle(ShuttleStatus),
    Scara(ScaraStatus),
}

impl DeviceStatus {
    pub fn action(&self) -> &str {
        match self {
            DeviceStatus::Locker(s) => &s.action,
            DeviceStatus::Conveyor(s) => &s.action,
            DeviceStatus::BayDoor(s) => &s.action,
            DeviceStatus::Shuttle(s) => &s.action,
            DeviceStatus::Scara(s) => &s.action,
        }
    }

    /// Detalle secundario del payload, si el dispositivo lo publica
    pub fn detail(&self) -> Option<String> {
        match self {
            DeviceStatus::Locker(s) => s.door_no.map(|d| format!("door {}", d)),
            DeviceStatus::Conveyor(s) => s.speed.map(|v| format!("{} m/s", v)),
            DeviceStatus::BayDoor(s) => s.position.clone(),
            DeviceStatus::Shuttle(s) => s.level.map(|l| format!("level {}", l)),
            DeviceStatus::Scara(s) => match (s.item_id, s.tray_id.as_deref()) {
                (Some(item), Some(tray)) => Some(format!("item {} / tray {}", item, tray)),
                (Some(item), None) => Some(format!("item {}", item)),
                (None, Some(tray)) => Some(format!("tray {}", tray)),
                (None, None) => None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LockerStatus {
    pub action: String,
    #[serde(default)]
    pub door_no: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConveyorStatus {
    pub action: String,
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BayDoorStatus {
    pub action: String,
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShuttleStatus {
    pub action: String,
    #[serde(default)]
    pub level: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScaraStatus {
    pub action: String,
    #[serde(default)]
    pub item_id: Option<i64>,
    #[serde(default)]
    pub tray_id: Option<String>,
}

/// Lectura mostrada en el panel: payload más la marca de tiempo del registro
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceReading {
    pub status: DeviceStatus,
    pub created_at: Option<DateTime<Utc>>,
}

/// Sistemas robóticos del dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    Amr,
    Scara,
    BayDoor,
    ScissorLift,
    Locker,
    Conveyor,
}

impl System {
    pub const ALL: [System; 6] = [
        System::Amr,
        System::Scara,
        System::BayDoor,
        System::ScissorLift,
        System::Locker,
        System::Conveyor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            System::Amr => "AMR",
            System::Scara => "SCARA",
            System::BayDoor => "BAY DOOR",
            System::ScissorLift => "SCISSOR LIFT",
            System::Locker => "LOCKER",
            System::Conveyor => "CONVEYOR",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            System::Amr => "Autonomous Mobile Robots",
            System::Scara => "Selective Compliance Robot Arm",
            System::BayDoor => "Automated Bay Door Control",
            System::ScissorLift => "Vertical Material Handling",
            System::Locker => "Smart Storage Solutions",
            System::Conveyor => "Belt Conveyor System",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            System::Amr => "🤖",
            System::Scara => "🦾",
            System::BayDoor => "🚪",
            System::ScissorLift => "↕️",
            System::Locker => "🔒",
            System::Conveyor => "📦",
        }
    }

    /// Etiqueta con la que se enrutan retrieve/release hacia la estación
    pub fn tag(&self) -> &'static str {
        match self {
            System::Amr => "amr",
            System::Scara => "scara",
            System::BayDoor => "bay-door",
            System::ScissorLift => "scissor-lift",
            System::Locker => "locker",
            System::Conveyor => "conveyor",
        }
    }

    /// Dispositivo pub/sub asociado, si el sistema publica telemetría.
    /// El AMR no publica; el scissor lift reporta por el shuttle.
    pub fn device(&self) -> Option<Device> {
        match self {
            System::Amr => None,
            System::Scara => Some(Device::Scara),
            System::BayDoor => Some(Device::BayDoor),
            System::ScissorLift => Some(Device::Shuttle),
            System::Locker => Some(Device::Locker),
            System::Conveyor => Some(Device::Conveyor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bay_door_publishes_on_the_bay_topic() {
        assert_eq!(Device::BayDoor.topic(), "Bay");
    }

    #[test]
    fn only_the_locker_skips_live_monitoring() {
        for device in Device::ALL {
            assert_eq!(device.live_monitor(), device != Device::Locker);
        }
    }

    #[test]
    fn decode_status_picks_the_device_variant() {
        let record = PubSubRecord {
            topic: "Bay".to_string(),
            message: serde_json::json!({"action": "open", "position": "upper"}),
            created_at: None,
        };

        let status = Device::BayDoor.decode_status(&record).expect("bay payload");
        assert_eq!(status.action(), "open");
        assert_eq!(status.detail().as_deref(), Some("upper"));
    }

    #[test]
    fn decode_status_rejects_payload_without_action() {
        let record = PubSubRecord {
            topic: "Conveyor".to_string(),
            message: serde_json::json!({"speed": 0.5}),
            created_at: None,
        };

        assert!(Device::Conveyor.decode_status(&record).is_err());
    }

    #[test]
    fn every_system_routes_to_its_device() {
        assert_eq!(System::Amr.device(), None);
        assert_eq!(System::ScissorLift.device(), Some(Device::Shuttle));
        assert_eq!(System::Scara.device(), Some(Device::Scara));
        assert_eq!(System::Scara.tag(), "scara");
    }
}
