pub mod pubsub;
pub mod robot_manager;
pub mod scara_dispatch;
pub mod tray_request;

pub use scara_dispatch::dispatch_new_scara_trays;
pub use tray_request::{request_tray, TrayRequestOutcome};

/// URL base del robot-manager
/// Configurada en tiempo de compilación:
/// - Demo: https://robotmanagerv1test.qikpod.com (por defecto)
/// - Otros entornos: via ROBOT_MANAGER_URL en .env
pub const ROBOT_MANAGER_URL: &str = match option_env!("ROBOT_MANAGER_URL") {
    Some(url) => url,
    None => "https://robotmanagerv1test.qikpod.com",
};

/// URL base del broker pub/sub
pub const PUBSUB_URL: &str = match option_env!("PUBSUB_URL") {
    Some(url) => url,
    None => "https://imseventv1test.qikpod.com",
};

/// Credencial fija del broker pub/sub (demo de exhibición)
pub const PUBSUB_TOKEN: &str = match option_env!("PUBSUB_TOKEN") {
    Some(token) => token,
    None => "ims-event-demo",
};
