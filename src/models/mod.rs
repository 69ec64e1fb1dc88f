pub mod api;
pub mod device;
pub mod session;
pub mod tray;

pub use api::{RecordsResponse, StatusResponse, SubscribeResponse, ValidateResponse};
pub use device::{Device, DeviceReading, DeviceStatus, PubSubRecord, System};
pub use session::SessionData;
pub use tray::{ReadyTray, Task, Tray};
