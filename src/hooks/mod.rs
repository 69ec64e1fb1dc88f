pub mod use_auth;
pub mod use_device_status;
pub mod use_ready_trays;

pub use use_auth::{use_auth_context, AuthProvider, AuthState, UseAuthHandle};
pub use use_device_status::use_device_status;
pub use use_ready_trays::{use_ready_trays, UseReadyTraysHandle};
