/// Claves de localStorage de la sesión. Se escriben juntas en el login
/// y se limpian juntas en el logout.
pub const STORAGE_KEY_AUTH_TOKEN: &str = "auth_token";
pub const STORAGE_KEY_USER_NAME: &str = "user_name";
pub const STORAGE_KEY_USER_ID: &str = "user_id";
