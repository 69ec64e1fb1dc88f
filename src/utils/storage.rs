use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::models::SessionData;
use crate::utils::constants::{STORAGE_KEY_AUTH_TOKEN, STORAGE_KEY_USER_ID, STORAGE_KEY_USER_NAME};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

/// Persiste las tres entradas de la sesión
pub fn save_session(session: &SessionData) {
    let _ = save_to_storage(STORAGE_KEY_AUTH_TOKEN, &session.token);
    let _ = save_to_storage(STORAGE_KEY_USER_NAME, &session.user_name);
    let _ = save_to_storage(STORAGE_KEY_USER_ID, &session.user_id);
}

/// Rehidrata la sesión guardada. Sin token no hay sesión;
/// nombre e id pueden faltar sin invalidarla.
pub fn load_session() -> Option<SessionData> {
    let token: String = load_from_storage(STORAGE_KEY_AUTH_TOKEN)?;
    let user_name: String = load_from_storage(STORAGE_KEY_USER_NAME).unwrap_or_default();
    let user_id: i64 = load_from_storage(STORAGE_KEY_USER_ID).unwrap_or_default();

    Some(SessionData {
        token,
        user_name,
        user_id,
    })
}

/// Limpia las tres entradas de la sesión
pub fn clear_session() {
    let _ = remove_from_storage(STORAGE_KEY_AUTH_TOKEN);
    let _ = remove_from_storage(STORAGE_KEY_USER_NAME);
    let _ = remove_from_storage(STORAGE_KEY_USER_ID);
}
