pub mod constants;
pub mod storage;

/// Aviso transitorio al operador (alert nativo del navegador)
pub fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}
