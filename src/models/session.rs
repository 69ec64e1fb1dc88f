use serde::{Deserialize, Serialize};

/// Sesión autenticada: token bearer más la identidad del operador.
/// Se persiste en tres entradas de localStorage y se limpia junta en el logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user_name: String,
    pub user_id: i64,
}
