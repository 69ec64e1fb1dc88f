// ============================================================================
// TRAY REQUEST - SECUENCIADOR DE SOLICITUD DE BANDEJA
// ============================================================================
// Flujo de cuatro pasos en orden estricto, con corto-circuito en la primera
// coincidencia:
//   1. ¿tarea en curso?  2. ¿tarea pendiente?  3. ¿ya lista en estación?
//   4. retrieve con etiquetas `station` + sistema destino
// Las guardias 1-3 son fail-open: un error de red no bloquea un retrieve
// que de otro modo sería válido. El paso 4 nunca se reintenta.
// ============================================================================

use std::future::Future;

use crate::models::System;
use crate::services::robot_manager::{
    self, TASK_STATUS_IN_PROGRESS, TASK_STATUS_PENDING,
};

/// Etiqueta requerida en todo retrieve, además de la del sistema destino
pub const REQUIRED_TAG_STATION: &str = "station";

/// Bandeja fija que usa la ruta directa del SCARA (demo de exhibición)
pub const SCARA_DEMO_TRAY_ID: &str = "TRAY001";

/// Resultado de una solicitud iniciada por el operador
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayRequestOutcome {
    /// La bandeja ya tiene una tarea en curso; no se emitió retrieve
    InProgress,
    /// La bandeja ya tiene una tarea pendiente; no se emitió retrieve
    Pending,
    /// La bandeja ya está lista en una estación; no se emitió retrieve
    AlreadyReady,
    /// Se emitió el comando de retrieve (exactamente uno)
    Requested,
}

impl TrayRequestOutcome {
    pub fn message(&self, tray_id: &str) -> String {
        match self {
            TrayRequestOutcome::InProgress => format!("Tray {} is already in progress", tray_id),
            TrayRequestOutcome::Pending => format!("Tray {} is already pending", tray_id),
            TrayRequestOutcome::AlreadyReady => {
                format!("Tray {} is already ready at a station", tray_id)
            }
            TrayRequestOutcome::Requested => format!("Retrieval requested for tray {}", tray_id),
        }
    }
}

/// Ejecuta el flujo completo para la bandeja seleccionada y el sistema destino.
/// El SCARA tiene una ruta paralela: sin guardias y con bandeja fija.
pub async fn request_tray(
    token: &str,
    tray_id: &str,
    system: System,
) -> Result<TrayRequestOutcome, String> {
    if system == System::Scara {
        log::info!("🦾 Ruta directa SCARA con la bandeja {}", SCARA_DEMO_TRAY_ID);
        return issue_retrieve(token, SCARA_DEMO_TRAY_ID, system).await;
    }

    let blocked = evaluate_guards(
        robot_manager::fetch_tasks(token, tray_id, TASK_STATUS_IN_PROGRESS),
        robot_manager::fetch_tasks(token, tray_id, TASK_STATUS_PENDING),
        robot_manager::is_tray_ready(token, Some(tray_id)),
    )
    .await;

    if let Some(outcome) = blocked {
        log::info!("⛔ Bandeja {} bloqueada: {:?}", tray_id, outcome);
        return Ok(outcome);
    }

    issue_retrieve(token, tray_id, system).await
}

/// Las tres guardias en orden estricto. Los futures son perezosos, así que
/// una coincidencia temprana evita por completo las consultas siguientes.
pub(crate) async fn evaluate_guards<FA, FB, FC, T, R>(
    in_progress: FA,
    pending: FB,
    ready: FC,
) -> Option<TrayRequestOutcome>
where
    FA: Future<Output = Result<Vec<T>, String>>,
    FB: Future<Output = Result<Vec<T>, String>>,
    FC: Future<Output = Result<Vec<R>, String>>,
{
    if classify_guard(in_progress.await) == GuardOutcome::Matched {
        return Some(TrayRequestOutcome::InProgress);
    }
    if classify_guard(pending.await) == GuardOutcome::Matched {
        return Some(TrayRequestOutcome::Pending);
    }
    if classify_guard(ready.await) == GuardOutcome::Matched {
        return Some(TrayRequestOutcome::AlreadyReady);
    }
    None
}

/// Clasificación de una comprobación de guardia.
/// Un error cuenta como "sin coincidencia" y la secuencia continúa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GuardOutcome {
    Matched,
    Clear,
}

pub(crate) fn classify_guard<T>(result: Result<Vec<T>, String>) -> GuardOutcome {
    match result {
        Ok(records) if !records.is_empty() => GuardOutcome::Matched,
        Ok(_) => GuardOutcome::Clear,
        Err(e) => {
            log::warn!("⚠️ Guardia fallida, se continúa con el siguiente paso: {}", e);
            GuardOutcome::Clear
        }
    }
}

/// Etiquetas del retrieve: siempre `station` más la del sistema destino
pub(crate) fn required_tags(system: System) -> Vec<String> {
    vec![REQUIRED_TAG_STATION.to_string(), system.tag().to_string()]
}

/// Un único retrieve, sin reintentos. Su fallo sí es terminal.
async fn issue_retrieve(
    token: &str,
    tray_id: &str,
    system: System,
) -> Result<TrayRequestOutcome, String> {
    let tags = required_tags(system);
    let response = robot_manager::retrieve_tray(token, tray_id, &tags).await?;

    if response.is_success() {
        log::info!("✅ Retrieve emitido para la bandeja {}", tray_id);
        Ok(TrayRequestOutcome::Requested)
    } else {
        Err(response
            .message
            .unwrap_or_else(|| format!("Robot manager devolvió {}", response.status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn records(n: usize) -> Result<Vec<u32>, String> {
        Ok((0..n as u32).collect())
    }

    #[test]
    fn empty_records_leave_the_guard_clear() {
        assert_eq!(classify_guard(records(0)), GuardOutcome::Clear);
    }

    #[test]
    fn any_record_matches_the_guard() {
        assert_eq!(classify_guard(records(1)), GuardOutcome::Matched);
        assert_eq!(classify_guard(records(3)), GuardOutcome::Matched);
    }

    #[test]
    fn guard_errors_fail_open() {
        let failed: Result<Vec<u32>, String> = Err("network down".to_string());
        assert_eq!(classify_guard(failed), GuardOutcome::Clear);
    }

    #[test]
    fn in_progress_blocks_without_touching_later_guards() {
        let touched = Cell::new(false);

        let outcome = block_on(evaluate_guards(
            async { records(1) },
            async {
                touched.set(true);
                records(0)
            },
            async {
                touched.set(true);
                records(0)
            },
        ));

        assert_eq!(outcome, Some(TrayRequestOutcome::InProgress));
        assert!(!touched.get(), "later guards must not run after a match");
    }

    #[test]
    fn pending_blocks_when_in_progress_is_clear() {
        let outcome = block_on(evaluate_guards(
            async { records(0) },
            async { records(2) },
            async { records(0) },
        ));

        assert_eq!(outcome, Some(TrayRequestOutcome::Pending));
    }

    #[test]
    fn ready_blocks_when_tasks_are_clear() {
        let outcome = block_on(evaluate_guards(
            async { records(0) },
            async { records(0) },
            async { records(1) },
        ));

        assert_eq!(outcome, Some(TrayRequestOutcome::AlreadyReady));
    }

    #[test]
    fn all_clear_allows_the_retrieve() {
        let outcome = block_on(evaluate_guards(
            async { records(0) },
            async { records(0) },
            async { records(0) },
        ));

        assert_eq!(outcome, None);
    }

    #[test]
    fn a_failed_guard_does_not_abort_the_sequence() {
        let outcome = block_on(evaluate_guards(
            async { Err::<Vec<u32>, _>("timeout".to_string()) },
            async { records(1) },
            async { records(0) },
        ));

        assert_eq!(outcome, Some(TrayRequestOutcome::Pending));
    }

    #[test]
    fn all_guards_failing_still_reaches_the_retrieve() {
        let outcome = block_on(evaluate_guards(
            async { Err::<Vec<u32>, _>("timeout".to_string()) },
            async { Err::<Vec<u32>, _>("timeout".to_string()) },
            async { Err::<Vec<u32>, _>("timeout".to_string()) },
        ));

        assert_eq!(outcome, None);
    }

    #[test]
    fn retrieve_tags_carry_station_and_system() {
        let tags = required_tags(System::Amr);
        assert_eq!(tags, vec!["station".to_string(), "amr".to_string()]);

        let tags = required_tags(System::BayDoor);
        assert!(tags.contains(&"station".to_string()));
        assert!(tags.contains(&"bay-door".to_string()));
    }

    #[test]
    fn outcome_messages_name_the_tray() {
        assert_eq!(
            TrayRequestOutcome::InProgress.message("TRAY004"),
            "Tray TRAY004 is already in progress"
        );
        assert_eq!(
            TrayRequestOutcome::Requested.message("TRAY004"),
            "Retrieval requested for tray TRAY004"
        );
    }
}
