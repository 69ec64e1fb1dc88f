// ============================================================================
// SCARA DISPATCH - ASIGNACIÓN DE ARTÍCULOS A BANDEJAS RECIÉN VISTAS
// ============================================================================
// Cada snapshot de bandejas listas se escanea buscando bandejas con etiqueta
// "scara" que no se hayan visto antes. Cada una recibe el siguiente artículo
// de un pool fijo en round-robin y dispara una única publicación.
// El registro de bandejas ya procesadas vive todo el proceso: una bandeja
// que siga apareciendo en polls posteriores no vuelve a disparar nada.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;

use crate::models::{Device, ReadyTray};
use crate::services::pubsub;

/// Pool fijo de identificadores de artículo que rota el SCARA
pub const SCARA_ITEM_POOL: [u32; 6] = [1, 2, 3, 4, 5, 6];

/// Asignador de artículos para bandejas SCARA
#[derive(Debug, Default)]
pub struct ScaraAssigner {
    handled: HashSet<String>,
    next_slot: usize,
}

impl ScaraAssigner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escanea un snapshot y devuelve las asignaciones nuevas `(tray_id, item_id)`.
    /// Las bandejas ya procesadas y las que no llevan etiqueta scara se ignoran.
    pub fn scan(&mut self, trays: &[ReadyTray]) -> Vec<(String, u32)> {
        let mut assignments = Vec::new();

        for tray in trays {
            if !tray.has_scara_tag() {
                continue;
            }
            if self.handled.contains(&tray.tray_id) {
                continue;
            }

            let item_id = SCARA_ITEM_POOL[self.next_slot % SCARA_ITEM_POOL.len()];
            self.next_slot += 1;
            self.handled.insert(tray.tray_id.clone());
            assignments.push((tray.tray_id.clone(), item_id));
        }

        assignments
    }
}

thread_local! {
    // Instancia única mientras viva el proceso
    static ASSIGNER: RefCell<ScaraAssigner> = RefCell::new(ScaraAssigner::new());
}

/// Procesa un snapshot con el asignador global y publica cada asignación nueva
pub fn dispatch_new_scara_trays(trays: &[ReadyTray]) {
    let assignments = ASSIGNER.with(|cell| cell.borrow_mut().scan(trays));

    for (tray_id, item_id) in assignments {
        log::info!("🦾 Asignando artículo {} a la bandeja SCARA {}", item_id, tray_id);

        let message = serde_json::json!({
            "action": "assign_item",
            "item_id": item_id,
            "tray_id": tray_id,
        });

        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = pubsub::publish(Device::Scara.topic(), &message).await {
                log::error!("❌ Error publicando la asignación SCARA: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scara_tray(tray_id: &str) -> ReadyTray {
        ReadyTray {
            id: 0,
            tray_id: tray_id.to_string(),
            station_name: "ST-S".to_string(),
            tags: vec!["station".to_string(), "scara".to_string()],
            task_status: "completed".to_string(),
            station_slot_id: "S-1".to_string(),
        }
    }

    fn plain_tray(tray_id: &str) -> ReadyTray {
        ReadyTray {
            tags: vec!["station".to_string(), "amr".to_string()],
            ..scara_tray(tray_id)
        }
    }

    #[test]
    fn first_seen_trays_take_consecutive_pool_items() {
        let mut assigner = ScaraAssigner::new();

        let snapshot: Vec<ReadyTray> = (0..3).map(|i| scara_tray(&format!("T{}", i))).collect();
        let assignments = assigner.scan(&snapshot);

        assert_eq!(
            assignments,
            vec![
                ("T0".to_string(), 1),
                ("T1".to_string(), 2),
                ("T2".to_string(), 3),
            ]
        );
    }

    #[test]
    fn the_pool_wraps_after_six_assignments() {
        let mut assigner = ScaraAssigner::new();

        let snapshot: Vec<ReadyTray> = (0..7).map(|i| scara_tray(&format!("T{}", i))).collect();
        let assignments = assigner.scan(&snapshot);

        assert_eq!(assignments.len(), 7);
        assert_eq!(assignments[5], ("T5".to_string(), 6));
        assert_eq!(assignments[6], ("T6".to_string(), 1));
    }

    #[test]
    fn a_tray_never_gets_a_second_assignment() {
        let mut assigner = ScaraAssigner::new();

        let first = assigner.scan(&[scara_tray("T9")]);
        assert_eq!(first.len(), 1);

        // La bandeja sigue apareciendo en polls posteriores
        let second = assigner.scan(&[scara_tray("T9")]);
        let third = assigner.scan(&[scara_tray("T9"), scara_tray("T10")]);

        assert!(second.is_empty());
        assert_eq!(third, vec![("T10".to_string(), 2)]);
    }

    #[test]
    fn trays_without_scara_tag_are_ignored() {
        let mut assigner = ScaraAssigner::new();

        let assignments = assigner.scan(&[plain_tray("T1"), scara_tray("T2")]);

        assert_eq!(assignments, vec![("T2".to_string(), 1)]);
    }

    #[test]
    fn tag_match_ignores_case() {
        let mut assigner = ScaraAssigner::new();

        let mut tray = scara_tray("T1");
        tray.tags = vec!["station".to_string(), "SCARA".to_string()];

        assert_eq!(assigner.scan(&[tray]), vec![("T1".to_string(), 1)]);
    }

    #[test]
    fn every_assignment_comes_from_the_pool() {
        let mut assigner = ScaraAssigner::new();

        let snapshot: Vec<ReadyTray> = (0..20).map(|i| scara_tray(&format!("T{}", i))).collect();
        for (_, item_id) in assigner.scan(&snapshot) {
            assert!(SCARA_ITEM_POOL.contains(&item_id));
        }
    }
}
