// ============================================================================
// READY TRAYS - POLLER DE LA VISTA DE ESTACIONES
// ============================================================================
// Snapshot completo de bandejas listas cada 2 segundos, reemplazando el
// estado local sin mezclar. La carga inicial muestra indicador y avisa de
// errores; los polls de fondo callan para no inundar al operador.
// Cada snapshot pasa por el despacho SCARA antes de pintarse.
// ============================================================================

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::ReadyTray;
use crate::services::{robot_manager, scara_dispatch};
use crate::utils::alert;

const READY_TRAY_POLL_INTERVAL_MS: u32 = 2_000;

#[derive(Clone)]
pub struct UseReadyTraysHandle {
    pub trays: UseStateHandle<Vec<ReadyTray>>,
    pub loading: UseStateHandle<bool>,
    /// Bandeja con un release en vuelo, si lo hay (un release por clic)
    pub releasing: UseStateHandle<Option<String>>,
    pub release: Callback<ReadyTray>,
}

#[hook]
pub fn use_ready_trays(token: Option<String>) -> UseReadyTraysHandle {
    let trays = use_state(Vec::<ReadyTray>::new);
    let loading = use_state(|| true);
    let releasing = use_state(|| None::<String>);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let trays = trays.clone();
        let loading = loading.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with(token.clone(), move |token| {
            *interval_handle.borrow_mut() = None;

            // Sin token no hay nada que consultar: retorno temprano, no es un error
            if let Some(token) = token.clone() {
                // Carga inicial: indicador visible y errores a la vista
                fetch_ready_trays(token.clone(), trays.clone(), Some(loading.clone()), true);

                let trays = trays.clone();
                let interval = Interval::new(READY_TRAY_POLL_INTERVAL_MS, move || {
                    fetch_ready_trays(token.clone(), trays.clone(), None, false);
                });
                *interval_handle.borrow_mut() = Some(interval);
            }

            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    let release = {
        let trays = trays.clone();
        let releasing = releasing.clone();
        let token = token.clone();

        Callback::from(move |tray: ReadyTray| {
            let Some(token) = token.clone() else {
                return;
            };
            if releasing.is_some() {
                return;
            }

            let trays = trays.clone();
            let releasing = releasing.clone();
            releasing.set(Some(tray.tray_id.clone()));

            wasm_bindgen_futures::spawn_local(async move {
                match robot_manager::release_tray(&token, &tray.tray_id, &tray.tags).await {
                    Ok(response) if response.is_success() => {
                        log::info!(
                            "✅ Bandeja {} liberada desde {}",
                            tray.tray_id,
                            tray.station_name
                        );
                        alert(&format!(
                            "Tray {} from station {} has been released",
                            tray.tray_id, tray.station_name
                        ));

                        // Tras liberar: refetch completo del snapshot
                        match load_snapshot(&token).await {
                            Ok(snapshot) => trays.set(snapshot),
                            Err(e) => log::error!("❌ Refetch tras release fallido: {}", e),
                        }
                    }
                    Ok(_) => {
                        log::error!("❌ Release rechazado para la bandeja {}", tray.tray_id);
                        alert("Failed to release tray");
                    }
                    Err(e) => {
                        log::error!("❌ Error en release de {}: {}", tray.tray_id, e);
                        alert("Failed to connect to server");
                    }
                }
                releasing.set(None);
            });
        })
    };

    UseReadyTraysHandle {
        trays,
        loading,
        releasing,
        release,
    }
}

/// Snapshot de bandejas listas, ya pasado por el despacho SCARA
async fn load_snapshot(token: &str) -> Result<Vec<ReadyTray>, String> {
    let snapshot = robot_manager::is_tray_ready(token, None).await?;
    scara_dispatch::dispatch_new_scara_trays(&snapshot);
    Ok(snapshot)
}

fn fetch_ready_trays(
    token: String,
    trays: UseStateHandle<Vec<ReadyTray>>,
    loading: Option<UseStateHandle<bool>>,
    surface_errors: bool,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match load_snapshot(&token).await {
            Ok(snapshot) => trays.set(snapshot),
            Err(e) if surface_errors => {
                log::error!("❌ Error cargando bandejas listas: {}", e);
                alert("Failed to fetch ready trays");
            }
            Err(e) => log::error!("❌ Poll de bandejas listas fallido: {}", e),
        }

        if let Some(loading) = loading {
            loading.set(false);
        }
    });
}
