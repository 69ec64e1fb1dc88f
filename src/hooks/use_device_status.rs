// ============================================================================
// DEVICE STATUS - POLLER DEL PANEL DE CONTROL
// ============================================================================
// Una lectura inmediata al abrir el panel y, para los dispositivos
// monitoreados en vivo, un refresco cada 3 segundos que reemplaza la
// lectura mostrada. El temporizador se cancela al cerrar el panel o al
// cambiar de dispositivo; nunca hay más de uno activo.
// ============================================================================

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::models::{Device, DeviceReading};
use crate::services::pubsub;

const DEVICE_POLL_INTERVAL_MS: u32 = 3_000;

#[hook]
pub fn use_device_status(device: Option<Device>) -> UseStateHandle<Option<DeviceReading>> {
    let reading = use_state(|| None::<DeviceReading>);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    {
        let reading = reading.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with(device, move |device| {
            // Cancelar el temporizador del panel anterior antes de arrancar otro
            *interval_handle.borrow_mut() = None;
            reading.set(None);

            if let Some(device) = *device {
                // Lectura inmediata al abrir
                fetch_into(device, reading.clone());

                if device.live_monitor() {
                    let reading = reading.clone();
                    let interval = Interval::new(DEVICE_POLL_INTERVAL_MS, move || {
                        fetch_into(device, reading.clone());
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
            }

            // La limpieza corre en todos los caminos de salida del panel
            move || {
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    reading
}

/// Trae el último registro del topic y reemplaza la lectura mostrada.
/// Los fallos solo se loguean: la última lectura buena queda en pantalla.
fn fetch_into(device: Device, reading: UseStateHandle<Option<DeviceReading>>) {
    wasm_bindgen_futures::spawn_local(async move {
        match pubsub::subscribe_latest(device.topic()).await {
            Ok(Some(record)) => match device.decode_status(&record) {
                Ok(status) => reading.set(Some(DeviceReading {
                    status,
                    created_at: record.created_at,
                })),
                Err(e) => log::warn!("⚠️ Estado ilegible en {}: {}", device.topic(), e),
            },
            Ok(None) => log::info!("ℹ️ Sin registros en el topic {}", device.topic()),
            Err(e) => log::error!("❌ Error consultando {}: {}", device.topic(), e),
        }
    });
}
