use yew::prelude::*;

use crate::hooks::{use_auth_context, use_device_status};
use crate::models::{System, Tray};
use crate::services::robot_manager::{self, TRAY_STATUS_ACTIVE};
use crate::services::tray_request::{self, SCARA_DEMO_TRAY_ID};
use crate::services::pubsub;
use crate::utils::alert;

#[derive(Properties, PartialEq)]
pub struct ControlPanelProps {
    pub system: System,
    pub on_close: Callback<()>,
}

/// Panel de control de un sistema: estado del dispositivo en vivo,
/// comandos pub/sub y solicitud de bandeja contra el robot-manager.
#[function_component(ControlPanel)]
pub fn control_panel(props: &ControlPanelProps) -> Html {
    let auth = use_auth_context();
    let system = props.system;

    // El poller vive lo que el panel: al cerrarlo o cambiar de sistema se cancela
    let reading = use_device_status(system.device());

    let trays = use_state(Vec::<Tray>::new);
    let trays_loading = use_state(|| false);
    let selected_tray = use_state(|| None::<String>);
    let requesting = use_state(|| false);

    // Bandejas activas al abrir el panel; el cambio de sistema
    // descarta también la selección anterior
    {
        let trays = trays.clone();
        let trays_loading = trays_loading.clone();
        let selected_tray = selected_tray.clone();
        let token = auth.token();

        use_effect_with(system, move |_| {
            selected_tray.set(None);
            trays.set(Vec::new());

            if let Some(token) = token {
                trays_loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match robot_manager::fetch_trays(&token, TRAY_STATUS_ACTIVE).await {
                        Ok(records) => {
                            log::info!("📦 {} bandejas activas", records.len());
                            trays.set(records);
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando bandejas: {}", e);
                            alert("Failed to fetch trays");
                        }
                    }
                    trays_loading.set(false);
                });
            }
            || ()
        });
    }

    let on_select = {
        let selected_tray = selected_tray.clone();
        Callback::from(move |tray_id: String| selected_tray.set(Some(tray_id)))
    };

    let on_request = {
        let auth = auth.clone();
        let selected_tray = selected_tray.clone();
        let requesting = requesting.clone();

        Callback::from(move |_: MouseEvent| {
            if *requesting {
                return;
            }
            let Some(token) = auth.token() else {
                return;
            };

            // La ruta SCARA ignora la selección y usa la bandeja fija de demo
            let tray_id = if system == System::Scara {
                SCARA_DEMO_TRAY_ID.to_string()
            } else {
                match (*selected_tray).clone() {
                    Some(tray_id) => tray_id,
                    None => {
                        alert("Select a tray first");
                        return;
                    }
                }
            };

            let requesting = requesting.clone();
            requesting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match tray_request::request_tray(&token, &tray_id, system).await {
                    Ok(outcome) => alert(&outcome.message(&tray_id)),
                    Err(e) => {
                        log::error!("❌ Retrieve fallido para {}: {}", tray_id, e);
                        alert(&format!("Retrieval failed: {}", e));
                    }
                }
                requesting.set(false);
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="panel-backdrop">
            <div class="control-panel">
                <header class="panel-header">
                    <h2>{system.name()}</h2>
                    <button class="btn-close" onclick={on_close}>{"✕"}</button>
                </header>

                { device_section(system, &*reading) }

                <section class="panel-trays">
                    <h3>{"Storage Trays"}</h3>
                    {
                        if system == System::Scara {
                            html! {
                                <p class="tray-note">
                                    {format!("Demo mode: retrieval uses tray {}", SCARA_DEMO_TRAY_ID)}
                                </p>
                            }
                        } else if *trays_loading {
                            html! { <p class="tray-note">{"Loading trays..."}</p> }
                        } else if trays.is_empty() {
                            html! { <p class="tray-note">{"No active trays"}</p> }
                        } else {
                            html! {
                                <ul class="tray-list">
                                    {
                                        for trays.iter().map(|tray| {
                                            tray_row(tray, &selected_tray, &on_select)
                                        })
                                    }
                                </ul>
                            }
                        }
                    }

                    <button
                        class="btn-request"
                        onclick={on_request}
                        disabled={*requesting}
                    >
                        {if *requesting { "Requesting..." } else { "Request Tray" }}
                    </button>
                </section>
            </div>
        </div>
    }
}

fn device_section(
    system: System,
    reading: &Option<crate::models::DeviceReading>,
) -> Html {
    let Some(device) = system.device() else {
        return html! {};
    };

    let status_line = match reading {
        Some(reading) => {
            let mut line = reading.status.action().to_string();
            if let Some(detail) = reading.status.detail() {
                line.push_str(&format!(" ({})", detail));
            }
            if let Some(created_at) = reading.created_at {
                line.push_str(&format!(" — {}", created_at.format("%H:%M:%S")));
            }
            line
        }
        None => "No status yet".to_string(),
    };

    let command_buttons = device.actions().iter().map(|action| {
        let action = action.to_string();
        let label = action.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            let action = action.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let message = serde_json::json!({ "action": action });
                match pubsub::publish(device.topic(), &message).await {
                    Ok(()) => log::info!("✅ Comando {} publicado en {}", action, device.topic()),
                    Err(e) => {
                        log::error!("❌ Comando {} fallido: {}", action, e);
                        alert(&format!("Command failed: {}", e));
                    }
                }
            });
        });

        html! { <button class="btn-command" {onclick}>{label}</button> }
    });

    html! {
        <section class="panel-device">
            <h3>{format!("Device Status ({})", device.topic())}</h3>
            <p class="device-status">{status_line}</p>
            <div class="device-commands">{ for command_buttons }</div>
        </section>
    }
}

fn tray_row(
    tray: &Tray,
    selected_tray: &UseStateHandle<Option<String>>,
    on_select: &Callback<String>,
) -> Html {
    let selected = selected_tray.as_deref() == Some(tray.tray_id.as_str());
    let class = if selected { "tray-row selected" } else { "tray-row" };

    let onclick = {
        let on_select = on_select.clone();
        let tray_id = tray.tray_id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(tray_id.clone()))
    };

    html! {
        <li key={tray.tray_id.clone()} {class} {onclick}>
            <span class="tray-id">{&tray.tray_id}</span>
            <span class="tray-meta">
                {format!(
                    "{} · {} mm · {} kg · {} dividers",
                    tray.tray_status, tray.tray_height, tray.tray_weight, tray.tray_divider
                )}
            </span>
        </li>
    }
}
