use yew::prelude::*;

use super::app::Route;
use super::StationCard;
use crate::hooks::{use_auth_context, use_ready_trays};

#[derive(Properties, PartialEq)]
pub struct StationsProps {
    pub navigate: Callback<Route>,
}

/// Vista de estaciones: bandejas listas para liberar, refrescadas cada 2 s
#[function_component(Stations)]
pub fn stations(props: &StationsProps) -> Html {
    let auth = use_auth_context();
    let handle = use_ready_trays(auth.token());

    let on_back = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Dashboard))
    };

    html! {
        <div class="stations">
            <header class="stations-header">
                <button class="btn-back" onclick={on_back}>{"←"}</button>
                <div>
                    <h1>{"Robotic Stations"}</h1>
                    <p>{"Control and monitor warehouse automation"}</p>
                </div>
            </header>

            {
                if *handle.loading {
                    html! { <p class="stations-empty">{"Loading ready trays..."}</p> }
                } else if handle.trays.is_empty() {
                    html! { <p class="stations-empty">{"No ready trays available"}</p> }
                } else {
                    html! {
                        <div class="station-grid">
                            {
                                for handle.trays.iter().map(|tray| {
                                    let releasing =
                                        handle.releasing.as_deref() == Some(tray.tray_id.as_str());
                                    html! {
                                        <StationCard
                                            key={tray.id}
                                            tray={tray.clone()}
                                            releasing={releasing}
                                            on_release={handle.release.clone()}
                                        />
                                    }
                                })
                            }
                        </div>
                    }
                }
            }
        </div>
    }
}
