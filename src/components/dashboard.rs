use yew::prelude::*;

use super::app::Route;
use super::{ControlPanel, FeatureCard};
use crate::hooks::use_auth_context;
use crate::models::System;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub navigate: Callback<Route>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let auth = use_auth_context();

    // A lo sumo un panel abierto; abrir otro cierra (y cancela) el anterior
    let open_system = use_state(|| None::<System>);

    let on_open = {
        let open_system = open_system.clone();
        Callback::from(move |system: System| open_system.set(Some(system)))
    };

    let on_close = {
        let open_system = open_system.clone();
        Callback::from(move |_: ()| open_system.set(None))
    };

    let on_stations = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Stations))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let operator = auth.user_name().unwrap_or_default();

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <div>
                    <h1>{"IMS Warehouse Control"}</h1>
                    <p>{"Select a system to control"}</p>
                </div>
                <div class="header-actions">
                    <span class="operator-name">{operator}</span>
                    <button class="btn-logout" onclick={on_logout}>{"Logout"}</button>
                </div>
            </header>

            <div class="feature-grid">
                {
                    for System::ALL.iter().map(|system| html! {
                        <FeatureCard
                            key={system.tag()}
                            system={*system}
                            on_open={on_open.clone()}
                        />
                    })
                }
            </div>

            <button class="btn-stations" onclick={on_stations}>{"Stations"}</button>

            {
                if let Some(system) = *open_system {
                    html! { <ControlPanel system={system} on_close={on_close} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
