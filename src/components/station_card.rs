use yew::prelude::*;

use crate::models::ReadyTray;

#[derive(Properties, PartialEq)]
pub struct StationCardProps {
    pub tray: ReadyTray,
    pub releasing: bool,
    pub on_release: Callback<ReadyTray>,
}

#[function_component(StationCard)]
pub fn station_card(props: &StationCardProps) -> Html {
    let onclick = {
        let on_release = props.on_release.clone();
        let tray = props.tray.clone();
        Callback::from(move |_: MouseEvent| on_release.emit(tray.clone()))
    };

    html! {
        <div class="station-card">
            <div class="station-icon">{"📦"}</div>
            <h3>{&props.tray.tray_id}</h3>
            <p class="station-name">{format!("Station {}", props.tray.station_name)}</p>

            <div class="station-slot">
                <p class="slot-id">{&props.tray.station_slot_id}</p>
                <div class="tag-list">
                    {
                        for props.tray.tags.iter().map(|tag| html! {
                            <span key={tag.clone()} class="tag">{tag}</span>
                        })
                    }
                </div>
            </div>

            <button
                class="btn-release"
                {onclick}
                disabled={props.releasing}
            >
                {if props.releasing { "Releasing..." } else { "Release" }}
            </button>
        </div>
    }
}
