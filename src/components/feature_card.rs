use yew::prelude::*;

use crate::models::System;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub system: System,
    pub on_open: Callback<System>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let onclick = {
        let on_open = props.on_open.clone();
        let system = props.system;
        Callback::from(move |_: MouseEvent| on_open.emit(system))
    };

    html! {
        <div class="feature-card" {onclick}>
            <div class="feature-icon">{props.system.icon()}</div>
            <h3>{props.system.name()}</h3>
            <p>{props.system.description()}</p>
        </div>
    }
}
