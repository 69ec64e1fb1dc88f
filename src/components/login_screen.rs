use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_auth_context;
use crate::models::SessionData;
use crate::services::robot_manager;
use crate::utils::alert;

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth_context();
    let phone_ref = use_node_ref();
    let password_ref = use_node_ref();
    let submitting = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let phone_ref = phone_ref.clone();
        let password_ref = password_ref.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *submitting {
                return;
            }

            let (Some(phone_input), Some(password_input)) = (
                phone_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let phone = phone_input.value();
            let password = password_input.value();

            if phone.is_empty() || password.is_empty() {
                alert("Please enter your phone number and password");
                return;
            }

            let auth = auth.clone();
            let submitting = submitting.clone();
            submitting.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match robot_manager::validate_user(&phone, &password).await {
                    Ok(response) if response.statusbool => {
                        let session = SessionData {
                            token: response.token.unwrap_or_default(),
                            user_name: response.user_name.unwrap_or_default(),
                            user_id: response.user_id.unwrap_or_default(),
                        };
                        // La navegación al dashboard la dispara el cambio de sesión
                        auth.login.emit(session);
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Please check your phone number and password".to_string());
                        log::error!("❌ Login rechazado: {}", message);
                        alert(&format!("Invalid credentials: {}", message));
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        alert(&format!("Login error: {}", e));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"🤖"}</div>
                    </div>
                    <h1>{"IMS Robotics"}</h1>
                    <p>{"Warehouse Control System"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="phone">{"Phone Number"}</label>
                        <input
                            type="tel"
                            id="phone"
                            name="phone"
                            placeholder="1234567890"
                            ref={phone_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Password"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="••••••"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    <button type="submit" class="btn-login" disabled={*submitting}>
                        <span class="btn-text">
                            {if *submitting { "Signing in..." } else { "Sign In" }}
                        </span>
                    </button>
                </form>

                <p class="login-footer">{"Exhibition Demo Mode"}</p>
            </div>
        </div>
    }
}
