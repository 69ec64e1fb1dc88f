use yew::prelude::*;

use crate::hooks::{use_auth_context, AuthProvider};
use super::{Dashboard, LoginScreen, Stations};

/// Vistas de la app. Navegación interna, sin router de URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Stations,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let auth = use_auth_context();
    let route = use_state(|| Route::Login);

    // Entrar al dashboard al autenticarse (login o sesión restaurada)
    // y volver al login al cerrar sesión
    {
        let route = route.clone();
        let authenticated = auth.is_authenticated();
        use_effect_with(authenticated, move |authenticated| {
            if *authenticated {
                if *route == Route::Login {
                    route.set(Route::Dashboard);
                }
            } else {
                route.set(Route::Login);
            }
            || ()
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    // Sin sesión solo existe el login
    let effective = if auth.is_authenticated() {
        *route
    } else {
        Route::Login
    };

    match effective {
        Route::Login => html! { <LoginScreen /> },
        Route::Dashboard => html! { <Dashboard navigate={navigate} /> },
        Route::Stations => html! { <Stations navigate={navigate} /> },
    }
}
