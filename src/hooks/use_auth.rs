// ============================================================================
// AUTH - ESTADO DE SESIÓN COMPARTIDO VÍA CONTEXT
// ============================================================================
// Única fuente de verdad de la autenticación. El provider rehidrata la
// sesión guardada al montar; login y logout mantienen localStorage y el
// estado en memoria sincronizados.
// ============================================================================

use yew::prelude::*;

use crate::models::SessionData;
use crate::utils::storage;

/// Estado de autenticación. Sin token (o con token vacío) no hay sesión.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AuthState {
    pub session: Option<SessionData>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .map_or(false, |session| !session.token.is_empty())
    }

    pub fn logged_in(session: SessionData) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn cleared() -> Self {
        Self { session: None }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseStateHandle<AuthState>,
    pub login: Callback<SessionData>,
    pub logout: Callback<()>,
}

impl UseAuthHandle {
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .session
            .as_ref()
            .map(|session| session.token.clone())
    }

    pub fn user_name(&self) -> Option<String> {
        self.state
            .session
            .as_ref()
            .map(|session| session.user_name.clone())
    }
}

#[hook]
fn use_auth() -> UseAuthHandle {
    let state = use_state(AuthState::default);

    // Rehidratar la sesión guardada al montar
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if let Some(session) = storage::load_session() {
                log::info!("✅ Sesión restaurada: {}", session.user_name);
                state.set(AuthState::logged_in(session));
            }
            || ()
        });
    }

    let login = {
        let state = state.clone();
        Callback::from(move |session: SessionData| {
            storage::save_session(&session);
            log::info!("✅ Login: {} (id {})", session.user_name, session.user_id);
            state.set(AuthState::logged_in(session));
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            storage::clear_session();
            log::info!("👋 Logout");
            state.set(AuthState::cleared());
        })
    };

    UseAuthHandle {
        state,
        login,
        logout,
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Provider que comparte el estado de autenticación con toda la app
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let handle = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

/// Acceso al contexto de autenticación.
/// Usarlo fuera de `AuthProvider` es un error de programación y aborta.
#[hook]
pub fn use_auth_context() -> UseAuthHandle {
    use_context::<UseAuthHandle>().expect("use_auth_context must be used within AuthProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> SessionData {
        SessionData {
            token: token.to_string(),
            user_name: "Admin".to_string(),
            user_id: 1,
        }
    }

    #[test]
    fn default_state_is_unauthenticated() {
        assert!(!AuthState::default().is_authenticated());
    }

    #[test]
    fn login_then_clear_round_trip() {
        let state = AuthState::logged_in(session("T"));
        assert!(state.is_authenticated());

        let state = AuthState::cleared();
        assert!(!state.is_authenticated());
        assert_eq!(state.session, None);
    }

    #[test]
    fn an_empty_token_does_not_authenticate() {
        assert!(!AuthState::logged_in(session("")).is_authenticated());
    }
}
