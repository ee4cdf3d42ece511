// ============================================================================
// USE AUTH HOOK - Puente entre el AuthStore y los componentes
// ============================================================================
// El store es el único que muta la sesión; el hook expone un snapshot
// inmutable y callbacks. Se comparte via Context API de Yew.
// ============================================================================

use yew::prelude::*;

use crate::models::{Rol, Sesion};
use crate::stores::AuthStore;
use crate::utils::backend_por_defecto;

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    /// Snapshot inmutable de la sesión actual
    pub sesion: Sesion,
    pub login: Callback<(String, Rol, u64)>,
    pub logout: Callback<()>,
}

#[hook]
pub fn use_auth() -> UseAuthHandle {
    // El store se crea una sola vez y se hidrata del snapshot persistido
    let store = use_mut_ref(|| {
        let store = AuthStore::new(backend_por_defecto());
        store.hydrate();
        store
    });

    let sesion = use_state(|| store.borrow().sesion());

    let login = {
        let store = store.clone();
        let sesion = sesion.clone();
        Callback::from(move |(username, rol, user_id): (String, Rol, u64)| {
            store.borrow().login(&username, rol, user_id);
            sesion.set(store.borrow().sesion());
        })
    };

    let logout = {
        let store = store.clone();
        let sesion = sesion.clone();
        Callback::from(move |_| {
            store.borrow().logout();
            sesion.set(store.borrow().sesion());
        })
    };

    UseAuthHandle {
        sesion: (*sesion).clone(),
        login,
        logout,
    }
}

/// Provider que envuelve la app y comparte el estado de sesión
#[function_component(AuthContextProvider)]
pub fn auth_context_provider(props: &AuthContextProviderProps) -> Html {
    let handle = use_auth();

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthContextProviderProps {
    pub children: Children,
}
