// ============================================================================
// APP - Raíz de la aplicación: rutas + providers de contexto
// ============================================================================

use yew::prelude::*;

use crate::components::{
    Categorias, Detalles, Estadisticas, Home, Instrumentos, Login, Navbar, NotFound, Registro,
    RutaPrivada,
};
use crate::hooks::{AuthContextProvider, CartContextProvider};
use crate::models::Rol;

/// Rutas de la app. Los conjuntos de roles por ruta protegida son cerrados
/// y explícitos (ver RutaPrivada).
#[derive(Debug, Clone, PartialEq)]
pub enum Ruta {
    Home,
    Login,
    Registro,
    Categorias,
    Instrumentos,
    Estadisticas,
    Detalles(u64),
    NotFound,
}

/// Navegación compartida via contexto
#[derive(Clone, PartialEq)]
pub struct UseRutaHandle {
    pub actual: Ruta,
    pub navegar: Callback<Ruta>,
}

#[function_component(App)]
pub fn app() -> Html {
    let ruta = use_state(|| Ruta::Home);

    let navegar = {
        let ruta = ruta.clone();
        Callback::from(move |nueva: Ruta| ruta.set(nueva))
    };

    let handle = UseRutaHandle {
        actual: (*ruta).clone(),
        navegar,
    };

    let contenido = match &*ruta {
        Ruta::Home => html! { <Home /> },
        Ruta::Login => html! { <Login /> },
        Ruta::Registro => html! { <Registro /> },
        Ruta::Categorias => html! {
            <RutaPrivada permitidos={vec![Rol::Admin, Rol::Operador]}>
                <Categorias />
            </RutaPrivada>
        },
        Ruta::Instrumentos => html! {
            <RutaPrivada permitidos={vec![Rol::Admin, Rol::Operador]}>
                <Instrumentos />
            </RutaPrivada>
        },
        Ruta::Estadisticas => html! {
            <RutaPrivada permitidos={vec![Rol::Admin]}>
                <Estadisticas />
            </RutaPrivada>
        },
        Ruta::Detalles(id) => html! { <Detalles id={*id} /> },
        Ruta::NotFound => html! { <NotFound /> },
    };

    html! {
        <ContextProvider<UseRutaHandle> context={handle}>
            <AuthContextProvider>
                <CartContextProvider>
                    <Navbar />
                    { contenido }
                </CartContextProvider>
            </AuthContextProvider>
        </ContextProvider<UseRutaHandle>>
    }
}
