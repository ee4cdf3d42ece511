// ============================================================================
// NAVBAR - Links condicionales por rol + drawer del carrito
// ============================================================================
// Todo el renderizado condicional por rol pasa por el guard central
// (Sesion::autorizar), no hay chequeos de rol sueltos.
// ============================================================================

use yew::prelude::*;

use crate::components::app::{Ruta, UseRutaHandle};
use crate::components::Carrito;
use crate::hooks::{UseAuthHandle, UseCartHandle};
use crate::models::{Acceso, Rol};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContext no disponible");
    let cart = use_context::<UseCartHandle>().expect("CartContext no disponible");
    let ruta = use_context::<UseRutaHandle>().expect("RutaContext no disponible");

    let drawer_abierto = use_state(|| false);

    let es_staff = auth.sesion.autorizar(&[Rol::Admin, Rol::Operador]) == Acceso::Permitido;
    let es_admin = auth.sesion.autorizar(&[Rol::Admin]) == Acceso::Permitido;
    let es_visor = auth.sesion.autorizar(&[Rol::Visor]) == Acceso::Permitido;

    let ir = |destino: Ruta| {
        let navegar = ruta.navegar.clone();
        Callback::from(move |_: MouseEvent| navegar.emit(destino.clone()))
    };

    let on_abrir_carrito = {
        let drawer_abierto = drawer_abierto.clone();
        Callback::from(move |_: MouseEvent| drawer_abierto.set(true))
    };

    let on_cerrar_carrito = {
        let drawer_abierto = drawer_abierto.clone();
        Callback::from(move |_: MouseEvent| drawer_abierto.set(false))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        let navegar = ruta.navegar.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            navegar.emit(Ruta::Login);
        })
    };

    html! {
        <>
            <nav class="navbar">
                <button onclick={ir(Ruta::Home)}><b>{"Mi Tienda"}</b></button>
                <button onclick={ir(Ruta::Home)}>{"Inicio"}</button>
                if es_staff {
                    <>
                        <button onclick={ir(Ruta::Categorias)}>{"Categorías"}</button>
                        <button onclick={ir(Ruta::Instrumentos)}>{"Instrumentos"}</button>
                    </>
                }
                if es_admin {
                    <button onclick={ir(Ruta::Estadisticas)}>{"Estadísticas"}</button>
                }
                if es_visor {
                    <button aria-label="Carrito de Compras" onclick={on_abrir_carrito}>
                        {"🛒"}
                        if cart.total_items > 0 {
                            <span class="badge">{cart.total_items}</span>
                        }
                    </button>
                }
                if auth.sesion.is_authenticated {
                    <button aria-label="Cerrar Sesión" onclick={on_logout}>{"Cerrar Sesión"}</button>
                } else {
                    <button aria-label="Iniciar Sesión" onclick={ir(Ruta::Login)}>{"Iniciar Sesión"}</button>
                }
            </nav>
            if *drawer_abierto && es_visor {
                <div class="drawer-carrito">
                    <button onclick={on_cerrar_carrito}>{"Cerrar Carrito ➡"}</button>
                    <Carrito />
                </div>
            }
        </>
    }
}
