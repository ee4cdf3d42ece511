// ============================================================================
// NOT FOUND - Pantalla 404
// ============================================================================

use yew::prelude::*;

use crate::components::app::{Ruta, UseRutaHandle};

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let ruta = use_context::<UseRutaHandle>().expect("RutaContext no disponible");

    let volver = {
        let navegar = ruta.navegar.clone();
        Callback::from(move |_| navegar.emit(Ruta::Home))
    };

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"La página que buscás no existe"}</p>
            <button onclick={volver}>{"Volver al inicio"}</button>
        </div>
    }
}
