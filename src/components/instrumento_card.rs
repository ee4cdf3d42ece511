// ============================================================================
// INSTRUMENTO CARD - Card del catálogo
// ============================================================================

use yew::prelude::*;

use crate::components::app::{Ruta, UseRutaHandle};
use crate::hooks::UseAuthHandle;
use crate::models::{Acceso, Instrumento, Rol};

#[derive(Properties, PartialEq)]
pub struct InstrumentoCardProps {
    pub instrumento: Instrumento,
    pub on_add: Callback<Instrumento>,
}

#[function_component(InstrumentoCard)]
pub fn instrumento_card(props: &InstrumentoCardProps) -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContext no disponible");
    let ruta = use_context::<UseRutaHandle>().expect("RutaContext no disponible");

    // "Agregar al carrito" solo para compradores, mismo guard que el checkout
    let puede_comprar = auth.sesion.autorizar(&[Rol::Visor]) == Acceso::Permitido;

    let on_agregar = {
        let on_add = props.on_add.clone();
        let instrumento = props.instrumento.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(instrumento.clone()))
    };

    let on_detalles = {
        let navegar = ruta.navegar.clone();
        let id = props.instrumento.id;
        Callback::from(move |_: MouseEvent| navegar.emit(Ruta::Detalles(id)))
    };

    let item = &props.instrumento;
    html! {
        <div class="instrumento-card">
            <img src={item.imagen.clone()} alt={item.instrumento.clone()} />
            <h3>{&item.instrumento}</h3>
            <p>{&item.descripcion}</p>
            <p>{format!("Marca: {}", item.marca)}</p>
            <p>{format!("Modelo: {}", item.modelo)}</p>
            <p><b>{format!("Precio: ${}", item.precio)}</b></p>
            if puede_comprar {
                <button onclick={on_agregar}>{"Agregar al carrito"}</button>
            }
            <button onclick={on_detalles}>{"Ver detalles"}</button>
        </div>
    }
}
