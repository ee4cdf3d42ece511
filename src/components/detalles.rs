// ============================================================================
// DETALLES - Detalle de un instrumento
// ============================================================================

use yew::prelude::*;

use crate::components::InstrumentoCard;
use crate::hooks::UseCartHandle;
use crate::models::Instrumento;
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DetallesProps {
    pub id: u64,
}

#[function_component(Detalles)]
pub fn detalles(props: &DetallesProps) -> Html {
    let cart = use_context::<UseCartHandle>().expect("CartContext no disponible");

    let instrumento = use_state(|| Option::<Instrumento>::None);

    {
        let instrumento = instrumento.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_instrumento(id).await {
                    Ok(data) => instrumento.set(Some(data)),
                    Err(e) => log::error!("❌ Error al obtener el instrumento {}: {}", id, e),
                }
            });
            || ()
        });
    }

    html! {
        <div class="grilla-instrumentos">
            if let Some(item) = &*instrumento {
                <InstrumentoCard instrumento={item.clone()} on_add={cart.agregar.clone()} />
            } else {
                <p>{"Cargando..."}</p>
            }
        </div>
    }
}
