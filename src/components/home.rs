// ============================================================================
// HOME - Catálogo público
// ============================================================================

use yew::prelude::*;

use crate::components::InstrumentoCard;
use crate::hooks::UseCartHandle;
use crate::models::Instrumento;
use crate::services::ApiClient;

#[function_component(Home)]
pub fn home() -> Html {
    let cart = use_context::<UseCartHandle>().expect("CartContext no disponible");

    let instrumentos = use_state(Vec::<Instrumento>::new);
    let cargando = use_state(|| true);

    {
        let instrumentos = instrumentos.clone();
        let cargando = cargando.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_instrumentos().await {
                    Ok(data) => {
                        log::info!("🎸 Catálogo cargado: {} instrumentos", data.len());
                        instrumentos.set(data);
                    }
                    Err(e) => log::error!("❌ Error al obtener los instrumentos: {}", e),
                }
                cargando.set(false);
            });
            || ()
        });
    }

    html! {
        <div>
            if *cargando {
                <p>{"Cargando catálogo..."}</p>
            } else {
                <div class="grilla-instrumentos">
                    {
                        instrumentos.iter().map(|item| html! {
                            <InstrumentoCard
                                key={item.id}
                                instrumento={item.clone()}
                                on_add={cart.agregar.clone()}
                            />
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}
