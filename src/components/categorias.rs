// ============================================================================
// CATEGORIAS - Gestión de categorías (staff)
// ============================================================================

use yew::prelude::*;

use crate::models::Categoria;
use crate::services::ApiClient;

#[function_component(Categorias)]
pub fn categorias() -> Html {
    let categorias = use_state(Vec::<Categoria>::new);

    {
        let categorias = categorias.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_categorias().await {
                    Ok(data) => categorias.set(data),
                    Err(e) => log::error!("❌ Error al obtener las categorías: {}", e),
                }
            });
            || ()
        });
    }

    html! {
        <div>
            <h1>{"Categorías"}</h1>
            <ul>
                {
                    categorias.iter().map(|cat| html! {
                        <li key={cat.id}>{&cat.denominacion}</li>
                    }).collect::<Html>()
                }
            </ul>
        </div>
    }
}
