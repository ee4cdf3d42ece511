// ============================================================================
// INSTRUMENTOS - Gestión del catálogo (staff)
// ============================================================================

use yew::prelude::*;

use crate::models::Instrumento;
use crate::services::ApiClient;

#[function_component(Instrumentos)]
pub fn instrumentos() -> Html {
    let instrumentos = use_state(Vec::<Instrumento>::new);
    let cargando = use_state(|| true);

    {
        let instrumentos = instrumentos.clone();
        let cargando = cargando.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_instrumentos().await {
                    Ok(data) => instrumentos.set(data),
                    Err(e) => log::error!("❌ Error al obtener los instrumentos: {}", e),
                }
                cargando.set(false);
            });
            || ()
        });
    }

    let on_eliminar = {
        let instrumentos = instrumentos.clone();
        Callback::from(move |id: u64| {
            let instrumentos = instrumentos.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().delete_instrumento(id).await {
                    Ok(()) => {
                        let restantes: Vec<Instrumento> = instrumentos
                            .iter()
                            .filter(|item| item.id != id)
                            .cloned()
                            .collect();
                        instrumentos.set(restantes);
                    }
                    Err(e) => log::error!("❌ Error al eliminar el instrumento: {}", e),
                }
            });
        })
    };

    html! {
        <div>
            <h1>{"Instrumentos"}</h1>
            if *cargando {
                <p>{"Cargando..."}</p>
            } else {
                <table>
                    <thead>
                        <tr>
                            <th>{"Instrumento"}</th>
                            <th>{"Marca"}</th>
                            <th>{"Modelo"}</th>
                            <th>{"Precio"}</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {
                            instrumentos.iter().map(|item| {
                                let on_click = {
                                    let on_eliminar = on_eliminar.clone();
                                    let id = item.id;
                                    Callback::from(move |_: MouseEvent| on_eliminar.emit(id))
                                };
                                html! {
                                    <tr key={item.id}>
                                        <td>{&item.instrumento}</td>
                                        <td>{&item.marca}</td>
                                        <td>{&item.modelo}</td>
                                        <td>{format!("${}", item.precio)}</td>
                                        <td><button onclick={on_click}>{"Eliminar"}</button></td>
                                    </tr>
                                }
                            }).collect::<Html>()
                        }
                    </tbody>
                </table>
            }
        </div>
    }
}
