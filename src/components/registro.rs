// ============================================================================
// REGISTRO - Alta de usuario
// ============================================================================
// El alta no inicia sesión: sobre éxito se navega al login para que el
// usuario entre con sus credenciales nuevas.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::app::{Ruta, UseRutaHandle};
use crate::services::ApiClient;

#[function_component(Registro)]
pub fn registro() -> Html {
    let ruta = use_context::<UseRutaHandle>().expect("RutaContext no disponible");

    let usuario_ref = use_node_ref();
    let clave_ref = use_node_ref();
    let confirmar_ref = use_node_ref();
    let error = use_state(|| Option::<String>::None);
    let cargando = use_state(|| false);

    let on_submit = {
        let usuario_ref = usuario_ref.clone();
        let clave_ref = clave_ref.clone();
        let confirmar_ref = confirmar_ref.clone();
        let error = error.clone();
        let cargando = cargando.clone();
        let navegar = ruta.navegar.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(usuario_input), Some(clave_input), Some(confirmar_input)) = (
                usuario_ref.cast::<HtmlInputElement>(),
                clave_ref.cast::<HtmlInputElement>(),
                confirmar_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let usuario = usuario_input.value();
            let clave = clave_input.value();
            if usuario.is_empty() || clave.is_empty() {
                error.set(Some("Por favor, completá usuario y contraseña".to_string()));
                return;
            }
            if clave != confirmar_input.value() {
                error.set(Some("Las contraseñas no coinciden".to_string()));
                return;
            }

            cargando.set(true);
            let error = error.clone();
            let cargando = cargando.clone();
            let navegar = navegar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().registrar(&usuario, &clave).await {
                    Ok(()) => {
                        log::info!("✅ Usuario registrado: {}", usuario);
                        cargando.set(false);
                        navegar.emit(Ruta::Login);
                    }
                    Err(e) => {
                        log::error!("❌ Error de registro: {}", e);
                        cargando.set(false);
                        error.set(Some("No se pudo crear la cuenta".to_string()));
                    }
                }
            });
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <h1>{"Crear Cuenta"}</h1>
            <input type="text" placeholder="Usuario" ref={usuario_ref} />
            <input type="password" placeholder="Contraseña" ref={clave_ref} />
            <input type="password" placeholder="Repetir contraseña" ref={confirmar_ref} />
            if let Some(mensaje) = &*error {
                <p class="mensaje-error">{mensaje}</p>
            }
            <button type="submit" disabled={*cargando}>
                { if *cargando { "Creando..." } else { "Registrarse" } }
            </button>
        </form>
    }
}
