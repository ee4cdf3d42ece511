// ============================================================================
// LOGIN - Pantalla de inicio de sesión
// ============================================================================
// Las credenciales se validan en el backend; acá solo se levanta el
// resultado al AuthStore via el callback del contexto.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::app::{Ruta, UseRutaHandle};
use crate::hooks::UseAuthHandle;
use crate::services::ApiClient;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContext no disponible");
    let ruta = use_context::<UseRutaHandle>().expect("RutaContext no disponible");

    let usuario_ref = use_node_ref();
    let clave_ref = use_node_ref();
    let error = use_state(|| Option::<String>::None);
    let cargando = use_state(|| false);

    let on_submit = {
        let usuario_ref = usuario_ref.clone();
        let clave_ref = clave_ref.clone();
        let error = error.clone();
        let cargando = cargando.clone();
        let login = auth.login.clone();
        let navegar = ruta.navegar.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(usuario_input), Some(clave_input)) = (
                usuario_ref.cast::<HtmlInputElement>(),
                clave_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let usuario = usuario_input.value();
            let clave = clave_input.value();
            if usuario.is_empty() || clave.is_empty() {
                error.set(Some("Por favor, completá usuario y contraseña".to_string()));
                return;
            }

            cargando.set(true);
            let error = error.clone();
            let cargando = cargando.clone();
            let login = login.clone();
            let navegar = navegar.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().login(&usuario, &clave).await {
                    Ok(u) => {
                        log::info!("✅ Login exitoso: {} ({})", u.nombre_usuario, u.rol.as_str());
                        login.emit((u.nombre_usuario, u.rol, u.id));
                        cargando.set(false);
                        navegar.emit(Ruta::Home);
                    }
                    Err(e) => {
                        log::error!("❌ Error de login: {}", e);
                        cargando.set(false);
                        error.set(Some("Usuario o contraseña incorrectos".to_string()));
                    }
                }
            });
        })
    };

    let a_registro = {
        let navegar = ruta.navegar.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            navegar.emit(Ruta::Registro);
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <h1>{"Iniciar Sesión"}</h1>
            <input type="text" placeholder="Usuario" ref={usuario_ref} />
            <input type="password" placeholder="Contraseña" ref={clave_ref} />
            if let Some(mensaje) = &*error {
                <p class="mensaje-error">{mensaje}</p>
            }
            <button type="submit" disabled={*cargando}>
                { if *cargando { "Ingresando..." } else { "Ingresar" } }
            </button>
            <a href="#" onclick={a_registro}>{"Crear cuenta"}</a>
        </form>
    }
}
