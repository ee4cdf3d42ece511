// ============================================================================
// RUTA PRIVADA - Guard de acceso a nivel ruta
// ============================================================================
// El guard (Sesion::autorizar) solo decide; la navegación al login sobre
// Denegado ocurre acá, en un efecto, nunca durante el render.
// ============================================================================

use yew::prelude::*;

use crate::components::app::{Ruta, UseRutaHandle};
use crate::hooks::UseAuthHandle;
use crate::models::{Acceso, Rol};

#[derive(Properties, PartialEq)]
pub struct RutaPrivadaProps {
    /// Conjunto cerrado de roles habilitados para esta ruta
    pub permitidos: Vec<Rol>,
    pub children: Children,
}

#[function_component(RutaPrivada)]
pub fn ruta_privada(props: &RutaPrivadaProps) -> Html {
    let auth = use_context::<UseAuthHandle>().expect("AuthContext no disponible");
    let ruta = use_context::<UseRutaHandle>().expect("RutaContext no disponible");

    let permitido = auth.sesion.autorizar(&props.permitidos) == Acceso::Permitido;

    {
        let navegar = ruta.navegar.clone();
        use_effect_with(permitido, move |permitido| {
            if !permitido {
                log::info!("🚫 Acceso denegado, redirigiendo al login");
                navegar.emit(Ruta::Login);
            }
            || ()
        });
    }

    if permitido {
        html! { <>{ props.children.clone() }</> }
    } else {
        Html::default()
    }
}
