// ============================================================================
// CHECKOUT STORE - Máquina de estados del handshake con Mercado Pago
// ============================================================================
// Idle → Requesting → Ready(preference_id) | Failed. A lo sumo un request en
// vuelo; cada request lleva una generación creciente y una respuesta de una
// generación vieja se descarta. La parte async (spawn + HTTP) vive en el
// componente CheckoutMP: acá todo es síncrono y testeable.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;
use thiserror::Error;

use crate::models::{Pedido, PreferenceMP};

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutEstado {
    Idle,
    Requesting { generation: u64 },
    Ready { preference_id: String },
    Failed { error: String },
}

/// Rechazos de un intento de checkout. CarritoVacio es validación de usuario,
/// no un error del sistema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Agregue al menos un instrumento al carrito")]
    CarritoVacio,
    #[error("Ya hay un pago en curso")]
    PagoEnCurso,
    #[error("La preferencia de pago ya fue creada")]
    PreferenciaLista,
}

/// Ticket de un request autorizado: el caller manda `pedido` al backend y
/// reporta el resultado con `completar(generation, ..)`
#[derive(Debug, Clone, PartialEq)]
pub struct TicketCheckout {
    pub generation: u64,
    pub pedido: Pedido,
}

#[derive(Clone)]
pub struct CheckoutCoordinator {
    estado: Rc<RefCell<CheckoutEstado>>,
    generation: Rc<Cell<u64>>,
}

impl Default for CheckoutCoordinator {
    fn default() -> Self {
        Self {
            estado: Rc::new(RefCell::new(CheckoutEstado::Idle)),
            generation: Rc::new(Cell::new(0)),
        }
    }
}

impl CheckoutCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intento de checkout. Con total > 0 y sin request en vuelo pasa a
    /// Requesting y devuelve el ticket; si no, el estado no cambia.
    pub fn iniciar(&self, total: f64) -> Result<TicketCheckout, CheckoutError> {
        if !(total > 0.0) {
            return Err(CheckoutError::CarritoVacio);
        }

        match *self.estado.borrow() {
            CheckoutEstado::Requesting { .. } => return Err(CheckoutError::PagoEnCurso),
            CheckoutEstado::Ready { .. } => return Err(CheckoutError::PreferenciaLista),
            CheckoutEstado::Idle | CheckoutEstado::Failed { .. } => {}
        }

        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        *self.estado.borrow_mut() = CheckoutEstado::Requesting { generation };

        log::info!("🛒 Creando preferencia de pago (total: {})", total);
        Ok(TicketCheckout {
            generation,
            pedido: Pedido {
                fecha_pedido: Utc::now(),
                total_pedido: total,
            },
        })
    }

    /// Reportar el resultado del request `generation`. Una respuesta de una
    /// generación distinta a la actual llegó tarde y se descarta.
    pub fn completar(&self, generation: u64, resultado: Result<PreferenceMP, String>) {
        if generation != self.generation.get() {
            log::info!("⏭️ Respuesta de un request viejo (gen {}), se descarta", generation);
            return;
        }
        if !matches!(*self.estado.borrow(), CheckoutEstado::Requesting { generation: g } if g == generation)
        {
            return;
        }

        let nuevo = match resultado {
            Ok(pref) if !pref.id.is_empty() => {
                log::info!("✅ Preferencia creada: {}", pref.id);
                CheckoutEstado::Ready { preference_id: pref.id }
            }
            Ok(_) => {
                log::error!("❌ El backend devolvió una preferencia sin id");
                CheckoutEstado::Failed {
                    error: "Respuesta sin id de preferencia".to_string(),
                }
            }
            Err(e) => {
                log::error!("❌ Error creando preferencia: {}", e);
                CheckoutEstado::Failed { error: e }
            }
        };
        *self.estado.borrow_mut() = nuevo;
    }

    /// Volver a Idle para un intento nuevo (ej: el carrito cambió)
    pub fn reiniciar(&self) {
        *self.estado.borrow_mut() = CheckoutEstado::Idle;
    }

    pub fn estado(&self) -> CheckoutEstado {
        self.estado.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(id: &str) -> Result<PreferenceMP, String> {
        Ok(PreferenceMP { id: id.to_string() })
    }

    #[test]
    fn carrito_vacio_no_emite_request() {
        let checkout = CheckoutCoordinator::new();

        assert_eq!(checkout.iniciar(0.0), Err(CheckoutError::CarritoVacio));
        assert_eq!(checkout.iniciar(-5.0), Err(CheckoutError::CarritoVacio));
        assert_eq!(checkout.estado(), CheckoutEstado::Idle);
    }

    #[test]
    fn flujo_feliz_hasta_ready() {
        let checkout = CheckoutCoordinator::new();

        let ticket = checkout.iniciar(200.0).unwrap();
        assert_eq!(ticket.pedido.total_pedido, 200.0);
        assert!(matches!(checkout.estado(), CheckoutEstado::Requesting { .. }));

        checkout.completar(ticket.generation, pref("pref-123"));
        assert_eq!(
            checkout.estado(),
            CheckoutEstado::Ready {
                preference_id: "pref-123".to_string()
            }
        );
    }

    #[test]
    fn a_lo_sumo_un_request_en_vuelo() {
        let checkout = CheckoutCoordinator::new();

        let ticket = checkout.iniciar(100.0).unwrap();
        assert_eq!(checkout.iniciar(100.0), Err(CheckoutError::PagoEnCurso));
        assert_eq!(checkout.iniciar(300.0), Err(CheckoutError::PagoEnCurso));

        // El primer request sigue siendo el vigente
        checkout.completar(ticket.generation, pref("pref-1"));
        assert!(matches!(checkout.estado(), CheckoutEstado::Ready { .. }));
    }

    #[test]
    fn error_de_red_pasa_a_failed_y_es_recuperable() {
        let checkout = CheckoutCoordinator::new();

        let ticket = checkout.iniciar(100.0).unwrap();
        checkout.completar(ticket.generation, Err("Network error".to_string()));
        assert_eq!(
            checkout.estado(),
            CheckoutEstado::Failed {
                error: "Network error".to_string()
            }
        );

        // Reintento: un intento nuevo vuelve a Requesting
        let reintento = checkout.iniciar(100.0).unwrap();
        assert!(reintento.generation > ticket.generation);
        checkout.completar(reintento.generation, pref("pref-2"));
        assert_eq!(
            checkout.estado(),
            CheckoutEstado::Ready {
                preference_id: "pref-2".to_string()
            }
        );
    }

    #[test]
    fn id_vacio_es_respuesta_malformada() {
        let checkout = CheckoutCoordinator::new();

        let ticket = checkout.iniciar(100.0).unwrap();
        checkout.completar(ticket.generation, pref(""));
        assert!(matches!(checkout.estado(), CheckoutEstado::Failed { .. }));
    }

    #[test]
    fn respuesta_vieja_no_pisa_un_ready_mas_nuevo() {
        let checkout = CheckoutCoordinator::new();

        // Primer request falla (ej: timeout), pero su respuesta real sigue en vuelo
        let viejo = checkout.iniciar(100.0).unwrap();
        checkout.completar(viejo.generation, Err("timeout".to_string()));

        // Segundo request resuelve bien
        let nuevo = checkout.iniciar(100.0).unwrap();
        checkout.completar(nuevo.generation, pref("pref-123"));
        assert_eq!(
            checkout.estado(),
            CheckoutEstado::Ready {
                preference_id: "pref-123".to_string()
            }
        );

        // La respuesta tardía del primer request llega ahora y se descarta
        checkout.completar(viejo.generation, pref("pref-999"));
        assert_eq!(
            checkout.estado(),
            CheckoutEstado::Ready {
                preference_id: "pref-123".to_string()
            }
        );
    }

    #[test]
    fn ready_es_terminal_para_el_intento_actual() {
        let checkout = CheckoutCoordinator::new();

        let ticket = checkout.iniciar(100.0).unwrap();
        checkout.completar(ticket.generation, pref("pref-123"));
        assert_eq!(checkout.iniciar(100.0), Err(CheckoutError::PreferenciaLista));

        // reiniciar habilita un intento nuevo
        checkout.reiniciar();
        assert_eq!(checkout.estado(), CheckoutEstado::Idle);
        assert!(checkout.iniciar(100.0).is_ok());
    }

    #[test]
    fn completar_despues_de_reiniciar_se_descarta() {
        let checkout = CheckoutCoordinator::new();

        let ticket = checkout.iniciar(100.0).unwrap();
        checkout.reiniciar();

        checkout.completar(ticket.generation, pref("pref-123"));
        assert_eq!(checkout.estado(), CheckoutEstado::Idle);
    }
}
