// ============================================================================
// CART STORE - Carrito con merge por identidad
// ============================================================================
// A lo sumo una línea por instrumento; repetir agregar incrementa cantidad.
// Solo en memoria: el carrito no sobrevive al reload.
// Los totales se recalculan siempre desde las líneas, nunca se cachean.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{CartInstrumento, Instrumento};

#[derive(Clone, Default)]
pub struct CartStore {
    items: Rc<RefCell<Vec<CartInstrumento>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar al carrito: si el instrumento ya está, incrementa su cantidad;
    /// si no, agrega una línea nueva con snapshot de precio y display.
    /// Toda la actualización ocurre dentro de un solo borrow, así clicks
    /// rápidos repetidos no pierden incrementos ni duplican líneas.
    pub fn agregar(&self, item: &Instrumento) {
        let mut items = self.items.borrow_mut();
        match items.iter_mut().find(|linea| linea.id == item.id) {
            Some(linea) => linea.cantidad += 1,
            None => items.push(CartInstrumento::desde(item)),
        }
    }

    /// Incrementar una línea ya existente (botón "+" del drawer).
    /// Con id ausente no hace nada.
    pub fn incrementar(&self, id: u64) {
        let mut items = self.items.borrow_mut();
        if let Some(linea) = items.iter_mut().find(|linea| linea.id == id) {
            linea.cantidad += 1;
        }
    }

    /// Quitar una unidad: cantidad > 1 decrementa, cantidad == 1 elimina la
    /// línea (nunca queda una línea con cantidad 0). Id ausente es no-op.
    pub fn quitar(&self, id: u64) {
        let mut items = self.items.borrow_mut();
        if let Some(pos) = items.iter().position(|linea| linea.id == id) {
            if items[pos].cantidad > 1 {
                items[pos].cantidad -= 1;
            } else {
                items.remove(pos);
            }
        }
    }

    /// Vaciar el carrito incondicionalmente
    pub fn limpiar(&self) {
        self.items.borrow_mut().clear();
    }

    /// Snapshot de las líneas para renderizar
    pub fn items(&self) -> Vec<CartInstrumento> {
        self.items.borrow().clone()
    }

    /// Σ cantidad, recalculado en cada llamada
    pub fn total_items(&self) -> u32 {
        self.items.borrow().iter().map(|linea| linea.cantidad).sum()
    }

    /// Σ cantidad × precio, recalculado en cada llamada
    pub fn total_amount(&self) -> f64 {
        self.items
            .borrow()
            .iter()
            .map(|linea| f64::from(linea.cantidad) * linea.precio)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instrumento(id: u64, precio: f64) -> Instrumento {
        Instrumento {
            id,
            instrumento: format!("Guitarra {}", id),
            marca: "Fender".to_string(),
            modelo: "Stratocaster".to_string(),
            imagen: "img.jpg".to_string(),
            precio,
            costo_envio: "G".to_string(),
            cantidad_vendida: 0,
            descripcion: String::new(),
            categoria: None,
        }
    }

    #[test]
    fn agregar_repetido_incrementa_sin_duplicar_lineas() {
        let cart = CartStore::new();
        let item = instrumento(1, 100.0);

        cart.agregar(&item);
        cart.agregar(&item);
        cart.agregar(&item);

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].cantidad, 3);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn escenario_agregar_dos_quitar_dos() {
        let cart = CartStore::new();
        let item = instrumento(1, 100.0);

        cart.agregar(&item);
        cart.agregar(&item);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_amount(), 200.0);

        cart.quitar(1);
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.items()[0].cantidad, 1);

        cart.quitar(1);
        assert!(cart.items().is_empty());
        assert_eq!(cart.total_amount(), 0.0);
    }

    #[test]
    fn quitar_id_ausente_es_noop() {
        let cart = CartStore::new();
        cart.agregar(&instrumento(1, 50.0));

        cart.quitar(99);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn incrementar_solo_afecta_lineas_existentes() {
        let cart = CartStore::new();
        cart.agregar(&instrumento(1, 50.0));

        cart.incrementar(1);
        assert_eq!(cart.total_items(), 2);

        cart.incrementar(99);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn totales_con_varias_lineas() {
        let cart = CartStore::new();
        cart.agregar(&instrumento(1, 100.0));
        cart.agregar(&instrumento(1, 100.0));
        cart.agregar(&instrumento(2, 250.0));

        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.total_amount(), 450.0);
    }

    #[test]
    fn el_snapshot_de_precio_no_sigue_al_catalogo() {
        let cart = CartStore::new();
        let mut item = instrumento(1, 100.0);
        cart.agregar(&item);

        // El catálogo cambia después de agregar
        item.precio = 900.0;
        assert_eq!(cart.total_amount(), 100.0);
    }

    #[test]
    fn totales_leidos_a_traves_de_un_ref_compartido() {
        // Mismo patrón de lectura que el hook use_cart: el store vive en un
        // Rc<RefCell> y los totales se sacan en un scope propio
        let store = Rc::new(RefCell::new(CartStore::new()));
        store.borrow().agregar(&instrumento(1, 100.0));
        store.borrow().agregar(&instrumento(1, 100.0));
        store.borrow().agregar(&instrumento(2, 50.0));

        let (total_items, total_amount) = {
            let store = store.borrow();
            (store.total_items(), store.total_amount())
        };

        assert_eq!(total_items, 3);
        assert_eq!(total_amount, 250.0);
    }

    #[test]
    fn limpiar_vacia_todo() {
        let cart = CartStore::new();
        cart.agregar(&instrumento(1, 100.0));
        cart.agregar(&instrumento(2, 200.0));

        cart.limpiar();
        assert!(cart.items().is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), 0.0);
    }

    #[test]
    fn invariantes_tras_secuencia_arbitraria() {
        let cart = CartStore::new();
        let a = instrumento(1, 10.0);
        let b = instrumento(2, 20.0);

        cart.agregar(&a);
        cart.agregar(&b);
        cart.agregar(&a);
        cart.quitar(2);
        cart.agregar(&b);
        cart.quitar(1);
        cart.agregar(&a);

        let items = cart.items();
        let mut ids: Vec<u64> = items.iter().map(|linea| linea.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len(), "ids únicos por línea");
        assert!(items.iter().all(|linea| linea.cantidad >= 1));
        assert_eq!(
            cart.total_items(),
            items.iter().map(|linea| linea.cantidad).sum::<u32>()
        );
    }
}
