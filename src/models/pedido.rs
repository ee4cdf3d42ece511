use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pedido efímero que se manda al backend para crear la preferencia de pago
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pedido {
    pub fecha_pedido: DateTime<Utc>,
    pub total_pedido: f64,
}

/// Respuesta del backend: id de preferencia de Mercado Pago
/// Se consume en el checkout actual y nunca se persiste
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceMP {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn pedido_serializa_en_camel_case_con_fecha_iso8601() {
        let pedido = Pedido {
            fecha_pedido: Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap(),
            total_pedido: 1500.0,
        };
        let json = serde_json::to_value(&pedido).unwrap();
        assert_eq!(json["totalPedido"], 1500.0);
        assert_eq!(json["fechaPedido"], "2024-06-01T12:30:00Z");
    }

    #[test]
    fn preference_deserializa_el_id() {
        let pref: PreferenceMP = serde_json::from_str("{\"id\":\"pref-123\"}").unwrap();
        assert_eq!(pref.id, "pref-123");
    }
}
