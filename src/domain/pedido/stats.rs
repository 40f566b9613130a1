use std::collections::BTreeMap;

use serde::Serialize;

use super::errors::PedidoError;
use super::model::Pedido;
use super::store::PedidoStore;

// ============================================================================
// Statistics Aggregator
// ============================================================================
//
// Folds the entire current order set into production and revenue aggregates
// in one pass. No filtering, no date ranges. Items are fetched per pedido by
// the store; with the small order volumes this backend sees, that trade of
// query count for simplicity is acceptable.
//
// ============================================================================

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct Estadisticas {
    /// Flavor -> total quantity across every pedido.
    pub produccion_total: BTreeMap<String, i64>,
    /// Day label -> flavor -> quantity.
    pub produccion_por_dia: BTreeMap<String, BTreeMap<String, i64>>,
    /// Sum of order price + shipping over all pedidos, rounded to cents.
    pub total_recaudado: f64,
    pub total_pedidos: i64,
    pub pedidos_pagados: i64,
    pub pedidos_pendientes: i64,
    /// Grand total across all flavors.
    pub total_cookies: i64,
}

impl Estadisticas {
    /// Pure fold over an already-loaded order set (items attached).
    /// An empty set yields all-zero aggregates.
    pub fn from_pedidos(pedidos: &[Pedido]) -> Self {
        let mut stats = Estadisticas::default();
        let mut recaudado = 0.0;

        for pedido in pedidos {
            recaudado += pedido.precio_pedido + pedido.precio_envio;
            stats.total_pedidos += 1;

            if pedido.pago {
                stats.pedidos_pagados += 1;
            } else {
                stats.pedidos_pendientes += 1;
            }

            let por_dia = stats.produccion_por_dia.entry(pedido.dia.clone()).or_default();
            for item in &pedido.items {
                *stats.produccion_total.entry(item.sabor.clone()).or_default() += item.cantidad;
                *por_dia.entry(item.sabor.clone()).or_default() += item.cantidad;
                stats.total_cookies += item.cantidad;
            }
        }

        stats.total_recaudado = (recaudado * 100.0).round() / 100.0;
        stats
    }

    /// Load the full order set through the store and fold it.
    pub async fn recolectar(store: &PedidoStore) -> Result<Self, PedidoError> {
        let pedidos = store.list().await?;
        Ok(Self::from_pedidos(&pedidos))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
