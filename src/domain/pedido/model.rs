use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Pedido Domain Models
// ============================================================================

/// Known cookie flavors. Fixed at build time, served verbatim by the API.
/// Membership is advisory only: the schema does not enforce it.
pub const SABORES_VALIDOS: &[&str] = &[
    "Pistacho",
    "Rocher",
    "Sweet",
    "Velvet",
    "Kinder",
    "Rasta",
    "Cadbury",
    "Milka",
    "Blackblock",
    "Coco",
    "Doublechocolate",
];

/// One flavor line inside a pedido. Never outlives its parent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, FromRow)]
pub struct PedidoItem {
    pub sabor: String,
    pub cantidad: i64,
}

/// A customer order as persisted, with its items attached after the row read.
#[derive(Serialize, Clone, Debug, FromRow)]
pub struct Pedido {
    pub id: i64,
    pub dia: String,
    pub nombre: String,
    pub precio_pedido: f64,
    pub precio_envio: f64,
    pub direccion: Option<String>,
    pub horario: Option<String>,
    pub pago: bool,
    pub fecha_registro: NaiveDateTime,
    #[sqlx(skip)]
    pub items: Vec<PedidoItem>,
}

/// Incoming order payload for create/update.
///
/// Presence rules mirror the wire contract: `dia`, `nombre`, `precio_pedido`
/// and `items` are required; everything else falls back to a default.
/// An absent `pago` means unpaid.
#[derive(Deserialize, Clone, Debug)]
pub struct PedidoDraft {
    pub dia: String,
    pub nombre: String,
    pub precio_pedido: f64,
    #[serde(default)]
    pub precio_envio: f64,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub horario: Option<String>,
    #[serde(default)]
    pub pago: bool,
    pub items: Vec<PedidoItem>,
}

// ============================================================================
// Unit Tests
// ============================================================================
