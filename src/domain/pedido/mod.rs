// ============================================================================
// Pedido Domain - Orders and Their Flavor Lines
// ============================================================================
//
// Everything pedido-specific lives here:
// - Models (Pedido, PedidoItem, PedidoDraft, the flavor list)
// - Errors (PedidoError taxonomy)
// - Store (transactional persistence over the two-table schema)
// - Stats (single-pass production/revenue aggregation)
//
// ============================================================================

pub mod errors;
pub mod model;
pub mod stats;
pub mod store;

// Re-export for convenience
pub use errors::*;
pub use model::*;
pub use stats::*;
pub use store::*;
