// ============================================================================
// Domain Layer
// ============================================================================
//
// One aggregate for now: the pedido (customer order) and its flavor lines.
// Each aggregate gets its own subdirectory with models, errors, the store,
// and whatever read-side logic it owns.
//
// ============================================================================

pub mod pedido;
