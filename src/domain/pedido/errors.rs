// ============================================================================
// Pedido Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PedidoError {
    #[error("Pedido no encontrado")]
    NotFound,

    #[error("Entrada inválida: {0}")]
    Validation(String),

    #[error("Error de almacenamiento: {0}")]
    Storage(#[from] sqlx::Error),
}

impl PedidoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, PedidoError::NotFound)
    }
}
