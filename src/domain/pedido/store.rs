use sqlx::SqlitePool;

use super::errors::PedidoError;
use super::model::{Pedido, PedidoDraft, PedidoItem};

// ============================================================================
// Pedido Store - Transactional Persistence
// ============================================================================
//
// Owns the two-table schema (pedidos + pedido_items) and performs every
// read/write against it. Writes that touch both tables run inside one
// transaction: either the pedido row and all of its item rows land, or none
// do. Nothing is cached; every read goes back to SQLite.
//
// ============================================================================

#[derive(Clone)]
pub struct PedidoStore {
    pool: SqlitePool,
}

impl PedidoStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All pedidos ordered by day label, then registration time, each with
    /// its items attached. One item query per pedido, insertion order kept.
    pub async fn list(&self) -> Result<Vec<Pedido>, PedidoError> {
        let mut pedidos =
            sqlx::query_as::<_, Pedido>("SELECT * FROM pedidos ORDER BY dia, fecha_registro")
                .fetch_all(&self.pool)
                .await?;

        for pedido in &mut pedidos {
            pedido.items = self.items_for(pedido.id).await?;
        }

        Ok(pedidos)
    }

    /// Persist a new pedido and its items as one unit. Returns the generated
    /// id. Payment always starts as unpaid regardless of the payload.
    pub async fn create(&self, draft: &PedidoDraft) -> Result<i64, PedidoError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO pedidos (dia, nombre, precio_pedido, precio_envio, direccion, horario)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&draft.dia)
        .bind(&draft.nombre)
        .bind(draft.precio_pedido)
        .bind(draft.precio_envio)
        .bind(draft.direccion.as_deref().unwrap_or(""))
        .bind(draft.horario.as_deref().unwrap_or(""))
        .execute(&mut *tx)
        .await?;

        let pedido_id = result.last_insert_rowid();
        insert_items(&mut tx, pedido_id, &draft.items).await?;

        tx.commit().await?;
        Ok(pedido_id)
    }

    pub async fn get(&self, id: i64) -> Result<Pedido, PedidoError> {
        let mut pedido = sqlx::query_as::<_, Pedido>("SELECT * FROM pedidos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(PedidoError::NotFound)?;

        pedido.items = self.items_for(id).await?;
        Ok(pedido)
    }

    /// Overwrite the pedido's fields and wholesale-replace its items: every
    /// existing item row is deleted and the provided list inserted in its
    /// place. An item missing from the new list is gone, even if unchanged.
    pub async fn update(&self, id: i64, draft: &PedidoDraft) -> Result<(), PedidoError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE pedidos
             SET dia = ?, nombre = ?, precio_pedido = ?, precio_envio = ?,
                 direccion = ?, horario = ?, pago = ?
             WHERE id = ?",
        )
        .bind(&draft.dia)
        .bind(&draft.nombre)
        .bind(draft.precio_pedido)
        .bind(draft.precio_envio)
        .bind(draft.direccion.as_deref().unwrap_or(""))
        .bind(draft.horario.as_deref().unwrap_or(""))
        .bind(draft.pago)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(PedidoError::NotFound);
        }

        sqlx::query("DELETE FROM pedido_items WHERE pedido_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        insert_items(&mut tx, id, &draft.items).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Remove the pedido; its items follow by cascade. Deleting an id that
    /// does not exist reports NotFound, never success.
    pub async fn delete(&self, id: i64) -> Result<(), PedidoError> {
        let result = sqlx::query("DELETE FROM pedidos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(PedidoError::NotFound);
        }

        Ok(())
    }

    /// Flip the paid flag in place and return the new value.
    pub async fn toggle_pago(&self, id: i64) -> Result<bool, PedidoError> {
        sqlx::query_scalar::<_, bool>(
            "UPDATE pedidos SET pago = 1 - pago WHERE id = ? RETURNING pago",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(PedidoError::NotFound)
    }

    async fn items_for(&self, pedido_id: i64) -> Result<Vec<PedidoItem>, sqlx::Error> {
        sqlx::query_as::<_, PedidoItem>(
            "SELECT sabor, cantidad FROM pedido_items WHERE pedido_id = ? ORDER BY item_id",
        )
        .bind(pedido_id)
        .fetch_all(&self.pool)
        .await
    }
}

async fn insert_items(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    pedido_id: i64,
    items: &[PedidoItem],
) -> Result<(), sqlx::Error> {
    for item in items {
        sqlx::query("INSERT INTO pedido_items (pedido_id, sabor, cantidad) VALUES (?, ?, ?)")
            .bind(pedido_id)
            .bind(&item.sabor)
            .bind(item.cantidad)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
