//! # Basket Repository
//!
//! SQLite-backed [`BasketStore`].
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       save(NewBasket)                                   │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │    INSERT INTO baskets (created_at)          → last_insert_rowid = id   │
//! │    INSERT INTO basket_items (basket_id, position = 0, ...)              │
//! │    INSERT INTO basket_items (basket_id, position = 1, ...)              │
//! │    ...                                                                  │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Any failure before COMMIT drops the transaction, which rolls back:    │
//! │  no basket row without its items, no orphaned items.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Line totals are written once and read back verbatim; they are never
//! recomputed from unit price and quantity.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::debug;

use basket_core::{Basket, BasketId, BasketItem, Money, NewBasket};

use crate::error::{DbError, DbResult};
use crate::store::BasketStore;

/// Repository for basket database operations.
#[derive(Debug, Clone)]
pub struct BasketRepository {
    pool: SqlitePool,
}

/// Row of the `baskets` table.
#[derive(Debug, sqlx::FromRow)]
struct BasketRow {
    id: i64,
    created_at: DateTime<Utc>,
}

/// Row of the `basket_items` table.
#[derive(Debug, sqlx::FromRow)]
struct BasketItemRow {
    name: String,
    unit_price: String,
    quantity: i64,
    line_total: String,
}

impl BasketItemRow {
    fn into_item(self) -> DbResult<BasketItem> {
        let unit_price = parse_money("unit_price", &self.unit_price)?;
        let line_total = parse_money("line_total", &self.line_total)?;
        Ok(BasketItem::from_stored(
            self.name,
            unit_price,
            self.quantity,
            line_total,
        ))
    }
}

fn parse_money(column: &str, raw: &str) -> DbResult<Money> {
    Money::from_str(raw).map_err(|e| {
        DbError::corrupt(
            "basket_items",
            format!("{} {:?} is not a decimal: {}", column, raw, e),
        )
    })
}

impl BasketRepository {
    /// Creates a new BasketRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BasketRepository { pool }
    }

    /// Number of stored baskets.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM baskets")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Gets all items for a basket in insertion order.
    async fn get_items(&self, basket_id: BasketId) -> DbResult<Vec<BasketItem>> {
        let rows: Vec<BasketItemRow> = sqlx::query_as(
            r#"
            SELECT name, unit_price, quantity, line_total
            FROM basket_items
            WHERE basket_id = ?1
            ORDER BY position
            "#,
        )
        .bind(basket_id.get())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(BasketItemRow::into_item).collect()
    }
}

#[async_trait]
impl BasketStore for BasketRepository {
    async fn save(&self, basket: NewBasket) -> DbResult<Basket> {
        let created_at = Utc::now();
        let items = basket.into_items();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let raw_id = sqlx::query("INSERT INTO baskets (created_at) VALUES (?1)")
            .bind(created_at)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        let id = BasketId::new(raw_id);

        debug!(%id, items = items.len(), "Inserting basket");

        for (position, item) in items.iter().enumerate() {
            let position = i64::try_from(position)
                .map_err(|_| DbError::Internal("item position out of range".to_string()))?;

            sqlx::query(
                r#"
                INSERT INTO basket_items (
                    basket_id, position, name, unit_price, quantity, line_total
                ) VALUES (
                    ?1, ?2, ?3, ?4, ?5, ?6
                )
                "#,
            )
            .bind(id.get())
            .bind(position)
            .bind(item.name())
            .bind(item.unit_price().amount().to_string())
            .bind(item.quantity())
            .bind(item.line_total().amount().to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Basket {
            id,
            items,
            created_at,
        })
    }

    async fn find_by_id(&self, id: BasketId) -> DbResult<Option<Basket>> {
        let row: Option<BasketRow> =
            sqlx::query_as("SELECT id, created_at FROM baskets WHERE id = ?1")
                .bind(id.get())
                .fetch_optional(&self.pool)
                .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = self.get_items(id).await?;

        Ok(Some(Basket {
            id: BasketId::new(row.id),
            items,
            created_at: row.created_at,
        }))
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repository() -> BasketRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().baskets()
    }

    fn item(name: &str, price: &str, qty: i64) -> BasketItem {
        BasketItem::new(name, price.parse::<Money>().unwrap(), qty).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_load_preserves_order_and_totals() {
        let repo = repository().await;

        let draft = NewBasket::new(vec![
            item("스마트폰 케이스", "15000", 1),
            item("보호필름", "5000", 1),
            item("충전 케이블", "1234.56", 3),
        ])
        .unwrap();

        let saved = repo.save(draft).await.unwrap();
        assert_eq!(saved.id, BasketId::new(1));

        let loaded = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.id, saved.id);
        assert_eq!(loaded.items, saved.items);

        let names: Vec<&str> = loaded.items.iter().map(BasketItem::name).collect();
        assert_eq!(names, vec!["스마트폰 케이스", "보호필름", "충전 케이블"]);
        assert_eq!(
            loaded.items[2].line_total(),
            "3703.68".parse::<Money>().unwrap()
        );
    }

    #[tokio::test]
    async fn test_decimal_text_survives_storage() {
        let repo = repository().await;

        let saved = repo
            .save(NewBasket::new(vec![item("상품", "10000.01", 1)]).unwrap())
            .await
            .unwrap();
        let loaded = repo.find_by_id(saved.id).await.unwrap().unwrap();

        assert_eq!(
            loaded.items[0].unit_price().amount().to_string(),
            "10000.01"
        );
    }

    #[tokio::test]
    async fn test_find_unknown_basket() {
        let repo = repository().await;
        assert!(repo.find_by_id(BasketId::new(42)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique_and_increasing() {
        let repo = repository().await;

        let first = repo
            .save(NewBasket::new(vec![item("a", "1000", 1)]).unwrap())
            .await
            .unwrap();
        let second = repo
            .save(NewBasket::new(vec![item("b", "2000", 2)]).unwrap())
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(repo.count().await.unwrap(), 2);

        let loaded = repo.find_by_id(first.id).await.unwrap().unwrap();
        assert_eq!(loaded.items.len(), 1);
        assert_eq!(loaded.items[0].name(), "a");
    }

    #[tokio::test]
    async fn test_corrupt_price_is_reported() {
        let repo = repository().await;
        let saved = repo
            .save(NewBasket::new(vec![item("a", "1000", 1)]).unwrap())
            .await
            .unwrap();

        sqlx::query("UPDATE basket_items SET unit_price = 'abc' WHERE basket_id = ?1")
            .bind(saved.id.get())
            .execute(&repo.pool)
            .await
            .unwrap();

        let err = repo.find_by_id(saved.id).await.unwrap_err();
        assert!(matches!(err, DbError::CorruptRow { .. }));
    }

    #[tokio::test]
    async fn test_health_check() {
        let repo = repository().await;
        assert!(repo.health_check().await);
    }
}
