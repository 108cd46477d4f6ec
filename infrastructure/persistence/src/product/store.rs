use async_trait::async_trait;
use sqlx::{Sqlite, SqliteExecutor, SqlitePool};

use business::domain::errors::StorageError;
use business::domain::product::model::Product;
use business::domain::product::store::LocalCatalogStore;

use super::entity::{ProductEntity, image_column};

pub struct ProductStoreSqlite {
    pool: SqlitePool,
}

impl ProductStoreSqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Writes one product.
///
/// With an identity the row is replaced wholesale, dropping any other row that
/// collides on the natural key. Without one, an equal row keeps its identity and
/// a new row gets a fresh one.
async fn upsert<'e>(executor: impl SqliteExecutor<'e>, product: &Product) -> Result<(), StorageError> {
    let query = match product.id {
        Some(id) => sqlx::query::<Sqlite>(
            r#"INSERT OR REPLACE INTO products (id, product_name, product_type, price, tax, image)
            VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(id),
        None => sqlx::query::<Sqlite>(
            r#"INSERT INTO products (product_name, product_type, price, tax, image)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (product_name, product_type, price, tax, image) DO NOTHING"#,
        ),
    };

    query
        .bind(&product.name)
        .bind(&product.product_type)
        .bind(product.price)
        .bind(product.tax)
        .bind(image_column(product))
        .execute(executor)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to upsert product");
            StorageError::database()
        })?;

    Ok(())
}

#[async_trait]
impl LocalCatalogStore for ProductStoreSqlite {
    async fn upsert_many(&self, products: &[Product]) -> Result<(), StorageError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| StorageError::database())?;

        for product in products {
            upsert(&mut *tx, product).await?;
        }

        tx.commit().await.map_err(|_| StorageError::database())?;
        tracing::debug!(count = products.len(), "cached products");
        Ok(())
    }

    async fn upsert_one(&self, product: &Product) -> Result<(), StorageError> {
        upsert(&self.pool, product).await
    }

    async fn read_all(&self) -> Result<Vec<Product>, StorageError> {
        let entities = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, product_name, product_type, price, tax, image FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| StorageError::database())?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
