use anyhow::Result;
use model::product::{CreateProductRequest, Product, UpdateProductRequest};
use uuid::Uuid;

use crate::db::BiolinkDb;

impl BiolinkDb {
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self, profile_id: Uuid) -> Result<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
SELECT id, profile_id, title, description, price_cents, currency, url, image_key, position, created_at, updated_at
FROM products
WHERE profile_id = $1
ORDER BY position, created_at
            "#,
        )
        .bind(profile_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn create_product(
        &self,
        profile_id: Uuid,
        request: &CreateProductRequest,
    ) -> Result<Product> {
        let product = sqlx::query_as::<_, Product>(
            r#"
INSERT INTO products (id, profile_id, title, description, price_cents, currency, url, position)
VALUES ($1, $2, $3, $4, $5, $6, $7, (SELECT COALESCE(MAX(position) + 1, 0) FROM products WHERE profile_id = $2))
RETURNING id, profile_id, title, description, price_cents, currency, url, image_key, position, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(profile_id)
        .bind(&request.title)
        .bind(request.description.as_deref().unwrap_or(""))
        .bind(request.price_cents)
        .bind(request.currency.as_deref().unwrap_or("USD"))
        .bind(&request.url)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Applies the non-media fields of an update request. The product image
    /// is set separately once the photo id has been resolved to an object
    /// key.
    #[tracing::instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        profile_id: Uuid,
        product_id: Uuid,
        request: &UpdateProductRequest,
    ) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
UPDATE products
SET title = COALESCE($3, title),
    description = COALESCE($4, description),
    price_cents = COALESCE($5, price_cents),
    currency = COALESCE($6, currency),
    url = COALESCE($7, url),
    updated_at = NOW()
WHERE id = $2 AND profile_id = $1
RETURNING id, profile_id, title, description, price_cents, currency, url, image_key, position, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(product_id)
        .bind(&request.title)
        .bind(&request.description)
        .bind(request.price_cents)
        .bind(&request.currency)
        .bind(&request.url)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn set_product_image(
        &self,
        profile_id: Uuid,
        product_id: Uuid,
        image_key: &str,
    ) -> Result<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
UPDATE products
SET image_key = $3, updated_at = NOW()
WHERE id = $2 AND profile_id = $1
RETURNING id, profile_id, title, description, price_cents, currency, url, image_key, position, created_at, updated_at
            "#,
        )
        .bind(profile_id)
        .bind(product_id)
        .bind(image_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, profile_id: Uuid, product_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $2 AND profile_id = $1")
            .bind(profile_id)
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
