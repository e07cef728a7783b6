use crate::domain::{Product, ProductFields};
use crate::store::{JsonStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("product {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// CRUD over the full catalog. Every operation re-reads the whole collection
/// from the store before acting, and mutations rewrite the whole collection
/// after. O(n) linear scans throughout; the domain assumes a small,
/// single-process, low-concurrency catalog.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: JsonStore,
}

impl ProductRepository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.read().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, CatalogError> {
        let products = self.store.read().await?;
        products
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Id of the last element in read order, 0 when the catalog is empty.
    /// Elements are appended in creation order and never re-sorted, so this
    /// is the last id handed out - not necessarily the maximum.
    pub async fn get_last_id(&self) -> Result<i64, CatalogError> {
        let products = self.store.read().await?;
        Ok(products.last().map(|p| p.id).unwrap_or(0))
    }

    /// Appends a new product with the supplied id. The caller computes a
    /// fresh id via `get_last_id() + 1`; no collision check happens here.
    pub async fn save(&self, id: i64, fields: ProductFields) -> Result<Product, CatalogError> {
        let mut products = self.store.read().await?;
        let product = fields.into_product(id);
        products.push(product.clone());
        self.store.write(&products).await?;
        Ok(product)
    }

    /// Replaces the full record matching `id`, preserving the id.
    pub async fn update(&self, id: i64, fields: ProductFields) -> Result<Product, CatalogError> {
        let mut products = self.store.read().await?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        *slot = fields.into_product(id);
        let updated = slot.clone();
        self.store.write(&products).await?;
        Ok(updated)
    }

    pub async fn update_name(&self, id: i64, name: &str) -> Result<Product, CatalogError> {
        let mut products = self.store.read().await?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        slot.name = name.to_string();
        let updated = slot.clone();
        self.store.write(&products).await?;
        Ok(updated)
    }

    /// Removes the first (and assumed only) entry matching `id`.
    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        let mut products = self.store.read().await?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        products.remove(index);
        self.store.write(&products).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, price: f64) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            quantity: 5,
            code_value: "ABC123".to_string(),
            is_published: true,
            expiration: "15/09/2022".to_string(),
            price,
        }
    }

    async fn seeded_repo(dir: &tempfile::TempDir, seed: &[Product]) -> ProductRepository {
        let store = JsonStore::new(dir.path().join("products.json"));
        store.write(seed).await.expect("seed");
        ProductRepository::new(store)
    }

    #[tokio::test]
    async fn save_then_get_by_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = seeded_repo(&dir, &[]).await;

        let saved = repo.save(1, fields("yogurt", 4.25)).await.expect("save");
        assert_eq!(saved.id, 1);

        let found = repo.get_by_id(1).await.expect("get");
        assert_eq!(found, saved);
        assert_eq!(repo.get_all().await.expect("all").len(), 1);
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = seeded_repo(&dir, &[]).await;

        let err = repo.get_by_id(42).await.expect_err("should fail");
        assert!(matches!(err, CatalogError::NotFound(42)));
    }

    #[tokio::test]
    async fn last_id_is_read_order_not_maximum() {
        let dir = tempfile::tempdir().expect("tempdir");
        let seed = vec![
            fields("a", 1.0).into_product(7),
            fields("b", 2.0).into_product(3),
        ];
        let repo = seeded_repo(&dir, &seed).await;

        assert_eq!(repo.get_last_id().await.expect("last id"), 3);
    }

    #[tokio::test]
    async fn last_id_is_zero_when_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = seeded_repo(&dir, &[]).await;

        assert_eq!(repo.get_last_id().await.expect("last id"), 0);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_preserves_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = seeded_repo(&dir, &[fields("old", 1.0).into_product(1)]).await;

        let updated = repo.update(1, fields("new", 9.99)).await.expect("update");
        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "new");
        assert_eq!(repo.get_by_id(1).await.expect("get").price, 9.99);
    }

    #[tokio::test]
    async fn update_name_only_touches_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = seeded_repo(&dir, &[fields("old", 1.5).into_product(1)]).await;

        let updated = repo.update_name(1, "renamed").await.expect("rename");
        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.price, 1.5);
    }

    #[tokio::test]
    async fn delete_removes_from_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let seed = vec![
            fields("a", 1.0).into_product(1),
            fields("b", 2.0).into_product(2),
        ];
        let repo = seeded_repo(&dir, &seed).await;

        repo.delete(1).await.expect("delete");
        assert!(matches!(
            repo.get_by_id(1).await,
            Err(CatalogError::NotFound(1))
        ));
        let remaining = repo.get_all().await.expect("all");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        let err = repo.delete(1).await.expect_err("second delete fails");
        assert!(matches!(err, CatalogError::NotFound(1)));
    }
}
