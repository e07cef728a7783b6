use crate::catalog::repository::{CatalogError, ProductRepository};
use crate::domain::{Product, ProductFields};

/// Thin orchestration over the repository. The only business rule that lives
/// here is id assignment on create; everything else forwards.
#[derive(Debug, Clone)]
pub struct CatalogService {
    repository: ProductRepository,
}

impl CatalogService {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, CatalogError> {
        self.repository.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, CatalogError> {
        self.repository.get_by_id(id).await
    }

    /// Assigns `get_last_id() + 1` (1 on an empty catalog) and appends.
    /// The last id is whatever sits at the tail of the file, so deleting a
    /// mid-list record never shifts the sequence - but deleting the tail
    /// record hands its id to the next create.
    pub async fn create(&self, fields: ProductFields) -> Result<Product, CatalogError> {
        let next_id = self.repository.get_last_id().await? + 1;
        let product = self.repository.save(next_id, fields).await?;
        tracing::debug!(id = product.id, "product created");
        Ok(product)
    }

    pub async fn update(&self, id: i64, fields: ProductFields) -> Result<Product, CatalogError> {
        self.repository.update(id, fields).await
    }

    pub async fn update_name(&self, id: i64, name: &str) -> Result<Product, CatalogError> {
        self.repository.update_name(id, name).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), CatalogError> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::JsonStore;

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            quantity: 2,
            code_value: "C0D3".to_string(),
            is_published: true,
            expiration: "01/01/2030".to_string(),
            price: 10.0,
        }
    }

    async fn service(dir: &tempfile::TempDir) -> CatalogService {
        let store = JsonStore::new(dir.path().join("products.json"));
        store.write(&[]).await.expect("seed");
        CatalogService::new(ProductRepository::new(store))
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids_from_one() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = service(&dir).await;

        let first = svc.create(fields("first")).await.expect("create");
        let second = svc.create(fields("second")).await.expect("create");
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert_eq!(svc.get_by_id(2).await.expect("get").name, "second");
    }

    #[tokio::test]
    async fn deleting_a_mid_list_record_does_not_shift_the_sequence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = service(&dir).await;

        svc.create(fields("a")).await.expect("create");
        let b = svc.create(fields("b")).await.expect("create");
        svc.delete(1).await.expect("delete");

        // Last element in read order is still b, so the next id follows it.
        let c = svc.create(fields("c")).await.expect("create");
        assert_eq!(c.id, b.id + 1);
    }

    #[tokio::test]
    async fn deleting_the_tail_record_reuses_its_id() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = service(&dir).await;

        let a = svc.create(fields("a")).await.expect("create");
        let b = svc.create(fields("b")).await.expect("create");
        svc.delete(b.id).await.expect("delete");

        // With b gone, a is the tail again and b's id gets handed out anew.
        let c = svc.create(fields("c")).await.expect("create");
        assert_eq!(c.id, a.id + 1);
        assert_eq!(c.id, b.id);
    }
}
