use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, CatalogError> {
        self.logger
            .debug(&format!("Fetching product {}", params.id));

        self.repository
            .get_by_id(&params.id)
            .await?
            .ok_or(CatalogError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use std::collections::HashMap;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: &str) -> Result<Option<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_found() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(Some(Product::from_repository(
                id.to_string(),
                "Cerises".to_string(),
                "Ferme du Valais".to_string(),
                "Fruits".to_string(),
                "img".to_string(),
                None,
                None,
                HashMap::from([("5g".to_string(), 10.0)]),
                HashMap::new(),
            )))
        });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams {
                id: "p-1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(product.id, "p-1");
        assert_eq!(product.name, "Cerises");
    }

    #[tokio::test]
    async fn should_error_when_absent() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: "ghost".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CatalogError::NotFound));
    }
}
