use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.info("Listing catalog products");
        let products = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} products", products.len()));
        Ok(products)
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

    fn product(id: &str) -> Product {
        Product::from_repository(
            id.to_string(),
            format!("Product {id}"),
            "Ferme du Lac".to_string(),
            "Fruits".to_string(),
            "img".to_string(),
            None,
            None,
            HashMap::from([("5g".to_string(), 10.0)]),
            HashMap::new(),
        )
    }

    #[tokio::test]
    async fn should_return_all_products() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![product("a"), product("b")]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), CatalogError::Repository(_)));
    }
}
