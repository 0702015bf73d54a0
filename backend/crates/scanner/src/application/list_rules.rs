//! List Rules Use Case

use crate::domain::repository::RuleCatalog;
use crate::error::ScannerResult;
use std::sync::Arc;

pub struct ListRulesUseCase<C>
where
    C: RuleCatalog,
{
    catalog: Arc<C>,
}

impl<C> ListRulesUseCase<C>
where
    C: RuleCatalog,
{
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub async fn execute(&self) -> ScannerResult<Vec<String>> {
        let rules = self.catalog.list().await?;
        tracing::debug!(count = rules.len(), "Listed rule files");
        Ok(rules)
    }
}
