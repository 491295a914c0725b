use super::{DataSourceError, DemoDataSource, EntrySource};
use crate::domain::MonetaryEntry;
use async_trait::async_trait;
use std::sync::Arc;

/// Serves the primary source, or the demo dataset when the primary fails.
#[derive(Debug, Clone)]
pub struct FallbackSource {
    primary: Arc<dyn EntrySource>,
    fallback: DemoDataSource,
}

impl FallbackSource {
    pub fn new(primary: Arc<dyn EntrySource>) -> Self {
        Self {
            primary,
            fallback: DemoDataSource::new(),
        }
    }
}

#[async_trait]
impl EntrySource for FallbackSource {
    fn name(&self) -> &'static str {
        self.primary.name()
    }

    async fn load_entries(&self) -> Result<Vec<MonetaryEntry>, DataSourceError> {
        match self.primary.load_entries().await {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    source = self.primary.name(),
                    error = %e,
                    "entry source failed, serving demo data"
                );
                self.fallback.load_entries().await
            }
        }
    }
}
