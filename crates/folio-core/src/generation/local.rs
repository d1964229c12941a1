//! Offline generation: waits, then reports success

use std::time::Duration;

use async_trait::async_trait;

use super::GenerationProvider;
use crate::error::FolioResult;

#[derive(Debug, Clone, Copy)]
pub struct LocalDelayProvider {
    delay: Duration,
}

impl LocalDelayProvider {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl GenerationProvider for LocalDelayProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn generate(&self) -> FolioResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay() {
        let provider = LocalDelayProvider::new(Duration::from_secs(5));
        let start = tokio::time::Instant::now();
        provider.generate().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(5));
    }
}
