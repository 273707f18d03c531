use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// Drives one batch run: extract search pages, transform them into price
/// ranges, load the CSV.
pub struct ScoutEngine<P: Pipeline> {
    pipeline: P,
    monitor: RunMonitor,
}

impl<P: Pipeline> ScoutEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: RunMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting price lookup run");

        let pages = self.pipeline.extract().await?;
        tracing::info!("Fetched {} search pages", pages.len());
        self.monitor.log_phase("extract");

        let results = self.pipeline.transform(pages).await?;
        tracing::info!("Determined price ranges for {} phones", results.len());
        self.monitor.log_phase("transform");

        let output_path = self.pipeline.load(results).await?;
        tracing::info!("Results written to {}", output_path);
        self.monitor.log_phase("load");

        self.monitor.log_summary();
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FetchOutcome, PageCapture, PhoneQuery, PriceRange, ResultSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counts phase invocations to check the engine drives every phase
    /// exactly once, in order.
    struct StubPipeline {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn extract(&self) -> Result<Vec<PageCapture>> {
            assert_eq!(self.calls.fetch_add(1, Ordering::SeqCst), 0);
            Ok(vec![PageCapture {
                query: PhoneQuery::new("PhoneA").unwrap(),
                outcome: FetchOutcome::Page(String::new()),
            }])
        }

        async fn transform(&self, pages: Vec<PageCapture>) -> Result<ResultSet> {
            assert_eq!(self.calls.fetch_add(1, Ordering::SeqCst), 1);
            Ok(ResultSet {
                ranges: pages
                    .into_iter()
                    .map(|c| PriceRange::from_totals(c.query, &[]))
                    .collect(),
            })
        }

        async fn load(&self, results: ResultSet) -> Result<String> {
            assert_eq!(self.calls.fetch_add(1, Ordering::SeqCst), 2);
            assert_eq!(results.len(), 1);
            Ok("out/prices.csv".to_string())
        }
    }

    #[tokio::test]
    async fn test_engine_runs_phases_in_order() {
        let engine = ScoutEngine::new(StubPipeline {
            calls: AtomicUsize::new(0),
        });

        let output = engine.run().await.unwrap();

        assert_eq!(output, "out/prices.csv");
    }
}
