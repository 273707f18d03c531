use crate::domain::model::{PageCapture, ResultSet};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn search_endpoint(&self) -> &str;
    fn language(&self) -> &str;
    fn country(&self) -> &str;
    fn input_file(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_file(&self) -> &str;
    fn request_timeout_secs(&self) -> u64;
    fn trim_outliers(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<PageCapture>>;
    async fn transform(&self, pages: Vec<PageCapture>) -> Result<ResultSet>;
    async fn load(&self, results: ResultSet) -> Result<String>;
}
