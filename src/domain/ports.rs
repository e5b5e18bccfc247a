use crate::domain::model::{GenerationOutput, GenerationParams};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 文字生成後端。錯誤原樣往上傳，不重試
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn model_id(&self) -> &str;

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<GenerationOutput>;
}
