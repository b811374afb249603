use crate::error::GenerateError;
use crate::form::FormData;
use async_trait::async_trait;

mod http;

pub use http::HttpDescriptionClient;

/// The external description-generation collaborator.
///
/// One call per submission; implementations map every failure into the
/// [`GenerateError`] taxonomy so the workflow can render a single message.
#[async_trait]
pub trait DescriptionClient: Send + Sync {
    async fn generate(&self, form: &FormData) -> Result<String, GenerateError>;
}
