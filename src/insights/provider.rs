use crate::error::Result;

/// A text-generation backend the insight panel can call.
///
/// Implementations perform exactly one attempt per call: no retries, and no
/// timeout beyond whatever the underlying transport applies.
pub trait InsightProvider: Send + Sync {
    /// Whether a credential is available. When this is `false` the panel
    /// fails immediately without calling [`generate`](Self::generate).
    fn is_configured(&self) -> bool;

    /// Send `prompt` to `model` and return the generated text.
    ///
    /// An empty string is a successful, empty answer.
    fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}

impl<P: InsightProvider + ?Sized> InsightProvider for Box<P> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        (**self).generate(model, prompt)
    }
}

impl<P: InsightProvider + ?Sized> InsightProvider for std::sync::Arc<P> {
    fn is_configured(&self) -> bool {
        (**self).is_configured()
    }

    fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        (**self).generate(model, prompt)
    }
}
