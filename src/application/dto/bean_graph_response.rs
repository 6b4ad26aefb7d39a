use crate::application::read_models::BeanGraphReadModel;

/// BeanGraphResponse - Response DTO from the bean graph use case
#[derive(Debug, Clone)]
pub struct BeanGraphResponse {
    pub read_model: BeanGraphReadModel,
    /// Patterns that selected no bean
    pub unmatched_patterns: Vec<String>,
}

impl BeanGraphResponse {
    pub fn new(read_model: BeanGraphReadModel, unmatched_patterns: Vec<String>) -> Self {
        Self {
            read_model,
            unmatched_patterns,
        }
    }
}
