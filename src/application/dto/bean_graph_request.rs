/// BeanGraphRequest - Request DTO for the bean graph use case
#[derive(Debug, Clone, Default)]
pub struct BeanGraphRequest {
    /// Name patterns selecting the beans the view is centred on;
    /// empty selects every bean
    pub bean_patterns: Vec<String>,
}

impl BeanGraphRequest {
    pub fn new(bean_patterns: Vec<String>) -> Self {
        Self { bean_patterns }
    }
}
