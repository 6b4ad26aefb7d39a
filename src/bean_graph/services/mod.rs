mod bean_selector;
mod graph_extractor;

pub use bean_selector::BeanSelector;
pub use graph_extractor::{extract_graph, GraphExtractor};
