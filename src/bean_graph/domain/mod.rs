pub mod bean;
pub mod graph;

pub use bean::{Bean, BeanName};
pub use graph::{BeanGraph, Edge, GraphElement};
