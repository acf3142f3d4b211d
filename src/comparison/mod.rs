//! Comparison core: vendor data, view configuration and the metric engine.
//!
//! Nothing here depends on the render tree or any adapter.

pub mod domain;
pub mod policies;
pub mod services;

#[cfg(test)]
pub mod test_support;
