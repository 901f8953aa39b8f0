//! Python bindings
//!
//! Exposes both generators as Python classes. Compiled only with the
//! `pyo3` feature.

pub mod generators;
