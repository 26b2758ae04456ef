//! The error taxonomy for the triangulation core.
//!
//! [`TriangulateError`] distinguishes conditions a caller should fix in their
//! input from internal invariant breaks: the former are expected to occur in
//! normal operation and are simply returned, the latter indicate a bug in
//! this crate and are logged at `error` level before propagating.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriangulateError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("bad vertex order: {0}")]
    BadVertexOrder(String),

    #[error("structural inconsistency: {0}")]
    StructuralInconsistency(String),
}

impl TriangulateError {
    pub fn structural(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::error!("structural inconsistency: {msg}");
        TriangulateError::StructuralInconsistency(msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        TriangulateError::InvalidInput(msg.into())
    }

    pub fn bad_vertex_order(msg: impl Into<String>) -> Self {
        TriangulateError::BadVertexOrder(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, TriangulateError>;
