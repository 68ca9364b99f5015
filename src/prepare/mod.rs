//! Reduction preparation kernels.
//!
//! [`local`] handles the case where the target axis sits strictly below the
//! current list level; [`nonlocal`] handles the transpose needed when the
//! axis sits at or above it.

pub mod local;
pub mod nonlocal;
