//! Precompiled USC programs for hard-coded applications.

pub mod simple_compute;
