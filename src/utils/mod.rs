//! Shared utilities for the registration core.

pub mod inflect;
