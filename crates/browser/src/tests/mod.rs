//! Cross-component scenarios.

mod races;
