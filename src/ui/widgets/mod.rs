// src/ui/widgets/mod.rs

// One module per page kind.
pub mod cover; // Title banner, metadata and findings counts.
pub mod results; // Raw output of one target.
pub mod summary; // Strong and weak target lists.
