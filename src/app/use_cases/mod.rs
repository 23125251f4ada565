//! Use-Cases der Application-Layer-Orchestrierung.

pub mod clipboard;
pub mod editing;
pub mod plots;
pub mod selection;
pub mod view;
