//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own validation and business rules so route handlers can
//! stay focused on HTTP translation. Storage is reached only through the
//! `AgentFileStore` trait.

pub mod agent_file;
pub mod validation;
