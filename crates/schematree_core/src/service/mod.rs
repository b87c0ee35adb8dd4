//! Shell use-case services.
//!
//! # Responsibility
//! - Orchestrate mode, title editing and comment use-cases over the
//!   project store.
//! - Keep front-ends decoupled from storage details.

pub mod comment_list;
pub mod controls;
pub mod mode_controller;
pub mod notifications;
pub mod project_store;
pub mod shell;
pub mod theme;
pub mod title_editor;
