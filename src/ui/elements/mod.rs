// src/ui/elements/mod.rs

pub mod editor;
pub mod table_body;
pub mod top_panel;
