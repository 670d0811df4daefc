// src/ui/widgets/mod.rs

pub mod cell_widget;
pub mod select_widget;
