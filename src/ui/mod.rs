// src/ui/mod.rs

pub mod elements;
pub mod widgets;

use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub struct EditorUiPlugin;

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiContextPass, elements::editor::sample_batch_editor_ui);
        info!("EditorUiPlugin initialized.");
    }
}
