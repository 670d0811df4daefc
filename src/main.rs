// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::time::Duration;

mod batch;
mod grid;
mod settings;
mod ui;

use batch::{sample_batch_sheet, BatchVocabularies, SampleBatch, SampleBatchPlugin};
use grid::ValidationMode;
use settings::AppSettings;
use ui::EditorUiPlugin;

/// Bulk sample metadata editor with inline validation.
#[derive(Parser, Debug)]
#[command(name = "benchsheet", version, about)]
struct Cli {
    /// Number of empty sample rows to start with.
    #[arg(long)]
    rows: Option<usize>,
    /// Validate cells while typing, overriding the saved setting.
    #[arg(long)]
    eager: bool,
    /// Only validate on demand, overriding the saved setting.
    #[arg(long, conflicts_with = "eager")]
    lazy: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut app_settings = settings::io::load_settings().unwrap_or_default();
    if let Some(rows) = cli.rows {
        app_settings.initial_rows = rows;
    }
    if cli.eager {
        app_settings.validation_mode = ValidationMode::Eager;
    }
    if cli.lazy {
        app_settings.validation_mode = ValidationMode::Lazy;
    }

    let sheet = match sample_batch_sheet(&BatchVocabularies::default(), &app_settings) {
        Ok(sheet) => sheet,
        Err(err) => {
            eprintln!("Failed to configure the sample batch sheet: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(app_settings)
        .insert_resource(SampleBatch::new(sheet))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Benchsheet - Sample Batch Editor".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(SampleBatchPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
