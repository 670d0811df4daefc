// src/settings/io.rs

use bevy::log::{debug, error, info};
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::PathBuf;

use super::AppSettings;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "Benchsheet";
const APPLICATION: &str = "Benchsheet";
const CONFIG_FILE: &str = "benchsheet_settings.json";

fn config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            ErrorKind::NotFound,
            "Could not determine a config directory for settings.",
        ))
    }
}

/// Loads settings from the platform config directory. A missing file is not
/// an error and yields the defaults.
pub fn load_settings() -> io::Result<AppSettings> {
    let config_file = config_path()?;
    debug!("Settings: loading from {:?}", config_file);
    match fs::File::open(&config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => Ok(settings),
                Err(e) => {
                    error!("Settings: failed to parse {:?}: {}", &config_file, e);
                    Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("failed to parse settings file: {e}"),
                    ))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Settings: no file at {:?}, using defaults.", config_file);
            Ok(AppSettings::default())
        }
        Err(e) => {
            error!("Settings: failed to open {:?}: {}", &config_file, e);
            Err(e)
        }
    }
}

pub fn save_settings(settings: &AppSettings) -> io::Result<()> {
    let config_file = config_path()?;
    info!("Settings: saving to {:?}", config_file);
    let file = fs::File::create(&config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!("Settings: failed to serialize to {:?}: {}", &config_file, e);
        io::Error::new(ErrorKind::Other, e)
    })?;
    Ok(())
}
