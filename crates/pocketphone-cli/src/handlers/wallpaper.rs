//! Wallpaper command handler

use std::path::PathBuf;

use pocketphone::config::PhoneConfig;
use pocketphone::wallpaper::{
    cover_fit, image_size, Offset, Placement, WallpaperSettings, WallpaperSource, BUILTIN,
};
use serde::Serialize;
use tracing::warn;

use crate::commands::WallpaperCommand;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{OutputFormat, Reporter};

/// Current wallpaper and where it lands on the screen
#[derive(Debug, Serialize)]
pub struct WallpaperView {
    /// Settings value, `None` when no wallpaper is chosen
    pub wallpaper: Option<String>,
    /// Image file on disk
    pub image: Option<PathBuf>,
    /// Cover-fit placement when the image could be probed
    pub placement: Option<Placement>,
}

/// Execute a wallpaper subcommand
pub fn execute_wallpaper(config: &CliConfig, command: &WallpaperCommand) -> CliResult<()> {
    let phone = config.phone_config()?;
    let settings = WallpaperSettings::new(phone.settings_path());
    let reporter = Reporter::new(config.verbosity.is_quiet());

    match command {
        WallpaperCommand::List => {
            for line in list_lines(settings.load().as_ref()) {
                println!("{line}");
            }
        }
        WallpaperCommand::Set { wallpaper } => {
            let source = resolve(wallpaper)?;
            settings.save(&source)?;
            reporter.success(&format!("Wallpaper: {source}"));
        }
        WallpaperCommand::Show {
            offset_x,
            offset_y,
            format,
        } => {
            let view = view(&phone, settings.load(), Offset::new(*offset_x, *offset_y));
            match format {
                OutputFormat::Text => {
                    for line in view_lines(&view) {
                        println!("{line}");
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
            }
        }
    }
    Ok(())
}

/// Resolves a built-in name or an existing image file
pub fn resolve(arg: &str) -> CliResult<WallpaperSource> {
    let source = WallpaperSource::from_name_or_path(arg);
    if let WallpaperSource::File(path) = &source {
        if !path.is_file() {
            return Err(CliError::invalid_argument(format!(
                "'{arg}' is neither a built-in wallpaper nor an image file"
            )));
        }
        image_size(path)?;
    }
    Ok(source)
}

/// Built-in names, the current one marked with `*`
#[must_use]
pub fn list_lines(current: Option<&WallpaperSource>) -> Vec<String> {
    BUILTIN
        .iter()
        .map(|b| {
            let marker = match current {
                Some(WallpaperSource::Builtin(c)) if c.name == b.name => '*',
                _ => ' ',
            };
            format!("{marker} {:<8}{}", b.name, b.file)
        })
        .collect()
}

/// Probes the current image and lays it out on the configured screen
#[must_use]
pub fn view(phone: &PhoneConfig, source: Option<WallpaperSource>, offset: Offset) -> WallpaperView {
    let Some(source) = source else {
        return WallpaperView {
            wallpaper: None,
            image: None,
            placement: None,
        };
    };
    let image = source.image_path(&phone.assets_dir());
    let placement = match image_size(&image) {
        Ok(size) => cover_fit(phone.screen, size, offset),
        Err(e) => {
            warn!(image = %image.display(), error = %e, "wallpaper image unavailable");
            None
        }
    };
    WallpaperView {
        wallpaper: Some(source.to_string()),
        image: Some(image),
        placement,
    }
}

/// Text rendering of [`WallpaperView`]
#[must_use]
pub fn view_lines(view: &WallpaperView) -> Vec<String> {
    let Some(name) = &view.wallpaper else {
        return vec!["Wallpaper: none".to_string()];
    };
    let mut lines = vec![format!("Wallpaper: {name}")];
    if let Some(image) = &view.image {
        lines.push(format!("Image: {}", image.display()));
    }
    lines.push(match &view.placement {
        Some(placement) => format!("Placement: {placement}"),
        None => "Placement: no image".to_string(),
    });
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pocketphone::wallpaper::builtin;

    #[test]
    fn test_list_marks_current() {
        let current = WallpaperSource::Builtin(builtin("kitty").unwrap());
        let lines = list_lines(Some(&current));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("* Kitty"));
        assert!(lines[0].starts_with("  Tiffy"));
    }

    #[test]
    fn test_resolve_builtin_ignores_case() {
        let source = resolve("HOMIES").unwrap();
        assert_eq!(source.to_setting(), "builtin:Homies");
    }

    #[test]
    fn test_resolve_missing_file() {
        let err = resolve("/no/such/wallpaper.png").unwrap_err();
        assert!(err.to_string().contains("neither a built-in"));
    }

    #[test]
    fn test_view_without_wallpaper() {
        let view = view(&PhoneConfig::new(), None, Offset::default());
        assert_eq!(view_lines(&view), vec!["Wallpaper: none"]);
    }

    #[test]
    fn test_view_missing_builtin_asset() {
        let dir = tempfile::tempdir().unwrap();
        let phone = PhoneConfig::new().with_data_dir(dir.path());
        let source = WallpaperSource::Builtin(builtin("Tiffy").unwrap());
        let view = view(&phone, Some(source), Offset::default());
        assert!(view.placement.is_none());
        assert_eq!(view_lines(&view).last().unwrap(), "Placement: no image");
    }

    #[test]
    fn test_view_file_placement() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("wide.png");
        image::RgbImage::new(82, 82).save(&image).unwrap();

        let phone = PhoneConfig::new().with_data_dir(dir.path());
        let source = resolve(image.to_str().unwrap()).unwrap();
        let view = view(&phone, Some(source), Offset::new(0.0, 0.0));
        let placement = view.placement.unwrap();
        assert_eq!(placement.scale, 10.0);
        assert_eq!(placement.width, 820.0);
        assert_eq!(placement.x, -200.0);
    }
}
