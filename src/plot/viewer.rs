//! Hand the rendered chart to the platform image viewer

use crate::error::{AppError, Result};
use std::path::Path;
use std::process::Command;

/// Command that opens `path` with the desktop's default application
pub fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        // Empty string is the window title expected by `start`
        command.args(["/C", "start", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}

/// Open the chart and wait for the launcher to return
pub fn open_in_viewer(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(AppError::render(format!("Chart {} does not exist", path.display())));
    }

    let mut command = viewer_command(path);
    let program = command.get_program().to_string_lossy().into_owned();
    let status = command
        .status()
        .map_err(|e| AppError::render(format!("Failed to launch image viewer '{}': {}", program, e)))?;

    if !status.success() {
        return Err(AppError::render(format!(
            "Image viewer '{}' exited with {} for {}",
            program,
            status,
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_command_passes_path() {
        let command = viewer_command(Path::new("iac_benchmark.png"));
        let args: Vec<_> = command.get_args().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(args.last().map(String::as_str), Some("iac_benchmark.png"));
    }

    #[test]
    fn test_missing_chart_not_opened() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_in_viewer(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, AppError::Render(_)));
    }
}
