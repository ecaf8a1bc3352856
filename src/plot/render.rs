use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, ensure, Context, Result};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use super::{Figure, Output, Panel, SeriesColor};

impl SeriesColor {
    fn rgb(self) -> RGBColor {
        match self {
            SeriesColor::Blue => RGBColor(31, 119, 180),
            SeriesColor::Red => RED,
            SeriesColor::Green => RGBColor(0, 160, 0),
            SeriesColor::Black => BLACK,
        }
    }
}

/// Render `figure` to `output`. With [Output::Show] this blocks until the
/// viewer is closed.
pub fn render(figure: &Figure, output: &Output) -> Result<()> {
    match output {
        Output::Show => show(figure),
        Output::Export(path) => export(figure, path),
    }
}

/// Headless rendering to a PNG, or an SVG when `path` ends in `.svg`.
pub fn export(figure: &Figure, path: &Path) -> Result<()> {
    let is_svg = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        let root = SVGBackend::new(path, figure.size).into_drawing_area();
        draw(figure, &root).map_err(|e| anyhow!("failed to draw {:?}: {}", path, e))?;
    } else {
        let root = BitMapBackend::new(path, figure.size).into_drawing_area();
        draw(figure, &root).map_err(|e| anyhow!("failed to draw {:?}: {}", path, e))?;
    }

    log::info!("wrote figure to {:?}", path);
    Ok(())
}

/// Render to a temporary PNG and open it in the platform image viewer. Returns
/// once the viewer process exits; the temporary image is removed then.
pub fn show(figure: &Figure) -> Result<()> {
    let path = std::env::temp_dir().join(format!("pitch-visualizer-{}.png", std::process::id()));
    export(figure, &path)?;
    view(viewer_command(&path), &path)
}

/// Run `viewer` to completion, then delete `path` whatever the outcome.
fn view(mut viewer: Command, path: &Path) -> Result<()> {
    log::debug!("opening viewer: {:?}", viewer);
    let status = viewer.status();

    if let Err(e) = fs::remove_file(path) {
        log::warn!("could not remove {:?}: {}", path, e);
    }

    let status =
        status.with_context(|| format!("failed to launch an image viewer for {:?}", path))?;
    ensure!(status.success(), "image viewer exited with {}", status);
    Ok(())
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    // -W waits for the application to exit.
    let mut command = Command::new("open");
    command.arg("-W").arg(path);
    command
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", "/WAIT"]).arg(path);
    command
}

// Prefer a viewer that stays in the foreground; xdg-open hands off to the
// desktop's default viewer and usually returns before it is closed.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn viewer_command(path: &Path) -> Command {
    let viewer = std::env::var_os("PITCH_VISUALIZER_VIEWER").unwrap_or_else(|| "xdg-open".into());
    let mut command = Command::new(viewer);
    command.arg(path);
    command
}

fn draw<DB: DrawingBackend>(
    figure: &Figure,
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let areas = root.split_evenly((figure.panels.len().max(1), 1));
    for (panel, area) in figure.panels.iter().zip(areas.iter()) {
        draw_panel(panel, area)?;
    }

    root.present()
}

fn draw_panel<DB: DrawingBackend>(
    panel: &Panel,
    area: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let mut chart = ChartBuilder::on(area)
        .caption(&panel.title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(panel.x_extent(), panel.y_extent())?;

    {
        let mut mesh = chart.configure_mesh();
        if panel.grid {
            mesh.bold_line_style(BLACK.mix(0.3))
                .light_line_style(BLACK.mix(0.1));
        } else {
            mesh.disable_mesh();
        }
        if let Some(label) = &panel.x_label {
            mesh.x_desc(label.as_str());
        }
        if let Some(label) = &panel.y_label {
            mesh.y_desc(label.as_str());
        }
        mesh.draw()?;
    }

    for series in &panel.series {
        let color = series.color.rgb();
        let anno = chart.draw_series(LineSeries::new(
            series.points.iter().copied(),
            color.stroke_width(1),
        ))?;
        if let Some(label) = &series.label {
            anno.label(label.as_str()).legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
        }
    }

    for marker in &panel.markers {
        let color = marker.color.rgb();
        let anno =
            chart.draw_series(std::iter::once(Circle::new(marker.point, 5, color.filled())))?;
        if let Some(label) = &marker.label {
            anno.label(label.as_str())
                .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
        }
    }

    if panel.has_legend() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn scratch_image(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pitch-visualizer-{}-{}.png",
            name,
            std::process::id()
        ));
        fs::write(&path, b"not really a png").unwrap();
        path
    }

    #[test]
    fn image_removed_after_viewer_exits() {
        let path = scratch_image("viewer-ok");
        view(Command::new("true"), &path).unwrap();

        assert!(!path.exists());
    }

    #[test]
    fn image_removed_when_viewer_fails() {
        let path = scratch_image("viewer-fails");
        assert!(view(Command::new("false"), &path).is_err());
        assert!(!path.exists());

        let path = scratch_image("viewer-missing");
        assert!(view(Command::new("no-such-image-viewer"), &path).is_err());
        assert!(!path.exists());
    }
}
