//! Part × state contact sheet

use anyhow::{bail, Context, Result};
use mimic_paint::{Color, Pixmap, Rect, Size};
use mimic_theme::*;
use std::path::Path;

/// Space around each control inside its cell
const PADDING: i32 = 6;

/// A payload that shows off the part better than the all-zero default
pub fn sample_params(part: Part, cell: Rect) -> ExtraParams {
    match part {
        Part::Checkbox | Part::Radio => ButtonExtraParams {
            checked: true,
            ..Default::default()
        }
        .into(),
        Part::PushButton => ButtonExtraParams {
            has_border: true,
            ..Default::default()
        }
        .into(),
        Part::InnerSpinButton => InnerSpinButtonExtraParams {
            spin_up: true,
            ..Default::default()
        }
        .into(),
        Part::MenuList => MenuListExtraParams {
            has_border: true,
            has_border_radius: true,
            arrow_x: cell.right() - cell.height / 2,
            arrow_y: cell.center().y,
            ..Default::default()
        }
        .into(),
        Part::MenuPopupArrow => MenuArrowExtraParams {
            pointing_right: true,
            is_selected: false,
        }
        .into(),
        Part::MenuPopupSeparator => MenuSeparatorExtraParams { has_gutter: true }.into(),
        Part::ProgressBar => ProgressBarExtraParams {
            determinate: true,
            value_rect_x: cell.x,
            value_rect_y: cell.y,
            value_rect_width: cell.width * 3 / 5,
            value_rect_height: cell.height,
            ..Default::default()
        }
        .into(),
        Part::TextField => TextFieldExtraParams {
            fill_content_area: true,
            draw_edges: true,
            ..Default::default()
        }
        .into(),
        _ => ExtraParams::None,
    }
}

/// Render every part in every state, one row per part
pub fn render(theme: &dyn NativeTheme, cell: Size) -> Result<Pixmap> {
    let columns = State::COUNT as i32;
    let rows = Part::COUNT as i32;
    let (Some(width), Some(height)) = (
        cell.width.checked_mul(columns),
        cell.height.checked_mul(rows),
    ) else {
        bail!("Gallery of {}x{} cells is too large", cell.width, cell.height);
    };
    let mut pixmap = Pixmap::filled(width, height, Color::WHITE);

    for (row, part) in Part::ALL.into_iter().enumerate() {
        for (column, state) in State::ALL.into_iter().enumerate() {
            let origin = Rect::new(
                column as i32 * cell.width,
                row as i32 * cell.height,
                cell.width,
                cell.height,
            );
            let rect = origin.inset(PADDING);
            let extra = sample_params(part, rect);
            match theme.paint(&mut pixmap, part, state, rect, &extra) {
                Ok(()) => {}
                Err(ThemeError::Unthemed { .. }) => {
                    tracing::info!("{} has no {}, leaving its cell empty", theme.name(), part);
                    break;
                }
                Err(err) => {
                    return Err(err).with_context(|| format!("Failed to paint {part} ({state})"))
                }
            }
        }
    }
    Ok(pixmap)
}

pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(
        pixmap.width() as u32,
        pixmap.height() as u32,
        pixmap.to_rgba8(),
    )
    .context("Pixel buffer does not match the image size")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_params_match_their_part() {
        let cell = Rect::new(0, 0, 90, 30);
        for part in Part::ALL {
            sample_params(part, cell).validate_for(part).unwrap();
        }
    }

    #[test]
    fn renders_every_cell() {
        let theme = ThemeStyle::Fluent.theme();
        let cell = Size::new(60, 32);
        let pixmap = render(&theme, cell).unwrap();
        assert_eq!(pixmap.width(), 60 * State::COUNT as i32);
        assert_eq!(pixmap.height(), 32 * Part::COUNT as i32);

        // Center of the normal push button shows the button face
        let row = Part::PushButton.index() as i32;
        let column = State::Normal.index() as i32;
        let center = pixmap.pixel(column * 60 + 30, row * 32 + 16).unwrap();
        assert_eq!(center, WindowsTheme::tokens().palette.face);
    }

    #[test]
    fn oversized_cells_are_an_error() {
        let theme = ThemeStyle::Fluent.theme();
        assert!(render(&theme, Size::new(i32::MAX / 2, 10)).is_err());
        assert!(render(&theme, Size::new(10, i32::MAX / 4)).is_err());
    }

    #[test]
    fn classic_skips_unthemed_rows() {
        let theme = ThemeStyle::Classic.theme();
        assert!(render(&theme, Size::new(48, 24)).is_ok());
    }
}
