use std::fmt;

use druid::piet::{ImageFormat, InterpolationMode};
use druid::{PaintCtx, Rect, RenderContext};
use image::{Rgba, RgbaImage};
use linegrid::viewport::{Orientation, Viewport};
use linegrid::Point;
use log::{debug, error};

use crate::theme;

/// Grid lines, axes and highlighted cells, rasterized once per change and
/// blitted on every paint.
pub(crate) struct GridImage {
    image: RgbaImage,
}

impl fmt::Debug for GridImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridImage")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl GridImage {
    pub(crate) fn render(viewport: &Viewport, cells: &[Point]) -> Self {
        let size = viewport.canvas_size();
        let mut image = RgbaImage::from_pixel(
            size.width as u32,
            size.height as u32,
            theme::CANVAS_BACKGROUND.to_rgba(),
        );

        // Axes go last so they stay on top of the plain grid lines.
        let (axes, lines): (Vec<_>, Vec<_>) = viewport.grid_lines().partition(|l| l.is_axis);
        for line in lines.iter().chain(axes.iter()) {
            let (color, thickness) = if line.is_axis {
                (theme::AXIS, 2)
            } else {
                (theme::GRID, 1)
            };
            draw_grid_line(&mut image, line.orientation, line.offset as u32, thickness, color.to_rgba());
        }

        let mut drawn = 0;
        for &cell in cells.iter().filter(|c| viewport.contains(**c)) {
            let rect = viewport.cell_to_display_rect(cell).inset(theme::CELL_INSET);
            fill_rect(
                &mut image,
                rect.x0 as u32,
                rect.y0 as u32,
                rect.x1 as u32,
                rect.y1 as u32,
                theme::CELL.to_rgba(),
            );
            drawn += 1;
        }
        debug!("rendered {} of {} cells onto a {}x{} grid image", drawn, cells.len(), image.width(), image.height());

        GridImage { image }
    }

    pub(crate) fn to_piet(&self, ctx: &mut PaintCtx) {
        let (width, height) = self.image.dimensions();
        let image = match ctx.make_image(
            width as usize,
            height as usize,
            self.image.as_raw(),
            ImageFormat::RgbaSeparate,
        ) {
            Ok(image) => image,
            Err(err) => {
                error!("failed to upload grid image: {}", err);
                return;
            }
        };
        let rect = Rect::new(0.0, 0.0, f64::from(width), f64::from(height));
        ctx.draw_image(&image, rect, InterpolationMode::NearestNeighbor);
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }
}

fn draw_grid_line(image: &mut RgbaImage, orientation: Orientation, offset: u32, thickness: u32, color: Rgba<u8>) {
    let limit = match orientation {
        Orientation::Vertical => image.width(),
        Orientation::Horizontal => image.height(),
    };
    // Lines on the far edge are pulled just inside the canvas.
    let first = offset
        .saturating_sub(thickness / 2)
        .min(limit.saturating_sub(thickness));
    let last = (first + thickness).min(limit);

    let (width, height) = image.dimensions();
    match orientation {
        Orientation::Vertical => fill_rect(image, first, 0, last, height, color),
        Orientation::Horizontal => fill_rect(image, 0, first, width, last, color),
    }
}

fn fill_rect(image: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    let x1 = x1.min(image.width());
    let y1 = y1.min(image.height());
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use linegrid::{rasterize, Units};

    use super::*;

    fn default_viewport() -> Viewport {
        Viewport::new(Units::new(16, 10), 22)
    }

    #[test]
    fn image_matches_canvas_size() {
        let grid = GridImage::render(&default_viewport(), &[]);
        assert_eq!(grid.image.dimensions(), (352, 220));
    }

    #[test]
    fn highlighted_cell_is_filled_inside_its_inset() {
        let grid = GridImage::render(&default_viewport(), &[Point::ORIGIN]);
        // Cell (0,0) spans x 176..198, y 88..110.
        assert_eq!(grid.pixel(187, 99), theme::CELL.to_rgba());
        assert_eq!(grid.pixel(178, 90), theme::CELL.to_rgba());
        assert_eq!(grid.pixel(177, 99), theme::CANVAS_BACKGROUND.to_rgba());
        assert_eq!(grid.pixel(187, 108), theme::CANVAS_BACKGROUND.to_rgba());

        // (1,1) spans x 198..220, y 66..88 and stays blank.
        assert_eq!(grid.pixel(209, 77), theme::CANVAS_BACKGROUND.to_rgba());
    }

    #[test]
    fn axes_are_drawn_two_pixels_wide() {
        let grid = GridImage::render(&default_viewport(), &[]);
        assert_eq!(grid.pixel(175, 5), theme::AXIS.to_rgba());
        assert_eq!(grid.pixel(176, 5), theme::AXIS.to_rgba());
        assert_eq!(grid.pixel(5, 109), theme::AXIS.to_rgba());
        assert_eq!(grid.pixel(5, 110), theme::AXIS.to_rgba());
        assert_eq!(grid.pixel(22, 5), theme::GRID.to_rgba());
    }

    #[test]
    fn far_edge_line_stays_inside_image() {
        let grid = GridImage::render(&default_viewport(), &[]);
        assert_eq!(grid.pixel(351, 5), theme::GRID.to_rgba());
        assert_eq!(grid.pixel(5, 219), theme::GRID.to_rgba());
    }

    #[test]
    fn cells_outside_the_grid_are_skipped() {
        let cells = rasterize(Point::new(-3, -2), Point::new(40, 2));
        let grid = GridImage::render(&default_viewport(), &cells);
        // (-3,-2) spans x 110..132, y 132..154.
        assert_eq!(grid.pixel(121, 143), theme::CELL.to_rgba());
    }
}
