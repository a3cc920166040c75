use std::sync::Arc;

use linegrid::Point;
use log::{debug, info, warn};

use crate::input::parse_segment;
use crate::state::AppData;

/// Handles a press of the Draw button.
///
/// Segments with a coordinate beyond the configured threshold are held back
/// until Draw is pressed again with the same endpoints.
pub(crate) fn draw(data: &mut AppData) {
    let segment = match parse_segment(data.fields()) {
        Ok(segment) => segment,
        Err(err) => {
            warn!("rejected input: {}", err);
            data.pending = None;
            data.status = format!("Invalid input: {}.", err);
            return;
        }
    };

    let magnitude = segment.max_abs();
    if magnitude > data.config.large_coordinate_threshold && data.pending != Some(segment) {
        data.pending = Some(segment);
        data.status = format!(
            "Coordinates are large (max {}), the grid will need scrolling. Press Draw again to continue.",
            magnitude
        );
        return;
    }
    data.pending = None;

    let viewport = data.config.viewport_for(vec![segment.start, segment.end]);
    if viewport != data.viewport {
        info!("grid resized from {} to {}", data.viewport.units(), viewport.units());
        let max_canvas = data.config.max_canvas;
        let (scroll_x, scroll_y) = viewport.needs_scroll(max_canvas.to_display());
        if scroll_x || scroll_y {
            info!(
                "grid canvas exceeds {}x{}, scrolling enabled",
                max_canvas.width, max_canvas.height
            );
        }
        data.viewport = viewport;
    }

    // A line crosses the grid in one contiguous run, so the walk can stop as
    // soon as it leaves. Only visible cells are kept.
    let line = segment.cells();
    let axis = line.axis();
    let total = segment.len();
    let cells: Vec<Point> = line
        .skip_while(|c| !viewport.contains(*c))
        .take_while(|c| viewport.contains(*c))
        .collect();
    let hidden = total - cells.len() as u64;
    debug!(
        "rasterized {} -> {} driving on {:?} into {} cells ({} outside the grid)",
        segment.start,
        segment.end,
        axis,
        total,
        hidden
    );

    data.status = if hidden == 0 {
        format!("{} cells from {} to {}.", total, segment.start, segment.end)
    } else {
        format!(
            "{} cells from {} to {}, {} beyond the largest grid.",
            total,
            segment.start,
            segment.end,
            hidden
        )
    };
    data.cells = Arc::new(cells);
    data.segment = Some(segment);
}
