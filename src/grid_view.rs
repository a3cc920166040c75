use std::collections::HashSet;
use std::sync::Arc;

use druid::kurbo::Line;
use druid::piet::{FontFamily, StrokeStyle, Text, TextLayout, TextLayoutBuilder};
use druid::widget::Scroll;
use druid::{
    BoxConstraints, Env, Event, EventCtx, LayoutCtx, LifeCycle, LifeCycleCtx, PaintCtx, Point, Rect,
    RenderContext, Size, UnitPoint, UpdateCtx, Widget, WidgetPod,
};
use linegrid::viewport::{shows_axis_label, DisplayPoint, Orientation};
use log::{debug, warn};

use crate::grid_image::GridImage;
use crate::state::AppData;
use crate::theme::{self, Rgb};

/// The grid canvas: highlighted cells, coordinate labels and the ideal line.
pub struct GridView {
    image: Option<GridImage>,
}

impl GridView {
    pub fn new() -> Self {
        GridView { image: None }
    }
}

fn to_point(p: DisplayPoint) -> Point {
    Point::new(p.x, p.y)
}

/// Draws `text` so that `anchor` of its bounding box lands on `at`.
fn draw_label(ctx: &mut PaintCtx, text: String, size: f64, color: Rgb, at: Point, anchor: UnitPoint) {
    let layout = match ctx
        .text()
        .new_text_layout(text)
        .font(FontFamily::SYSTEM_UI, size)
        .text_color(color.to_color())
        .build()
    {
        Ok(layout) => layout,
        Err(err) => {
            warn!("failed to lay out label: {}", err);
            return;
        }
    };
    let bounds = Rect::from_origin_size(Point::ORIGIN, layout.size());
    let origin = at - anchor.resolve(bounds).to_vec2();
    ctx.draw_text(&layout, origin);
}

impl Widget<AppData> for GridView {
    fn event(&mut self, _ctx: &mut EventCtx, _event: &Event, _data: &mut AppData, _env: &Env) {}

    fn lifecycle(&mut self, _ctx: &mut LifeCycleCtx, _event: &LifeCycle, _data: &AppData, _env: &Env) {}

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &AppData, data: &AppData, _env: &Env) {
        if old_data.viewport != data.viewport {
            self.image = None;
            ctx.request_layout();
        }
        if !Arc::ptr_eq(&old_data.cells, &data.cells) {
            self.image = None;
        }
        if self.image.is_none() || old_data.segment != data.segment {
            ctx.request_paint();
        }
    }

    fn layout(&mut self, _layout_ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &AppData, _env: &Env) -> Size {
        bc.debug_check("GridView");
        let canvas = data.viewport.canvas_size();
        bc.constrain(Size::new(canvas.width, canvas.height))
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppData, _env: &Env) {
        let viewport = data.viewport;

        let clip_rect = Rect::ZERO.with_size(ctx.size());
        ctx.clip(clip_rect);

        let image = self
            .image
            .get_or_insert_with(|| GridImage::render(&viewport, &data.cells));
        image.to_piet(ctx);

        let highlighted: HashSet<_> = data.cells.iter().copied().collect();
        for cell in viewport.cells() {
            let color = if highlighted.contains(&cell) {
                theme::CELL_LABEL_HIGHLIGHTED
            } else if cell.x == 0 || cell.y == 0 {
                theme::CELL_LABEL_AXIS
            } else {
                theme::CELL_LABEL
            };
            let center = viewport.cell_to_display_rect(cell).center();
            draw_label(ctx, cell.to_string(), theme::CELL_LABEL_SIZE, color, to_point(center), UnitPoint::CENTER);
        }

        let canvas = viewport.canvas_size();
        for line in viewport.grid_lines().filter(|l| shows_axis_label(l.value)) {
            let (at, anchor) = match line.orientation {
                Orientation::Vertical => (Point::new(line.offset, canvas.height), UnitPoint::BOTTOM),
                Orientation::Horizontal => (Point::new(0.0, line.offset), UnitPoint::LEFT),
            };
            draw_label(ctx, line.value.to_string(), theme::AXIS_LABEL_SIZE, theme::TEXT, at, anchor);
        }

        if let Some(segment) = data.segment {
            let from = to_point(viewport.point_to_display_center(segment.start));
            let to = to_point(viewport.point_to_display_center(segment.end));
            let style = StrokeStyle::new().dash_pattern(theme::IDEAL_LINE_DASH);
            ctx.stroke_styled(
                Line::new(from, to),
                &theme::IDEAL_LINE.to_color(),
                theme::IDEAL_LINE_WIDTH,
                &style,
            );
        }
    }
}

/// Scrolling frame around the grid, sized to the current canvas but never
/// larger than the configured maximum.
pub struct CanvasFrame {
    inner: WidgetPod<AppData, Scroll<AppData, GridView>>,
}

impl CanvasFrame {
    pub fn new(view: GridView) -> Self {
        CanvasFrame {
            inner: WidgetPod::new(Scroll::new(view)),
        }
    }
}

fn frame_size(data: &AppData) -> Size {
    let visible = data.viewport.visible_size(data.config.max_canvas.to_display());
    Size::new(visible.width, visible.height)
}

impl Widget<AppData> for CanvasFrame {
    fn event(&mut self, ctx: &mut EventCtx, event: &Event, data: &mut AppData, env: &Env) {
        self.inner.event(ctx, event, data, env);
    }

    fn lifecycle(&mut self, ctx: &mut LifeCycleCtx, event: &LifeCycle, data: &AppData, env: &Env) {
        self.inner.lifecycle(ctx, event, data, env);
    }

    fn update(&mut self, ctx: &mut UpdateCtx, old_data: &AppData, data: &AppData, env: &Env) {
        self.inner.update(ctx, data, env);
        if old_data.viewport != data.viewport {
            ctx.request_layout();
        }
    }

    fn layout(&mut self, ctx: &mut LayoutCtx, bc: &BoxConstraints, data: &AppData, env: &Env) -> Size {
        bc.debug_check("CanvasFrame");
        let size = bc.constrain(frame_size(data));
        debug!("canvas frame {}x{} for {}", size.width, size.height, data.viewport.units());
        self.inner.layout(ctx, &BoxConstraints::tight(size), data, env);
        self.inner.set_origin(ctx, Point::ORIGIN);
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx, data: &AppData, env: &Env) {
        self.inner.paint(ctx, data, env);
    }
}

#[cfg(test)]
mod tests {
    use linegrid::{GridConfig, Units, Viewport};

    use super::*;

    #[test_log::test]
    fn frame_hugs_small_grids() {
        let mut data = AppData::new(GridConfig::default());
        assert_eq!(frame_size(&data), Size::new(352.0, 220.0));

        data.viewport = Viewport::new(Units::new(16, 12), 22);
        assert_eq!(frame_size(&data), Size::new(352.0, 264.0));
    }

    #[test_log::test]
    fn frame_stops_at_max_canvas() {
        let mut data = AppData::new(GridConfig::default());
        data.viewport = Viewport::new(Units::new(30, 16), 22);
        assert_eq!(frame_size(&data), Size::new(600.0, 352.0));

        data.viewport = Viewport::new(Units::new(30, 20), 22);
        assert_eq!(frame_size(&data), Size::new(600.0, 400.0));
    }
}
