use druid::widget::{Button, Flex, Label, TextBox};
use druid::{Lens, Widget, WidgetExt};

use crate::actions;
use crate::grid_view::{CanvasFrame, GridView};
use crate::state::AppData;
use crate::theme;

fn coordinate_field(label: &str, lens: impl Lens<AppData, String> + 'static) -> impl Widget<AppData> {
    Flex::row()
        .with_child(Label::new(label))
        .with_spacer(5.0)
        .with_child(TextBox::new().fix_width(60.0).lens(lens))
}

fn make_inputs() -> impl Widget<AppData> {
    Flex::column()
        .with_child(
            Flex::row()
                .with_child(coordinate_field("Start X:", AppData::start_x))
                .with_spacer(12.0)
                .with_child(coordinate_field("Start Y:", AppData::start_y)),
        )
        .with_spacer(6.0)
        .with_child(
            Flex::row()
                .with_child(coordinate_field("End X:", AppData::end_x))
                .with_spacer(12.0)
                .with_child(coordinate_field("End Y:", AppData::end_y)),
        )
        .padding((15.0, 10.0))
}

pub(crate) fn make_root() -> impl Widget<AppData> {
    let canvas = CanvasFrame::new(GridView::new()).border(theme::AXIS.to_color(), 2.0);

    Flex::column()
        .with_child(Label::new("Bresenham line rasterization").with_text_size(16.0))
        .with_spacer(8.0)
        .with_child(make_inputs())
        .with_child(
            Button::new("Draw")
                .on_click(|_ctx, data: &mut AppData, _env| actions::draw(data))
                .expand_width(),
        )
        .with_spacer(6.0)
        .with_child(Label::dynamic(|data: &AppData, _env| data.status.clone()))
        .with_spacer(6.0)
        .with_child(canvas)
        .with_spacer(6.0)
        .with_child(Label::dynamic(|data: &AppData, _env| {
            format!("{} | blue: rasterized cells | red: ideal line", data.viewport)
        }))
        .padding(15.0)
}
