use std::sync::Arc;

use druid::{Data, Lens};
use linegrid::{GridConfig, Point, Segment, Viewport};

/// Endpoints the window opens with.
pub(crate) const DEFAULT_SEGMENT: Segment = Segment::new(Point::new(-3, -2), Point::new(3, 2));

#[derive(Clone, Data, Lens)]
pub(crate) struct AppData {
    pub(crate) start_x: String,
    pub(crate) start_y: String,
    pub(crate) end_x: String,
    pub(crate) end_y: String,
    #[data(same_fn = "PartialEq::eq")]
    pub(crate) viewport: Viewport,
    pub(crate) cells: Arc<Vec<Point>>,
    /// The segment behind `cells`, for the ideal line overlay.
    #[data(same_fn = "PartialEq::eq")]
    pub(crate) segment: Option<Segment>,
    /// A large segment waiting for a second press of Draw.
    #[data(same_fn = "PartialEq::eq")]
    pub(crate) pending: Option<Segment>,
    pub(crate) status: String,
    pub(crate) config: Arc<GridConfig>,
}

impl AppData {
    pub(crate) fn new(config: GridConfig) -> Self {
        AppData {
            start_x: DEFAULT_SEGMENT.start.x.to_string(),
            start_y: DEFAULT_SEGMENT.start.y.to_string(),
            end_x: DEFAULT_SEGMENT.end.x.to_string(),
            end_y: DEFAULT_SEGMENT.end.y.to_string(),
            viewport: config.initial_viewport(),
            cells: Arc::new(Vec::new()),
            segment: None,
            pending: None,
            status: "Enter two points and press Draw.".to_string(),
            config: Arc::new(config),
        }
    }

    pub(crate) fn fields(&self) -> [&str; 4] {
        [&self.start_x, &self.start_y, &self.end_x, &self.end_y]
    }
}
