// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the plot engine and the host surface interface.

pub mod axis;
pub mod bounds;
pub mod clip;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod histogram;
pub mod interaction;
pub mod plot;
pub mod policy;
pub mod scale;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::Axes;
pub use bounds::{BoundsTracker, Freeze};
pub use clip::{clip_segment, Segment};
pub use dataset::{dash_segments, Dataset, DatasetStyle, RenderStyle};
pub use error::{ChartError, ChartResult};
pub use geometry::RectI32;
pub use grid::{nice_scale, TickScale};
pub use histogram::HistogramDataset;
pub use interaction::{Interaction, InteractionEvent, PointerInput};
pub use plot::{Direction, Plot, PlotConfig, Setting};
pub use policy::InsertionPolicy;
pub use scale::{ScaleTransform, ScreenMapping};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use theme::{Color, Theme};
pub use view::{Bounds, Viewport};
