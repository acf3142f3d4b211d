//! View layer: the dashboard layout, region content and the reconciliation
//! loop that keeps a RenderTarget in sync with the derived metrics.

mod animation;
mod charts;
mod layout;
mod regions;
mod renderer;

pub use animation::{AnimationScheduler, CounterAnimation};
pub use charts::ChartRegion;
pub use layout::{skeleton, Region, DASHBOARD_ROOT_ID, NOTICES_ID};
pub use regions::{counter_id, render as render_region};
pub use renderer::{RenderStats, RendererOptions, ViewRenderer, ViewState, DEFAULT_ANIMATION_STEPS};
