pub mod chart;
pub mod layout;
pub mod statusbar;
pub mod table;
pub mod ticker;
pub mod timeframe;

pub use layout::LayoutManager;
pub use statusbar::StatusBar;
pub use timeframe::{Granularity, TimeFrame, TimeFrameSelector};
