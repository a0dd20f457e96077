//! Explorer - the controller a host drives.
//!
//! # Components
//!
//! - `ChoiceExplorer` - owns panels and result displays, routes interactions
//! - `ExplorerSettings` - base ceiling and live feedback default
//! - `LayoutMetrics` - shared column widths
//! - `ExplorerView` - render output for a host

mod choice_explorer;
mod layout;
mod settings;
mod view;

pub use choice_explorer::{ChoiceExplorer, ExplorerEvent};
pub use layout::LayoutMetrics;
pub use settings::ExplorerSettings;
pub use view::{ExplorerView, PanelView, ResultView};
