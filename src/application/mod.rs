//! Application layer - Coordinates domain components behind the host capability ports.
//!
//! The explorer ties panels, aggregation and persistence together and is
//! the only type a host needs to hold.

pub mod explorer;

pub use explorer::{
    ChoiceExplorer, ExplorerEvent, ExplorerSettings, ExplorerView, LayoutMetrics, PanelView,
    ResultView,
};
