pub mod grid;
pub mod history_graph;
pub mod info;

pub use grid::GridWidget;
pub use history_graph::HistoryGraph;
pub use info::InfoPanel;
