mod allocation_table;
mod frontier_chart;
mod metrics;
mod store;
mod symbol_chips;
mod view;

pub use view::Portfolio;
