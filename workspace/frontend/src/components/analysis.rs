mod metrics;
mod prediction_chart;
mod recent_prices;
mod stock_info;
mod stock_list;
mod store;
mod view;

pub use view::Analysis;
