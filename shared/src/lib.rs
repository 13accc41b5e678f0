// Data models and display formatting shared by any front end that renders
// the trading desk: the GUI binds to these types, the ui toolkit sorts,
// filters and exports them.

pub mod models;
pub mod utils;
