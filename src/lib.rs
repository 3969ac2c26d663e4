pub mod config;
pub mod console_interface;
pub mod core;
pub mod json_export;
pub mod logging;
pub mod maze_graph;
pub mod models;
pub mod session;

#[cfg(test)]
mod test;
