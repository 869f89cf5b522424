pub mod bfs;
pub mod cycle;
pub mod dfs;
