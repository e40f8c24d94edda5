mod bfs;

pub use bfs::find_path;
