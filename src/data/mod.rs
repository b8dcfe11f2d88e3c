// Series file loading and saving
pub mod series_file;

// Re-export commonly used types
pub use series_file::SeriesFile;
