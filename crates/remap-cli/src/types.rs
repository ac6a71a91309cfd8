use std::path::PathBuf;

#[derive(Debug)]
pub struct PrepareResult {
    pub records: usize,
    pub output_columns: Vec<String>,
    pub output: Option<PathBuf>,
}
