use std::path::{Path, PathBuf};

pub const DATA_DIR: &str = "./data";
pub const FIRST_NAMES_FILE: &str = "firstNames.txt";
pub const LAST_NAMES_FILE: &str = "lastNames.txt";
pub const PEOPLE_FILE: &str = "people.txt";

/// Number of people generated when no count is given
pub const PEOPLE_COUNT: u32 = 100;
/// Length of the top-N lists in the report
pub const TOP_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Paths {
    pub first_names: PathBuf,
    pub last_names: PathBuf,
    pub people: PathBuf,
}

impl Paths {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            first_names: data_dir.join(FIRST_NAMES_FILE),
            last_names: data_dir.join(LAST_NAMES_FILE),
            people: data_dir.join(PEOPLE_FILE),
        }
    }
}
