use std::path::Path;

use crate::input::{InputBundle, InputError, load_input};

pub fn run_stage1(questions_path: &Path, summary_path: &Path) -> Result<InputBundle, InputError> {
    load_input(questions_path, summary_path)
}
