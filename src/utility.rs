pub mod str;
pub mod zip;

use std::path::Path;

// 拡張子を除いたファイル名
pub fn file_title(file_name: &str) -> String {
    let path = Path::new(file_name);
    match path.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => file_name.to_owned(),
    }
}
