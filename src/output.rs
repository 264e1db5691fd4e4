use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    convert::ConvertedQuiz,
    quiz::normalizer::{METADATA_COLUMNS, RECORD_COLUMNS},
};

pub const DEFAULT_OUTPUT_ROOT: &str = "generated_files";

const ANOMALY_COLUMNS: [&str; 3] = ["ordering", "kind", "detail"];

#[derive(Debug)]
pub struct SavedQuiz {
    pub metadata_path: PathBuf,
    pub questions_path: PathBuf,
    pub warnings_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct AnomalyRow<'a> {
    ordering: Option<usize>,
    kind: &'a str,
    detail: String,
}

/// Writes converted quizzes as CSV under `<root>/<title>/`.
pub struct QuizOut {
    root: PathBuf,
    write_warnings: bool,
}

impl QuizOut {
    pub fn new<P: AsRef<Path>>(root: P, write_warnings: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            write_warnings,
        }
    }

    pub fn save(&self, quiz: &ConvertedQuiz) -> Result<SavedQuiz> {
        let directory_path = self.root.join(&quiz.metadata.title);
        fs::create_dir_all(&directory_path).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                directory_path.display()
            )
        })?;

        let metadata_path = directory_path.join(format!("quiz_{}_metadata.csv", short_id()));
        write_csv(&metadata_path, &METADATA_COLUMNS, [&quiz.metadata])?;

        let questions_path = directory_path.join(format!("questions_{}.csv", short_id()));
        write_csv(&questions_path, &RECORD_COLUMNS, &quiz.records)?;

        let warnings_path = if self.write_warnings && !quiz.anomalies.is_empty() {
            let path = directory_path.join(format!("warnings_{}.csv", short_id()));
            let rows = quiz.anomalies.iter().map(|a| AnomalyRow {
                ordering: a.ordinal(),
                kind: a.kind(),
                detail: a.to_string(),
            });
            write_csv(&path, &ANOMALY_COLUMNS, rows)?;
            Some(path)
        } else {
            None
        };

        Ok(SavedQuiz {
            metadata_path,
            questions_path,
            warnings_path,
        })
    }
}

// 実行ごとに衝突しないよう uuid の先頭 8 文字
fn short_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(8);
    id
}

// 行が無くてもヘッダは書く
fn write_csv<T, I>(path: &Path, columns: &[&str], rows: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer
        .write_record(columns)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
