use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use docx_quiz_csv::{
    convert::convert_document,
    output::{QuizOut, SavedQuiz, DEFAULT_OUTPUT_ROOT},
};

const DOCX_EXTENSION: &str = "docx";

struct Args {
    inputs: Vec<String>,
    output_path: String,
    write_warnings: bool,
}

fn get_args() -> Result<Option<Args>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "o",
        "output",
        &format!("output root directory (default: {})", DEFAULT_OUTPUT_ROOT),
        "DIR",
    );
    opts.optflag("w", "warnings", "also write a warnings CSV per document");
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        let brief = "Usage: docx-quiz-csv [options] FILE_OR_DIRECTORY...";
        print!("{}", opts.usage(brief));
        return Ok(None);
    }

    Ok(Some(Args {
        inputs: matches.free.clone(),
        output_path: matches
            .opt_str("o")
            .unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.to_owned()),
        write_warnings: matches.opt_present("w"),
    }))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match get_args()? {
        Some(args) => args,
        None => return Ok(()),
    };

    let files = collect_docx_files(&args.inputs)?;
    if files.is_empty() {
        println!("No files selected.");
        return Ok(());
    }

    let out = QuizOut::new(&args.output_path, args.write_warnings);

    let mut failures = 0;

    let pb = create_progress_bar(files.len() as u64);
    for path in &files {
        // ログ出力でバーが崩れないよう止めておく
        match pb.suspend(|| process_file(path, &out)) {
            Ok(saved) => {
                pb.println(format!(
                    "Generated files: {}, {}",
                    saved.metadata_path.display(),
                    saved.questions_path.display()
                ));
                if let Some(warnings_path) = &saved.warnings_path {
                    pb.println(format!("Warnings: {}", warnings_path.display()));
                }
            }
            Err(e) => {
                pb.suspend(|| error!("{:?}", e));
                failures += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if failures > 0 {
        println!("CSV files generated with {} failure(s).", failures);
        bail!("{} of {} documents failed", failures, files.len());
    }

    println!("CSV files generated successfully!");

    Ok(())
}

fn process_file(path: &Path, out: &QuizOut) -> Result<SavedQuiz> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("Input path has no file name")?;

    let bytes = fs::read(path).with_context(|| format!("File not found: {}", path.display()))?;

    let quiz = convert_document(&file_name, &bytes)?;

    for anomaly in &quiz.anomalies {
        warn!("{}: {}", &file_name, anomaly);
    }

    out.save(&quiz)
        .with_context(|| format!("Failed to save {}", &file_name))
}

// ディレクトリは直下の .docx に展開する
fn collect_docx_files(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let path = PathBuf::from(input);

        if path.is_dir() {
            let mut entries = Vec::new();
            for entry in fs::read_dir(&path)
                .with_context(|| format!("Failed to read directory: {}", path.display()))?
            {
                let entry_path = entry?.path();
                if entry_path.is_file() && is_docx(&entry_path) {
                    entries.push(entry_path);
                }
            }
            entries.sort();
            files.extend(entries);
        } else if is_docx(&path) {
            files.push(path);
        } else {
            warn!("Skipped (not a .{} file): {}", DOCX_EXTENSION, path.display());
        }
    }

    Ok(files)
}

fn is_docx(path: &Path) -> bool {
    path.extension()
        .map_or(false, |e| e.eq_ignore_ascii_case(DOCX_EXTENSION))
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
