use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::ImageFormat;
use log::{error, info, warn};
use rayon::prelude::*;

use crate::builder::StyleBuilder;
use crate::common::{StyleConfig, StyleError, StyleResult};

/// Renders one image per code: the payload is the base link followed by the code.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub links_file: PathBuf,
    pub codes_file: PathBuf,
    pub output_dir: PathBuf,
    pub config: StyleConfig,
}

impl Default for BatchJob {
    fn default() -> Self {
        Self {
            links_file: PathBuf::from("links.txt"),
            codes_file: PathBuf::from("codes.txt"),
            output_dir: PathBuf::from("qr_codes"),
            config: StyleConfig { logo: Some(PathBuf::from("logo.png")), ..StyleConfig::default() },
        }
    }
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub saved: Vec<PathBuf>,
    pub failures: Vec<(String, StyleError)>,
}

impl BatchJob {
    pub fn run(&self) -> StyleResult<BatchReport> {
        let base_link = read_base_link(&self.links_file)?;
        let codes = read_codes(&self.codes_file)?;
        fs::create_dir_all(&self.output_dir)?;

        let has_logo = self.config.logo.as_deref().is_some_and(Path::exists);
        info!("Base link: {base_link}");
        info!(
            "Processing {} codes {}",
            codes.len(),
            if has_logo { "with logo" } else { "without logo" }
        );

        let stems = output_stems(&codes);
        let total = codes.len();
        let done = AtomicUsize::new(0);
        let results = codes
            .par_iter()
            .zip(stems.par_iter())
            .map(|(code, stem)| {
                let path = self.output_dir.join(format!("{stem}.png"));
                let res = self.render_one(&base_link, code, path);
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                if n % 10 == 0 {
                    info!("Progress: {n}/{total} completed");
                }
                (code, res)
            })
            .collect::<Vec<_>>();

        let mut report = BatchReport::default();
        for (code, res) in results {
            match res {
                Ok(path) => report.saved.push(path),
                Err(e) => {
                    error!("Failed to create QR code for {code}: {e}");
                    report.failures.push((code.clone(), e));
                }
            }
        }

        info!(
            "QR code generation complete: {} saved in {}, {} failed",
            report.saved.len(),
            self.output_dir.display(),
            report.failures.len()
        );
        Ok(report)
    }

    fn render_one(&self, base_link: &str, code: &str, path: PathBuf) -> StyleResult<PathBuf> {
        let payload = format!("{base_link}{code}");
        info!("Creating QR code for code: {code}");

        let img = StyleBuilder::new(&payload).config(self.config.clone()).build()?;
        img.save_with_format(&path, ImageFormat::Png)?;

        info!("Saved: {}", path.display());
        Ok(path)
    }
}

/// First line of the links file, trimmed.
pub fn read_base_link(path: &Path) -> StyleResult<String> {
    let content = fs::read_to_string(path)
        .map_err(|e| StyleError::Batch(format!("Cannot read '{}': {e}", path.display())))?;
    let base = content.lines().next().map(str::trim).unwrap_or_default();
    if base.is_empty() {
        return Err(StyleError::Batch(format!("No base link found in '{}'", path.display())));
    }
    Ok(base.to_string())
}

/// Trimmed, non-empty lines of the codes file, in order.
pub fn read_codes(path: &Path) -> StyleResult<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| StyleError::Batch(format!("Cannot read '{}': {e}", path.display())))?;
    let codes: Vec<String> =
        content.lines().map(str::trim).filter(|c| !c.is_empty()).map(String::from).collect();
    if codes.is_empty() {
        return Err(StyleError::Batch(format!("No codes found in '{}'", path.display())));
    }
    Ok(codes)
}

/// File stem for a code: characters that are unsafe in file names become `_`.
pub fn output_stem(code: &str) -> String {
    code.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') { c } else { '_' })
        .collect()
}

/// One distinct file stem per code, in order. A stem already taken by an earlier code (compared
/// case-insensitively) gets the first free `-2`, `-3`, ... suffix.
pub fn output_stems(codes: &[String]) -> Vec<String> {
    let mut taken = HashSet::with_capacity(codes.len());
    codes
        .iter()
        .map(|code| {
            let base = output_stem(code);
            let mut stem = base.clone();
            let mut n = 1;
            while !taken.insert(stem.to_ascii_lowercase()) {
                n += 1;
                stem = format!("{base}-{n}");
            }
            if n > 1 {
                warn!("Output name {base:?} already used, saving {code:?} as {stem:?}");
            }
            stem
        })
        .collect()
}

#[cfg(test)]
mod batch_tests {
    use std::fs;
    use std::path::PathBuf;

    use test_case::test_case;

    use super::{output_stem, output_stems, read_base_link, read_codes, BatchJob};
    use crate::common::{StyleConfig, StyleError};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("qrstyle-batch-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test_case("ABC123", "ABC123")]
    #[test_case("a/b\\c", "a_b_c")]
    #[test_case("code 7?", "code_7_")]
    #[test_case("v1.2-x_y", "v1.2-x_y")]
    fn test_output_stem(code: &str, exp: &str) {
        assert_eq!(output_stem(code), exp);
    }

    #[test]
    fn test_read_inputs() {
        let dir = temp_dir("inputs");
        let links = dir.join("links.txt");
        let codes = dir.join("codes.txt");
        fs::write(&links, "  https://pay.example/?c=  \nhttps://ignored\n").unwrap();
        fs::write(&codes, "A1\n\n  B2 \n   \nC3").unwrap();

        assert_eq!(read_base_link(&links).unwrap(), "https://pay.example/?c=");
        assert_eq!(read_codes(&codes).unwrap(), vec!["A1", "B2", "C3"]);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_inputs_empty_or_missing() {
        let dir = temp_dir("empty");
        let links = dir.join("links.txt");
        let codes = dir.join("codes.txt");
        fs::write(&links, "\nhttps://second-line\n").unwrap();
        fs::write(&codes, "\n  \n").unwrap();

        assert!(matches!(read_base_link(&links), Err(StyleError::Batch(_))));
        assert!(matches!(read_codes(&codes), Err(StyleError::Batch(_))));
        assert!(matches!(read_codes(&dir.join("nope.txt")), Err(StyleError::Batch(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_continues_past_failures() {
        let dir = temp_dir("run");
        fs::write(dir.join("links.txt"), "PAY|").unwrap();
        let too_long = "9".repeat(8000);
        fs::write(dir.join("codes.txt"), format!("M1\n{too_long}\nM2\n")).unwrap();

        let job = BatchJob {
            links_file: dir.join("links.txt"),
            codes_file: dir.join("codes.txt"),
            output_dir: dir.join("out"),
            config: StyleConfig { module_size: 4, ..StyleConfig::default() },
        };
        let report = job.run().unwrap();

        assert_eq!(report.saved.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0].1, StyleError::EncodingFailure(_)));
        assert!(dir.join("out").join("M1.png").exists());
        assert!(dir.join("out").join("M2.png").exists());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_output_stems_unique() {
        let codes: Vec<String> =
            ["a b", "a_b", "a_b-2", "A_B", "x", "a?b"].iter().map(|c| c.to_string()).collect();
        assert_eq!(output_stems(&codes), vec!["a_b", "a_b-2", "a_b-2-2", "A_B-3", "x", "a_b-4"]);
    }

    #[test]
    fn test_run_colliding_codes() {
        let dir = temp_dir("collide");
        fs::write(dir.join("links.txt"), "PAY|").unwrap();
        fs::write(dir.join("codes.txt"), "a b\na_b\n").unwrap();

        let job = BatchJob {
            links_file: dir.join("links.txt"),
            codes_file: dir.join("codes.txt"),
            output_dir: dir.join("out"),
            config: StyleConfig { module_size: 4, ..StyleConfig::default() },
        };
        let report = job.run().unwrap();

        let out = dir.join("out");
        assert_eq!(report.saved, vec![out.join("a_b.png"), out.join("a_b-2.png")]);
        assert!(report.failures.is_empty());
        assert_eq!(fs::read_dir(&out).unwrap().count(), 2);
        fs::remove_dir_all(&dir).unwrap();
    }
}
