use std::path::{Path, PathBuf};

/// One capture job: a Flipbook URL, the number of page-turn iterations to
/// perform, and the directory the page images are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: String,
    pub iterations: u32,
    pub folder: PathBuf,
}

/// Parse one batch-file row of the form `source;iterations;folder`.
pub fn parse_batch_line(line: &str) -> crate::error::Result<Job> {
    let fields: Vec<&str> = line.split(';').map(str::trim).collect();

    if fields.len() != 3 {
        return Err(crate::error::CaptureError::config(format!(
            "Expected 3 semicolon-separated fields (source;iterations;folder), got {}: '{line}'",
            fields.len()
        )));
    }

    let source = fields[0];
    if source.is_empty() {
        return Err(crate::error::CaptureError::config(format!(
            "Empty source in batch row: '{line}'"
        )));
    }

    let iterations: u32 = fields[1].parse().map_err(|_| {
        crate::error::CaptureError::config(format!(
            "Invalid iteration count '{}' in batch row: '{line}'",
            fields[1]
        ))
    })?;
    if iterations == 0 {
        return Err(crate::error::CaptureError::config(format!(
            "Iteration count must be at least 1 in batch row: '{line}'"
        )));
    }

    let folder = fields[2];
    if folder.is_empty() {
        return Err(crate::error::CaptureError::config(format!(
            "Empty output folder in batch row: '{line}'"
        )));
    }

    Ok(Job {
        source: source.to_string(),
        iterations,
        folder: PathBuf::from(folder),
    })
}

/// Read a semicolon-delimited batch file, one job per line.
///
/// Blank lines are skipped; any malformed line fails the whole batch load.
pub fn parse_batch_file(path: &Path) -> crate::error::Result<Vec<Job>> {
    let content = std::fs::read_to_string(path)?;
    let mut jobs = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        jobs.push(parse_batch_line(line)?);
    }

    if jobs.is_empty() {
        return Err(crate::error::CaptureError::config(format!(
            "Batch file {} contains no jobs",
            path.display()
        )));
    }

    Ok(jobs)
}
