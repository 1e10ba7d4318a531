use crate::domain::model::JobRecord;
use crate::utils::error::Result;
use std::path::Path;

const COLUMNS: [&str; 6] = [
    "Job Title",
    "Company",
    "Location",
    "URL",
    "Source",
    "Match Score",
];

/// Ranked jobs as a CSV document with the display column set. Scores render
/// as percentages, URLs stay raw.
pub fn to_csv(jobs: &[JobRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(COLUMNS)?;

    for job in jobs {
        let source = job.source.to_string();
        let score = job.display_score();
        writer.write_record([
            job.title.as_str(),
            job.company.as_str(),
            job.location.as_str(),
            job.url.as_str(),
            source.as_str(),
            score.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub fn write_csv<P: AsRef<Path>>(path: P, jobs: &[JobRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, to_csv(jobs)?)?;
    tracing::debug!("Wrote {} jobs to {}", jobs.len(), path.display());
    Ok(())
}

/// Fixed-width text table for terminal display, same columns as the CSV.
pub fn render_table(jobs: &[JobRecord]) -> String {
    let rows: Vec<[String; 6]> = jobs
        .iter()
        .map(|job| {
            [
                job.title.clone(),
                job.company.clone(),
                job.location.clone(),
                job.url.clone(),
                job.source.to_string(),
                job.display_score(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let format_row = |cells: &[String; 6]| -> String {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<w$}", cell, w = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let header: [String; 6] = COLUMNS.map(String::from);
    out.push_str(&format_row(&header));
    out.push('\n');
    out.push_str(&"-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }

    out
}
