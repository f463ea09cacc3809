//! Console rendering of a scan: grid table, per-status summary, hints.

use crate::config::Config;
use crate::types::{ServiceTagRecord, Status};
use std::collections::HashMap;

const HEADERS: [&str; 4] = ["Microservice", "UAT tag", "PROD tag", "Status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    counts: HashMap<Status, usize>,
}

impl Summary {
    pub fn from_records(records: &[ServiceTagRecord]) -> Self {
        let mut counts = HashMap::new();
        for record in records {
            *counts.entry(record.status).or_insert(0) += 1;
        }
        Self {
            total: records.len(),
            counts,
        }
    }

    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }
}

/// Renders records as a grid table in the style of `tabulate`'s `grid` format.
pub fn render_table(records: &[ServiceTagRecord]) -> String {
    let rows: Vec<[&str; 4]> = records
        .iter()
        .map(|r| {
            [
                r.service_name.as_str(),
                r.uat_tag.as_str(),
                r.prod_tag.as_str(),
                r.status.label(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&border(&widths, '-'));
    out.push_str(&row_line(&widths, &HEADERS));
    out.push_str(&border(&widths, '='));
    for row in &rows {
        out.push_str(&row_line(&widths, row));
        out.push_str(&border(&widths, '-'));
    }
    out
}

fn border(widths: &[usize; 4], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn row_line(widths: &[usize; 4], cells: &[&str; 4]) -> String {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.extend(std::iter::repeat(' ').take(pad + 1));
        line.push('|');
    }
    line.push('\n');
    line
}

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::from("Summary:\n");
    out.push_str(&format!("   Total microservices: {}\n", summary.total));
    for status in Status::ALL {
        out.push_str(&format!("   {}: {}\n", status.label(), summary.count(status)));
    }
    out
}

/// Follow-up suggestions for the operator, empty when nothing stands out.
pub fn render_hints(summary: &Summary, config: &Config) -> String {
    let mut out = String::new();

    let uat_newer = summary.count(Status::UatNewer);
    if uat_newer > 0 {
        out.push_str(&format!(
            "\nHint: {} a newer version in UAT\n   \
             Consider deploying to PROD once tests have passed\n",
            microservices(uat_newer, "runs", "run")
        ));
    }

    let missing = summary.count(Status::MissingConfig);
    if missing > 0 {
        out.push_str(&format!(
            "\nWarning: {} missing configuration\n   \
             Check the {} and {} files\n",
            microservices(missing, "has", "have"),
            config.uat_file,
            config.prod_file
        ));
    }

    out
}

fn microservices(count: usize, singular_verb: &str, plural_verb: &str) -> String {
    if count == 1 {
        format!("1 microservice {}", singular_verb)
    } else {
        format!("{} microservices {}", count, plural_verb)
    }
}

pub fn print_report(records: &[ServiceTagRecord], config: &Config) {
    let summary = Summary::from_records(records);
    print!("{}", render_table(records));
    println!();
    print!("{}", render_summary(&summary));
    print!("{}", render_hints(&summary, config));
}
