//! Subcommand implementations

pub mod graph;
pub mod load;

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, Color, Table};

use citeline_occ::Summary;

/// Print a per-kind summary table on stderr
pub fn print_summary(title: &str, summary: &Summary) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec![
            Cell::new(title).fg(Color::Cyan),
            Cell::new("Files").fg(Color::Cyan),
            Cell::new("Records").fg(Color::Cyan),
            Cell::new("Links").fg(Color::Cyan),
            Cell::new("Warnings").fg(Color::Cyan),
        ]);

    for k in &summary.kinds {
        table.add_row(vec![
            Cell::new(k.kind),
            Cell::new(format!(
                "{}/{} ({} failed)",
                k.completed_files, k.total_files, k.failed_files
            )),
            Cell::new(k.records),
            Cell::new(k.links),
            Cell::new(k.warnings),
        ]);
    }
    table.add_row(vec![
        Cell::new("total").fg(Color::Cyan),
        Cell::new(format!("{} failed", summary.failed_files())),
        Cell::new(summary.records()),
        Cell::new(summary.links()),
        Cell::new(summary.warnings()),
    ]);

    eprintln!("\n{table}");
    eprintln!("Time: {:.1}s", summary.elapsed.as_secs_f64());
}
