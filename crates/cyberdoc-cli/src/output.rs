use cyberdoc_core::export::{Notice, NoticeLevel};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let w = widths.get(i).copied().unwrap_or(0);
                format!("{:width$}", c, width = w)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    println!("{}", render_row(headers.to_vec()));
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));
    for row in &rows {
        println!("{}", render_row(row.iter().map(String::as_str).collect()));
    }
}

/// Print an export outcome. Failures go to stderr but do not fail the command.
pub fn print_notice(notice: &Notice, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(notice);
    }
    match notice.level {
        NoticeLevel::Success => match &notice.path {
            Some(path) => println!("{} ({})", notice.message, path.display()),
            None => println!("{}", notice.message),
        },
        NoticeLevel::Failure => eprintln!("warning: {}", notice.message),
    }
    Ok(())
}
