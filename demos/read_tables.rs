//! Reads an HTML file (or stdin) and prints every table as a frame.
//!
//! ```text
//! RUST_LOG=debug cargo run --example read_tables -- page.html --header 0 --index 0
//! ```

use std::io::Read;

use anyhow::{Context, Result};
use html_table_frame::{CellTransform, FrameOptions, read_html};
use tracing_subscriber::EnvFilter;

fn parse_positions(value: Option<String>) -> Result<Vec<usize>> {
    value
        .map(|v| {
            v.split(',')
                .map(|p| p.trim().parse::<usize>().with_context(|| format!("bad position '{p}'")))
                .collect()
        })
        .unwrap_or_else(|| Ok(Vec::new()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut path = None;
    let mut header = None;
    let mut index = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--header" => header = args.next(),
            "--index" => index = args.next(),
            _ => path = Some(arg),
        }
    }

    let html = match path {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let options = FrameOptions::builder()
        .column_label_rows(parse_positions(header)?)
        .row_labels(parse_positions(index)?)
        .transform(CellTransform::normalize_whitespace())
        .build()?;

    for (n, frame) in read_html(&html, &options)?.iter().enumerate() {
        println!("# table {n} ({} x {})", frame.n_rows(), frame.n_cols());
        println!("{frame}");
    }
    Ok(())
}
