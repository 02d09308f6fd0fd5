/// Diagnostic tool: reads DXF files and reports what the reader finds.
///
/// Usage:
///     cargo run --bin diag_sections -- <path_to_dxf>
///     cargo run --bin diag_sections -- drawings/   (reads all .dxf in dir)
use anyhow::{bail, Context, Result};
use dxfrust::{DxfReader, DxfReaderConfiguration};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        bail!("usage: diag_sections <path_to_dxf_or_directory>");
    }

    let path = PathBuf::from(&args[1]);
    let mut files = Vec::new();

    if path.is_dir() {
        for entry in fs::read_dir(&path).with_context(|| format!("failed to read directory {}", path.display()))? {
            let p = entry?.path();
            if p.extension().map(|e| e == "dxf").unwrap_or(false) {
                files.push(p);
            }
        }
        files.sort();
    } else {
        files.push(path);
    }

    for file in &files {
        println!("=== {} ===", file.display());
        let drawing = DxfReader::from_file(file)
            .with_context(|| format!("failed to open {}", file.display()))?
            .with_configuration(DxfReaderConfiguration { failsafe: true })
            .read()
            .with_context(|| format!("failed to parse {}", file.display()))?;

        println!("sections: {}", drawing.sections.len());
        for (name, section) in &drawing.sections {
            let flag = if section.is_recognized() { "" } else { "  [unrecognized]" };
            println!(
                "  {:<14} lines {:>6}..{:<6} ({} lines){}",
                name,
                section.start,
                section.end,
                section.len(),
                flag
            );
        }

        if let Some(vars) = drawing.header_variables() {
            println!("header variables: {}", vars.len());
            for (name, props) in vars {
                let values: Vec<&str> = props.iter().map(|p| p.value.as_str()).collect();
                println!("  {:<24} {}", name, values.join(" "));
            }
        }

        if !drawing.notifications.is_empty() {
            println!("notifications:");
            for notification in &drawing.notifications {
                println!("  {}", notification);
            }
        }
        println!();
    }

    Ok(())
}
