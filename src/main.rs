use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use vinoglyph::{csv_reader, data::TableData, parser, runtime, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "vinoglyph")]
#[command(about = "Render Chernoff wine-glass glyphs from delimited data using the GlyphPipe DSL", long_about = None)]
struct Args {
    /// GlyphPipe DSL string (e.g. 'glyph(fill: Alcohol) | sort(by: Proline, order: desc)')
    #[arg(default_value = "glyph()")]
    spec: String,

    /// Read the dataset from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Treat the input as a JSON array of objects instead of delimited text
    #[arg(long)]
    json: bool,

    /// Field delimiter for delimited input
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1500)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 3200)]
    height: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = Args::parse();

    let table = read_table(&args).context("Failed to read dataset")?;

    // Parse the DSL string
    let map_spec = match parser::parse_map_spec(&args.spec) {
        Ok((remaining, map_spec)) => {
            if !remaining.trim().is_empty() {
                eprintln!("Warning: unparsed input: '{}'", remaining);
            }
            map_spec
        }
        Err(e) => {
            eprintln!("Parse error: {:?}", e);
            std::process::exit(1);
        }
    };

    let options = RenderOptions {
        width: args.width,
        height: args.height,
    };

    // Render the glyph map
    let svg = runtime::render_map(map_spec, table, &options)
        .context("Failed to render glyph map")?;

    // Write SVG to stdout
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(svg.as_bytes())
        .context("Failed to write SVG to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}

fn read_table(args: &Args) -> Result<TableData> {
    if args.json {
        let mut raw = String::new();
        match &args.input {
            Some(path) => {
                raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read '{}'", path.display()))?;
            }
            None => {
                io::stdin()
                    .read_to_string(&mut raw)
                    .context("Failed to read from stdin")?;
            }
        }
        let value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
        return TableData::from_json(&value);
    }

    let delimiter = args.delimiter as u8;
    let csv_data = match &args.input {
        Some(path) => csv_reader::read_csv_from_path(path, delimiter)?,
        None => csv_reader::read_csv_from_stdin(delimiter)?,
    };
    Ok(TableData::from_csv(csv_data))
}
