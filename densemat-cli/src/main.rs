use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use densemat_cli::{read_row_indices, render_row_indices, write_output, MatrixSummary};
use densemat_core::{get_time, DenseMatrix};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Dense matrix utility working on 1-based coordinate text files")]
struct Cli {
    /// Write the result here instead of stdout. The file is only replaced
    /// once the command has succeeded.
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every element of the matrix, zeros included
    Print { input: PathBuf },
    /// Transpose a matrix
    Transpose { input: PathBuf },
    /// Multiply A by B
    Mult { a: PathBuf, b: PathBuf },
    /// Multiply A by the transpose of B
    MultT { a: PathBuf, b: PathBuf },
    /// Drop all-zero rows
    Compact {
        input: PathBuf,

        /// File to receive the removed 1-based row indices, one per line
        #[arg(long)]
        rows_out: Option<PathBuf>,
    },
    /// Reinsert zero rows at the 1-based indices listed in a file
    Expand {
        input: PathBuf,

        /// File of 1-based row indices, one per line
        #[arg(long)]
        rows: PathBuf,

        /// Use only the first N indices from the file
        #[arg(long)]
        rows_count: Option<usize>,
    },
    /// Print a JSON summary of the matrix (sparse rows are 1-based)
    Info { input: PathBuf },
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = get_time();

    let mut out = Vec::new();
    let mut rows_file = None;
    match &cli.command {
        Commands::Print { input } => {
            out.extend_from_slice(read_matrix(input)?.to_string().as_bytes());
        }
        Commands::Transpose { input } => {
            read_matrix(input)?.transpose()?.dump(&mut out)?;
        }
        Commands::Mult { a, b } => {
            read_matrix(a)?.mult(&read_matrix(b)?)?.dump(&mut out)?;
        }
        Commands::MultT { a, b } => {
            read_matrix(a)?
                .mult_transpose(&read_matrix(b)?)?
                .dump(&mut out)?;
        }
        Commands::Compact { input, rows_out } => {
            let (compacted, removed) = read_matrix(input)?.compact_with_rows()?;
            log::info!("Removed {} all-zero rows", removed.len());
            if let Some(path) = rows_out {
                rows_file = Some((path, render_row_indices(removed.indices())));
            }
            compacted.dump(&mut out)?;
        }
        Commands::Expand {
            input,
            rows,
            rows_count,
        } => {
            let matrix = read_matrix(input)?;
            let indices = read_row_indices(rows)?;
            let count = rows_count.unwrap_or(indices.len());
            matrix.expand(count, &indices)?.dump(&mut out)?;
        }
        Commands::Info { input } => {
            let summary = MatrixSummary::from_matrix(&read_matrix(input)?);
            serde_json::to_writer_pretty(&mut out, &summary)?;
            out.push(b'\n');
        }
    }

    if let Some((path, text)) = rows_file {
        write_output(Some(path.as_path()), text.as_bytes())?;
    }
    write_output(cli.output.as_deref(), &out)?;

    let elapsed_ms = get_time().saturating_sub(start) as f64 / 1e6;
    log::info!("Completed in {:.3} ms", elapsed_ms);
    Ok(())
}

fn read_matrix(path: &Path) -> Result<DenseMatrix<f64>, Box<dyn Error>> {
    Ok(DenseMatrix::load_from_path(path)?)
}
