//! Replays the classic sparse matrix walkthrough and prints coordinate/value triples
//!
//! Run with `RUST_LOG=sparsend=trace cargo run --example demo` to watch cells
//! being materialized and erased.

use clap::Parser;
use sparsend::Matrix;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(about = "Sparse N-dimensional matrix demo")]
struct Cli {
    /// Default value of the diagonal matrix
    #[arg(long, default_value_t = 0)]
    default: i64,

    /// Width of the diagonal matrix
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Also fill and print a three-dimensional cube of this edge length
    #[arg(long)]
    cube: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    single_cell();
    diagonals(cli.default, cli.width);
    if let Some(edge) = cli.cube {
        cube(edge);
    }
}

fn single_cell() {
    let mut matrix: Matrix<i32> = Matrix::with_default(-1);
    println!("Unset cell [0][0] = {}", matrix.at(0).at(0).get());

    matrix.at(100).at(100).set(314);
    println!("After writing [100][100], size = {}", matrix.size());
    for (coordinate, value) in &matrix {
        let [x, y] = coordinate.into_array();
        println!("{x} {y} {value}");
    }
}

fn diagonals(default: i64, width: usize) {
    let mut matrix: Matrix<i64> = Matrix::with_default(default);
    for i in 0..width {
        let mirrored = width - 1 - i;
        matrix.at(i).at(i).set(i as i64);
        matrix.at(i).at(mirrored).set(mirrored as i64);
    }

    // Interior view, skipping the outer frame
    for i in 1..width.saturating_sub(1) {
        let row: Vec<String> = (1..width.saturating_sub(1))
            .map(|j| matrix.at_ref(i).at(j).get().to_string())
            .collect();
        println!("{}", row.join(" "));
    }

    println!("Mat size = {}", matrix.size());
    for (coordinate, value) in &matrix {
        let [x, y] = coordinate.into_array();
        println!("{x} {y} {value}");
    }
}

fn cube(edge: usize) {
    let mut matrix: Matrix<usize, 3> = Matrix::new();
    for i in 0..edge {
        matrix.at(i).at(i).at(i).set(i * i);
    }

    println!("Cube size = {}", matrix.size());
    for (coordinate, value) in &matrix {
        println!("{coordinate} {value}");
    }
}
