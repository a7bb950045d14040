use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use sssp::{dimacs, shortest_paths};

/// Compute single-source shortest paths over a DIMACS-style edge list and
/// print one distance line per node to stdout and the output file.
#[derive(Parser)]
#[command(name = "sssp", version)]
struct Args {
    /// Edge-list input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Start node for the search (1-based, like the input format)
    #[arg(short, long, default_value_t = 1)]
    source: usize,

    /// Node-id range of the graph; ids must lie in [0, capacity)
    #[arg(short, long, default_value_t = 1024)]
    capacity: usize,

    /// Persisted copy of the report
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,
}

fn run(args: &Args) -> sssp::Result<()> {
    let graph = match &args.input {
        Some(path) => dimacs::read_graph(BufReader::new(File::open(path)?), args.capacity)?,
        None => dimacs::read_graph(io::stdin().lock(), args.capacity)?,
    };

    let distances = shortest_paths(&graph, args.source)?;

    let mut report = BufWriter::new(File::create(&args.output)?);
    dimacs::write_report(&mut report, args.source, &distances)?;
    report.flush()?;
    dimacs::write_report(io::stdout().lock(), args.source, &distances)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("sssp: {err}");
        process::exit(1);
    }
}
