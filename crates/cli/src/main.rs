use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use ribbit::{solve_with_cfg, Board, SearchCfg, DEFAULT_MIN_LEN};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod dictionary;
mod display;
mod provenance;
mod puzzle;
mod report;

use dictionary::{FileWordSource, WordSource, DEFAULT_DICT, DEFAULT_TOP_N};
use provenance::{ensure_parent, Provenance};
use puzzle::{grid_edges, parse_puzzle_file, Puzzle};
use report::SolveReport;

const FORMAT_HELP: &str = "\
Puzzle file format:

  ABCD
  EFGH
  IJKL
  MNOP

  Connections:
  0-1
  1-2
  ...

Node numbering is left-to-right, top-to-bottom (0-indexed).
Use '-', '.' or '_' for empty cells in the grid.";

#[derive(Parser)]
#[command(name = "ribbit")]
#[command(about = "Solve Ribbit word puzzles on letter graphs", after_help = FORMAT_HELP)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Find every dictionary word spelled by a simple path on the board
    Solve(SolveArgs),
    /// Parse a puzzle and draw its board
    Show {
        puzzle: PathBuf,
        /// Add 4-connected grid edges to the listed connections
        #[arg(long)]
        grid_edges: bool,
    },
}

#[derive(Args, Clone, Debug)]
struct SolveArgs {
    /// Path to the puzzle file
    puzzle: PathBuf,
    /// Frequency-ranked word list, one word per line
    #[arg(long, env = "RIBBIT_DICT", default_value = DEFAULT_DICT)]
    dict: PathBuf,
    /// Dictionary size: keep the top N words
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    dict_size: usize,
    #[arg(long, default_value_t = DEFAULT_MIN_LEN)]
    min_len: usize,
    /// Add 4-connected grid edges to the listed connections
    #[arg(long)]
    grid_edges: bool,
    /// Show one node path per found word
    #[arg(long)]
    paths: bool,
    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
    /// Also write the JSON report (plus provenance sidecar) to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve(args) => solve(args),
        Action::Show { puzzle, grid_edges } => show(&puzzle, grid_edges),
    }
}

fn load_puzzle(path: &Path, with_grid_edges: bool) -> Result<Puzzle> {
    if !path.exists() {
        bail!("file not found: {}", path.display());
    }
    let mut puzzle = parse_puzzle_file(path)?;
    if with_grid_edges {
        let extra = grid_edges(&puzzle);
        tracing::debug!(extra = extra.len(), "grid_edges");
        puzzle.edges.extend(extra);
    }
    tracing::info!(
        letters = %puzzle.letters,
        nodes = puzzle.node_count(),
        edges = puzzle.edges.len(),
        "puzzle"
    );
    Ok(puzzle)
}

fn run_solve(args: &SolveArgs, source: &dyn WordSource) -> Result<(Puzzle, SolveReport)> {
    let puzzle = load_puzzle(&args.puzzle, args.grid_edges)?;
    let words = source.load(args.dict_size, args.min_len)?;
    tracing::info!(words = words.len(), min_len = args.min_len, "dictionary");

    let cfg = SearchCfg {
        min_len: args.min_len,
        ..SearchCfg::default()
    };
    let solution = solve_with_cfg(&puzzle.letters, &puzzle.edges, &words, cfg);
    let s = solution.stats;
    tracing::info!(
        found = solution.words.len(),
        edges_dropped = s.edges_dropped,
        dict_kept = s.dict_kept,
        visits = s.visits,
        pruned = s.pruned,
        "solve"
    );
    let report = SolveReport::new(&puzzle, args.min_len, words.len(), solution, args.paths);
    Ok((puzzle, report))
}

fn solve(args: SolveArgs) -> Result<()> {
    let source = FileWordSource::new(&args.dict);
    tracing::info!(dict = %source.path().display(), top_n = args.dict_size, "dictionary_source");
    let (puzzle, report) = run_solve(&args, &source)?;

    if let Some(out) = &args.out {
        write_report(out, &args, &report)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    let rule = "=".repeat(60);
    println!("{rule}\nRIBBIT PUZZLE SOLVER\n{rule}");
    println!("  Letters: {}", puzzle.letters);
    println!("  Nodes: {}", puzzle.node_count());
    println!("  Edges: {}", puzzle.edges.len());
    print!("{}", display::render_board(&puzzle));
    print!("{}", display::render_results(&report.words));
    if args.paths {
        let board = Board::new(&puzzle.letters, &puzzle.edges);
        print!("{}", display::render_paths(&board, &report.words));
    }
    Ok(())
}

fn write_report(out: &Path, args: &SolveArgs, report: &SolveReport) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, serde_json::to_vec_pretty(report)?)?;
    let params = serde_json::json!({
        "puzzle": args.puzzle,
        "dict": args.dict,
        "dict_size": args.dict_size,
        "min_len": args.min_len,
        "grid_edges": args.grid_edges,
    });
    let prov_path = Provenance::capture(params).write_next_to(out)?;
    tracing::info!(out = %out.display(), provenance = %prov_path.display(), "report_written");
    Ok(())
}

fn show(path: &Path, with_grid_edges: bool) -> Result<()> {
    let puzzle = load_puzzle(path, with_grid_edges)?;
    println!("  Letters: {}", puzzle.letters);
    print!("{}", display::render_board(&puzzle));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(puzzle: PathBuf, dict: PathBuf) -> SolveArgs {
        SolveArgs {
            puzzle,
            dict,
            dict_size: DEFAULT_TOP_N,
            min_len: DEFAULT_MIN_LEN,
            grid_edges: false,
            paths: false,
            json: false,
            out: None,
        }
    }

    #[test]
    fn cli_parses_solve_flags() {
        let cmd = Cmd::try_parse_from([
            "ribbit",
            "solve",
            "p.txt",
            "--dict",
            "w.txt",
            "--min-len",
            "5",
            "--dict-size",
            "1000",
            "--paths",
        ])
        .unwrap();
        let Action::Solve(a) = cmd.action else {
            panic!("expected solve");
        };
        assert_eq!(a.puzzle, PathBuf::from("p.txt"));
        assert_eq!(a.dict, PathBuf::from("w.txt"));
        assert_eq!(a.min_len, 5);
        assert_eq!(a.dict_size, 1000);
        assert!(a.paths && !a.json && !a.grid_edges);
    }

    #[test]
    fn solve_end_to_end() {
        let dir = tempdir().unwrap();
        let puzzle = dir.path().join("p.txt");
        let dict = dir.path().join("w.txt");
        // B A
        // K E
        fs::write(&puzzle, "BA\nKE\n\nConnections:\n0-1\n1-3\n3-2\n2-0\n").unwrap();
        fs::write(&dict, "bake\nbeak\nabke\nkeab\nbak\n").unwrap();

        let a = args(puzzle, dict.clone());
        let (p, report) = run_solve(&a, &FileWordSource::new(&dict)).unwrap();
        assert_eq!(p.letters, "BAKE");
        // Square b-a-e-k-b: "bake" needs a-k, "beak" needs b-e.
        assert_eq!(report.words, vec!["abke", "keab"]);
        assert_eq!(report.dict_size, 4);
    }

    #[test]
    fn grid_edges_flag_adds_connections() {
        let dir = tempdir().unwrap();
        let puzzle = dir.path().join("p.txt");
        let dict = dir.path().join("w.txt");
        fs::write(&puzzle, "BA\nKE\n\nConnections:\n").unwrap();
        fs::write(&dict, "abke\n").unwrap();

        let mut a = args(puzzle, dict.clone());
        let src = FileWordSource::new(&dict);
        assert!(run_solve(&a, &src).unwrap().1.words.is_empty());
        a.grid_edges = true;
        assert_eq!(run_solve(&a, &src).unwrap().1.words, vec!["abke"]);
    }

    #[test]
    fn missing_puzzle_is_an_error() {
        let dir = tempdir().unwrap();
        let a = args(dir.path().join("none.txt"), dir.path().join("w.txt"));
        let err = run_solve(&a, &FileWordSource::new(&a.dict)).unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn write_report_emits_sidecar() {
        let dir = tempdir().unwrap();
        let puzzle = dir.path().join("p.txt");
        let dict = dir.path().join("w.txt");
        fs::write(&puzzle, "AB\n\nConnections:\n0-1\n").unwrap();
        fs::write(&dict, "ab\n").unwrap();
        let mut a = args(puzzle, dict.clone());
        a.min_len = 2;
        let out = dir.path().join("out").join("words.json");
        a.out = Some(out.clone());

        let (_, report) = run_solve(&a, &FileWordSource::new(&dict)).unwrap();
        write_report(&out, &a, &report).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(v["words"], serde_json::json!(["ab"]));
        assert!(dir.path().join("out").join("words.provenance.json").exists());
    }
}
