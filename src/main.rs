use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use succinct_tree_coding::{encode, Label, Leaf, OrderedTree, TreeCoding};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "succinct-tree-coding",
    about = "Succinct tree coding of ordered trees (bounded adaptive counters)"
)]
struct Cli {
    /// Log filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode the two example trees (Jurdziński–Lazić and a mixed-depth variant).
    Demo,
    /// Encode a tree given by its leaves.
    Encode {
        /// Leaves as `/`-separated direction paths, e.g. `0/1 2/4`.
        leaves: Vec<String>,
        /// Read leaves from a file (one per line, `#` starts a comment).
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Also print the grouped counter form of every code.
        #[arg(long)]
        groups: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `leaf -> code` line per leaf.
    Text,
    /// Full report as JSON (requires the `visualize` feature).
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo => run_demo()?,
        Commands::Encode {
            leaves,
            input,
            format,
            groups,
        } => run_encode(leaves, input, format, groups)?,
    }

    Ok(())
}

fn run_demo() -> Result<()> {
    let trees: [(&str, Vec<Vec<i64>>); 2] = [
        (
            "Jurdziński–Lazić example",
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![1, 1],
                vec![2, 0],
                vec![2, 1],
                vec![2, 2],
                vec![2, 3],
                vec![2, 4],
            ],
        ),
        (
            "mixed-depth example",
            vec![
                vec![0, 0],
                vec![0, 1],
                vec![1],
                vec![2, 0],
                vec![2, 1],
                vec![2, 2],
                vec![2, 3],
                vec![2, 4],
            ],
        ),
    ];

    for (name, paths) in trees {
        let tree = OrderedTree::from_paths(paths);
        let coding = encode(&tree).with_context(|| format!("failed to encode the {name}"))?;
        println!("# {name}");
        print!("{}", coding.render()?);
        println!();
    }

    Ok(())
}

fn run_encode(
    leaf_args: Vec<String>,
    input: Option<PathBuf>,
    format: Format,
    groups: bool,
) -> Result<()> {
    let mut leaves = Vec::new();
    if let Some(path) = &input {
        leaves.extend(read_leaf_file(path)?);
    }
    for arg in &leaf_args {
        leaves.push(Leaf::parse(arg).with_context(|| format!("invalid leaf argument '{arg}'"))?);
    }
    if leaves.is_empty() {
        bail!("no leaves given; pass paths as arguments or use --input");
    }

    let tree: OrderedTree<Label> = leaves.into_iter().collect();
    info!(leaves = tree.size(), height = tree.height(), "tree loaded");

    let coding = encode(&tree).context("encoding failed")?;

    match format {
        Format::Text => print_text(&coding, groups)?,
        Format::Json => print_json(&tree, &coding)?,
    }

    Ok(())
}

fn read_leaf_file(path: &Path) -> Result<Vec<Leaf<Label>>> {
    let reader = BufReader::new(
        File::open(path).with_context(|| format!("failed to open leaf file {}", path.display()))?,
    );

    let mut leaves = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }
        let leaf = Leaf::parse(content)
            .with_context(|| format!("invalid leaf on line {}", line_no + 1))?;
        leaves.push(leaf);
    }

    Ok(leaves)
}

fn print_text(coding: &TreeCoding<Label>, groups: bool) -> Result<()> {
    for (leaf, code) in coding.sorted_entries()? {
        if groups {
            println!("{leaf}\t{code}\t{:?}", code.groups());
        } else {
            println!("{leaf}\t{code}");
        }
    }
    Ok(())
}

fn print_json(tree: &OrderedTree<Label>, coding: &TreeCoding<Label>) -> Result<()> {
    println!("{}", json_report(tree, coding)?);
    Ok(())
}

#[cfg(feature = "visualize")]
fn json_report(tree: &OrderedTree<Label>, coding: &TreeCoding<Label>) -> Result<String> {
    let report = succinct_tree_coding::CodingReport::new(tree, coding)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(not(feature = "visualize"))]
fn json_report(_tree: &OrderedTree<Label>, _coding: &TreeCoding<Label>) -> Result<String> {
    bail!("--format json requires building with the `visualize` feature")
}
