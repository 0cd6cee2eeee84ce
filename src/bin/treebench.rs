//! Build a tree from a key file, optionally run a query file against it,
//! and report comparison counts and timings.
//!
//! Usage:
//!   treebench [--bst] [--print-tree] <build-file> [query-file]

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use rbmap::{input, render, BstTree, InputError, OrderedKeyTree, RbTree};

struct Args {
    build: PathBuf,
    query: Option<PathBuf>,
    print_tree: bool,
    use_bst: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut build = None;
    let mut query = None;
    let mut print_tree = false;
    let mut use_bst = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--print-tree" => print_tree = true,
            "--bst" => use_bst = true,
            "--help" | "-h" => {
                return Err(String::new());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unknown flag: {arg}"));
            }
            _ if build.is_none() => build = Some(PathBuf::from(arg)),
            _ if query.is_none() => query = Some(PathBuf::from(arg)),
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }

    match build {
        Some(build) => Ok(Args {
            build,
            query,
            print_tree,
            use_bst,
        }),
        None => Err("missing build file".to_string()),
    }
}

fn print_row(label: &str, value: impl ToString) {
    println!("  {:<32} {}", label, value.to_string());
}

fn run(tree: &mut impl OrderedKeyTree, args: &Args) -> Result<(), InputError> {
    let keys = input::read_keys(&args.build)?;
    info!("building from {} ({} keys)", args.build.display(), keys.len());

    let start = Instant::now();
    for &key in &keys {
        tree.insert(key);
    }
    let build_time = start.elapsed();

    println!("== build: {} ==", args.build.display());
    print_row("keys inserted", keys.len());
    print_row("comparisons", tree.comparison_count());
    print_row("build time (s)", format!("{:.6}", build_time.as_secs_f64()));
    print_row("tree height", tree.height());

    if let Some(query_path) = &args.query {
        let queries = input::read_keys(query_path)?;
        info!(
            "querying from {} ({} keys)",
            query_path.display(),
            queries.len()
        );

        let start = Instant::now();
        let mut query_comparisons = 0u64;
        for &key in &queries {
            query_comparisons += tree.search(key);
        }
        let query_time = start.elapsed();

        println!("== query: {} ==", query_path.display());
        print_row("queries", queries.len());
        print_row("comparisons", query_comparisons);
        print_row("query time (s)", format!("{:.6}", query_time.as_secs_f64()));
        print_row("hits", tree.hits());
        print_row("misses", tree.misses());
    }

    Ok(())
}

fn main() {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("no logger installed yet");

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            eprintln!("usage: treebench [--bst] [--print-tree] <build-file> [query-file]");
            process::exit(2);
        }
    };

    let result = if args.use_bst {
        let mut tree = BstTree::new();
        run(&mut tree, &args).map(|()| {
            if args.print_tree {
                print!("{}", render::render(&tree));
            }
        })
    } else {
        let mut tree = RbTree::new();
        run(&mut tree, &args).map(|()| {
            if args.print_tree {
                print!("{}", render::render(&tree));
            }
        })
    };

    if let Err(err) = result {
        error!("{err}");
        process::exit(1);
    }
}
