use clap::Parser;
use colored::Colorize;
use liang::{LiangTable, Word};
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = cli.run() {
        if !err.is_empty() {
            eprintln!("{} {err}", "error:".red().bold());
        }
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Tools for working with TeX hyphenation patterns.
#[derive(Debug, Parser)]
#[command(
    name = "hyphtools",
    version = "0.1",
    about,
    long_about,
    max_term_width(100)
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print more log messages; pass twice for even more.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    fn run(self) -> Result<(), String> {
        match self.command {
            Command::Hyphenate(hyphenate) => hyphenate.run(),
            Command::Dump(dump) => dump.run(),
            Command::Check(check) => check.run(),
            Command::Compile(compile) => compile.run(),
        }
    }
}

#[derive(Clone, Debug, clap::Subcommand)]
enum Command {
    /// Hyphenate words.
    ///
    /// The patterns are read either from a TeX pattern file,
    ///   which contains a `\patterns{...}` group and optionally a `\hyphenation{...}` group,
    ///   or from a table compiled with `hyphtools compile`:
    ///
    ///     $ hyphtools hyphenate --patterns hyph-en-us.tex hyphenation
    ///     hy-phen-ation
    ///
    ///     $ hyphtools hyphenate --table hyph-en-us.json hyphenation
    ///     hy-phen-ation
    Hyphenate(Hyphenate),

    /// Print the pattern tree of a pattern file.
    ///
    /// Each line of the output is a node of the tree, indented by its depth.
    /// Nodes that end a pattern show the weights of the pattern,
    ///   including those inherited from shorter patterns; other nodes show `nil`.
    Dump(Dump),

    /// Check that a pattern file is valid.
    Check(Check),

    /// Compile a pattern file into a frozen table in JSON format.
    Compile(Compile),
}

#[derive(Clone, Debug, Parser)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["patterns", "table"])))]
struct Hyphenate {
    /// Path to a TeX pattern file.
    #[arg(short, long)]
    patterns: Option<PathBuf>,

    /// Path to a compiled table.
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Minimum number of letters before a break.
    #[arg(short, long)]
    left: Option<usize>,

    /// Minimum number of letters after a break.
    #[arg(short, long)]
    right: Option<usize>,

    /// Character to print at each break.
    #[arg(long)]
    hyphen: Option<char>,

    /// Words to hyphenate.
    #[arg(required = true)]
    words: Vec<String>,
}

impl Hyphenate {
    fn run(&self) -> Result<(), String> {
        let table = match (&self.patterns, &self.table) {
            (Some(path), _) => read_pattern_file(path)?,
            (None, Some(path)) => read_compiled_table(path)?,
            (None, None) => return Err("either --patterns or --table is required".into()),
        };
        let config = table.config();
        let left = self.left.unwrap_or(config.left_hyphen_min);
        let right = self.right.unwrap_or(config.right_hyphen_min);
        let hyphen = self.hyphen.unwrap_or(config.hyphen_char);
        for word in &self.words {
            let word = Word::from(word.as_str());
            match table.hyphenate_with(&word, left, right) {
                None => println!("{word}"),
                Some(breaks) => println!("{}", breaks.apply(&word, hyphen)),
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
struct Dump {
    /// Path to the TeX pattern file.
    path: PathBuf,
}

impl Dump {
    fn run(&self) -> Result<(), String> {
        let table = read_pattern_file(&self.path)?;
        print!("{}", table.patterns());
        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
struct Check {
    /// Path to the TeX pattern file.
    path: PathBuf,
}

impl Check {
    fn run(&self) -> Result<(), String> {
        let table = read_pattern_file(&self.path)?;
        println!(
            "{} {} patterns, {} exceptions, {} nodes",
            "ok:".green().bold(),
            table.patterns().pattern_count(),
            table.exceptions().len(),
            table.patterns().node_count(),
        );
        Ok(())
    }
}

#[derive(Clone, Debug, Parser)]
struct Compile {
    /// Path to the TeX pattern file.
    path: PathBuf,

    /// Output path for the compiled table.
    ///
    /// If not provided, the table is written to the same path
    ///     as the input file but with a .json file extension.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Compile {
    fn run(&self) -> Result<(), String> {
        let mut table = read_pattern_file(&self.path)?;
        table.freeze();
        let output = match &self.output {
            Some(output) => output.clone(),
            None => self.path.with_extension("json"),
        };
        let json = serde_json::to_string(&table)
            .map_err(|err| format!("failed to serialize the table: {err}"))?;
        std::fs::write(&output, json)
            .map_err(|err| format!("failed to write {}: {err}", output.display()))?;
        log::info!("wrote compiled table to {}", output.display());
        Ok(())
    }
}

fn read_pattern_file(path: &Path) -> Result<LiangTable, String> {
    let mut table = LiangTable::new();
    table
        .load_file(path)
        .map_err(|err| format!("{}: {err}", path.display()))?;
    Ok(table)
}

fn read_compiled_table(path: &Path) -> Result<LiangTable, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    serde_json::from_str(&data).map_err(|err| {
        format!("{} is not a compiled table: {err}", path.display())
    })
}
