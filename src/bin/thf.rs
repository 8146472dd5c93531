//! thf - wrap math in LaTeX section headings with \texorpdfstring

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use texheading::{
    document::{check_file, run},
    transliterate_with, FixError, FixOptions, FixReport, HeadingFixer, LineChange, SymbolTable,
    DEFAULT_MAPPINGS_FILE,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "thf")]
#[command(version)]
#[command(
    about = "Fix hyperref bookmark errors by wrapping math in section headings with \\texorpdfstring",
    long_about = None
)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input TeX file to process
    input_file: Option<String>,

    /// Output file (default: overwrite the input file)
    #[arg(short, long)]
    output: Option<String>,

    /// JSON file with custom formula mappings
    #[arg(short, long, global = true, default_value = DEFAULT_MAPPINGS_FILE)]
    mappings: String,

    /// Accept every proposed rendering without prompting
    #[arg(short = 'y', long)]
    yes: bool,

    /// Report headings that need fixing without changing anything; exits 1 if any do
    #[arg(long)]
    check: bool,

    /// Strict mode: exit with error if any warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Log every decision
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print the plain-text rendering of a formula
    Render {
        /// Formula without $ delimiters, e.g. '\frac{a}{b}'
        formula: String,
    },

    /// Show version and mapping info
    Info,
}

#[cfg(feature = "cli")]
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    // Handle subcommands first
    if let Some(ref cmd) = cli.command {
        handle_subcommand(cmd, &cli);
        return;
    }

    let Some(input) = cli.input_file.clone() else {
        eprintln!("Error: no input file given. Run `thf --help` for usage.");
        std::process::exit(1);
    };

    if cli.check {
        std::process::exit(run_check(&cli, &input));
    }

    let mut options = FixOptions::new(&input)
        .with_mappings(&cli.mappings)
        .auto_accept(cli.yes);
    if let Some(ref output) = cli.output {
        options = options.with_output(output);
    }

    let report = match run(&options) {
        Ok(report) => report,
        Err(FixError::InputNotFound { path }) => {
            eprintln!("Error: Input file '{}' not found.", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    print_report(&report, cli.quiet);

    if cli.strict && !report.warnings.is_empty() {
        eprintln!(
            "Error: {} warning(s) occurred (strict mode enabled)",
            report.warnings.len()
        );
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: &Commands, cli: &Cli) {
    match cmd {
        Commands::Render { formula } => {
            let table = load_table(cli);
            println!("{}", transliterate_with(formula, &table));
        }

        Commands::Info => {
            let table = load_table(cli);
            println!("thf - LaTeX section heading math fixer");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Headings scanned: \\section{{...}}, \\subsection{{...}}");
            println!("Wrap command:     \\texorpdfstring{{$math$}}{{text}}");
            println!();
            println!("Mapping file: {}", cli.mappings);
            println!(
                "Mappings:     {} ({} built-in)",
                table.len(),
                SymbolTable::with_defaults().len()
            );
        }
    }
}

/// Defaults plus the mapping file, reporting a bad file unless quiet
#[cfg(feature = "cli")]
fn load_table(cli: &Cli) -> SymbolTable {
    let (table, warning) = SymbolTable::build_with_warnings(Some(Path::new(&cli.mappings)));
    match warning {
        Some(warning) if !cli.quiet => eprintln!("{}", warning),
        _ => {}
    }
    table
}

#[cfg(feature = "cli")]
fn run_check(cli: &Cli, input: &str) -> i32 {
    let mut fixer = HeadingFixer::new(load_table(cli));
    let changes = match check_file(&mut fixer, Path::new(input)) {
        Ok(changes) => changes,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if changes.is_empty() {
        eprintln!("✓ No headings need fixing");
        return 0;
    }

    print_changes(&changes);
    eprintln!("✗ {} heading(s) need fixing", changes.len());
    1
}

#[cfg(feature = "cli")]
fn print_changes(changes: &[LineChange]) {
    for change in changes {
        eprintln!("Line {}: Modified section heading", change.line_number);
        eprintln!("  Before: {}", change.before.trim());
        eprintln!("  After:  {}", change.after.trim());
        eprintln!();
    }
}

#[cfg(feature = "cli")]
fn print_report(report: &FixReport, quiet: bool) {
    print_changes(&report.changes);

    if !quiet {
        for warning in &report.warnings {
            eprintln!("{}", warning);
        }
    }

    if !report.has_changes() {
        eprintln!("No changes needed - no math formulas found in section headings.");
    } else if report.written {
        eprintln!(
            "✓ File processed successfully. Output written to: {}",
            report.output_path.display()
        );
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texheading --features cli");
    eprintln!("  thf [OPTIONS] <INPUT_FILE>");
}
