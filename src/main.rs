use clap::{Parser as ClapParser, Subcommand};
use formula_lang::cli::{self, AnnotateOptions, CliError, TokensOptions};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "formula")]
#[command(about = "Formula - a tokenizer for spreadsheet-style formula expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a formula and print the token stream as JSON
    Tokens {
        /// The formula to tokenize (reads from stdin if not provided)
        formula: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print each token with its kind, span, and source text
    Annotate {
        /// The formula to annotate (reads from stdin if not provided)
        formula: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Tokens { formula, pretty } => run_tokens(formula, pretty),
        Commands::Annotate { formula } => run_annotate(formula),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn resolve_formula(formula: Option<String>) -> Result<String, CliError> {
    match formula {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(buffer)
        }
        None => Err(CliError::NoFormula),
    }
}

fn run_tokens(formula: Option<String>, pretty: bool) -> Result<(), CliError> {
    let formula = resolve_formula(formula)?;
    let options = TokensOptions { formula, pretty };
    println!("{}", cli::execute_tokens(&options));
    Ok(())
}

fn run_annotate(formula: Option<String>) -> Result<(), CliError> {
    let formula = resolve_formula(formula)?;
    let options = AnnotateOptions { formula };
    let listing = cli::execute_annotate(&options);
    if !listing.is_empty() {
        println!("{}", listing);
    }
    Ok(())
}
