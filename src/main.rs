use std::fs;

use clap::{ArgAction, Parser};
use numscript::{
    error::Error,
    pipeline::{
        codegen::CodeGenerator,
        lexer::tokenize,
        parser::{parse, parse_tree},
        semantic::SemanticAnalyzer,
    },
};

/// numscript is a prefix-notation numeric scripting language that prints its
/// results together with three-address code and an assembly listing.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token list before running.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed AST before running.
    #[arg(short, long)]
    ast: bool,

    /// Prints the parse tree as Graphviz DOT before running.
    #[arg(long)]
    tree: bool,

    /// Prints the three-address code and assembly listings after the output.
    #[arg(short, long)]
    code: bool,

    /// Increases log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env().filter_level(log_level)
                                           .format_timestamp(None)
                                           .init();

    let script = if args.file {
        log::info!("reading script from '{}'", args.contents);
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    if let Err(e) = execute(&script, &args) {
        log::error!("run failed: {e:?}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Runs every stage, printing the intermediate artifacts the flags ask for.
fn execute(script: &str, args: &Args) -> Result<(), Error> {
    let tokens = tokenize(script)?;
    if args.tokens {
        println!("Tokens:");
        for (token, line) in &tokens {
            println!("{line:>4}  {token}");
        }
        println!();
    }

    let ast = parse(&tokens)?;
    if args.ast {
        println!("AST:\n{ast:#?}\n");
    }
    if args.tree {
        println!("{}", parse_tree(&ast).to_dot());
    }

    SemanticAnalyzer::new().analyze(&ast)?;
    log::info!("semantic analysis passed");

    let mut generator = CodeGenerator::new();
    let output = generator.execute(&ast)?;

    if !output.is_empty() {
        println!("{output}");
    }
    if args.code {
        println!("\nThree-Address Code:\n{}", generator.get_tac());
        println!("\nAssembly Code:\n{}", generator.get_assembly());
    }

    Ok(())
}
