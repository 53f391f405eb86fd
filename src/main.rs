use std::{fs::read_to_string, path::PathBuf, process::ExitCode, rc::Rc, time::Instant};

use clap::Parser;
use literalc::{
    ast::types::{PrimitiveType, ValueType},
    display_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::{expr::parse_expr_ref, payload::Payload},
    render_location,
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Tokenizes a source file and coerces every literal in it.
#[derive(Debug, Parser)]
#[command(name = "literalc", version)]
struct Args {
    /// Source file to read
    file: PathBuf,

    /// Type every literal is coerced to, e.g. `uint8` or `f32`
    #[arg(short, long)]
    expect: Option<String>,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Log every pass at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let expected_type = match args.expect.as_deref() {
        Some(name) => match PrimitiveType::from_name(name) {
            Some(primitive) => Some(ValueType::new(primitive)),
            None => {
                error!(name, "unknown type name");
                eprintln!("Unknown type '{}'", name);
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let source = match read_to_string(&args.file) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to read {}: {}", args.file.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let file_name = args
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.file.display().to_string());

    let start = Instant::now();
    let tokens = match tokenize(&source, Some(file_name.clone())) {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", display_error(&err, &source));
            return ExitCode::FAILURE;
        }
    };
    debug!(count = tokens.len(), elapsed = ?start.elapsed(), "tokenized");

    if args.tokens {
        for token in &tokens {
            println!("{}:{}\t{}\t{}", token.line, token.column, token.kind, token.value);
        }
    }

    let mut payload = Payload::new(&tokens, Rc::new(file_name));

    while let Some(token) = payload.cursor.current() {
        if !token.kind.is_literal() || token.kind == TokenKind::StringLiteral {
            payload.cursor.skip();
            continue;
        }

        let node = parse_expr_ref(&mut payload, expected_type);
        if let Some(node) = payload.context.get(node) {
            println!("{}:{}\t{}", token.line, token.column, node.node_description());
        }
    }

    for issue in payload.collector.issues() {
        eprintln!("{}", issue);
        eprint!("{}", render_location(&source, &issue.location));
    }

    debug!(nodes = payload.context.len(), issues = payload.collector.len(), "done");

    if payload.collector.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
