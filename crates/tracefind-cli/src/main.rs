use std::io::{self, Write};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::Result;
use serde_json::json;
use tracefind_core::{ByteSource, PathKind, ResolveRequest, Resolver};

#[derive(Parser, Debug)]
#[command(
    name = "tracefind",
    author,
    version,
    about = "Locate trace and experiment data files across search paths"
)]
struct Cli {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase logging (-vv reaches debug, -vvv trace)",
        global = true
    )]
    verbose: u8,
    #[arg(long, help = "Emit machine-readable JSON on stdout", global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Resolve a file name and report where it was found.")]
    Locate(ResolveArgs),
    #[command(about = "Resolve a file name and write its bytes to stdout.")]
    Cat(ResolveArgs),
}

#[derive(Args, Debug)]
struct ResolveArgs {
    #[arg(help = "File name to resolve")]
    file: String,
    #[arg(
        long,
        help = "Search path to walk; defaults to RAWDATA from the environment"
    )]
    path: Option<String>,
    #[arg(
        long,
        value_name = "FILE",
        help = "Reference file whose directory is probed as a last resort"
    )]
    relative_to: Option<String>,
    #[arg(
        long,
        value_enum,
        help = "Use the configured search path for this kind of file"
    )]
    kind: Option<Kind>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Trace,
    Exp,
}

impl From<Kind> for PathKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Trace => PathKind::Trace,
            Kind::Exp => PathKind::Experiment,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let resolver = Resolver::new();
    let code = match &cli.command {
        Command::Locate(args) => locate(&resolver, args, cli.json)?,
        Command::Cat(args) => cat(&resolver, args)?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = format!("tracefind={level},tracefind_core={level},tracefind_domain={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn resolve_source(resolver: &Resolver, args: &ResolveArgs) -> Option<ByteSource> {
    let path = match (&args.path, args.kind) {
        (Some(path), _) => Some(path.clone()),
        (None, Some(kind)) => resolver.config().get(kind.into()),
        (None, None) => None,
    };
    resolver.resolve(&ResolveRequest {
        file: &args.file,
        path: path.as_deref(),
        relative_to: args.relative_to.as_deref(),
    })
}

fn locate(resolver: &Resolver, args: &ResolveArgs, as_json: bool) -> Result<i32> {
    match resolve_source(resolver, args) {
        Some(source) => {
            if as_json {
                let payload = json!({
                    "found": true,
                    "file": args.file,
                    "origin": source.origin(),
                    "buffered": source.is_buffered(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{}", source.origin());
            }
            Ok(0)
        }
        None => {
            if as_json {
                let payload = json!({ "found": false, "file": args.file });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                eprintln!("tracefind: {}: not found", args.file);
            }
            Ok(1)
        }
    }
}

fn cat(resolver: &Resolver, args: &ResolveArgs) -> Result<i32> {
    match resolve_source(resolver, args) {
        Some(mut source) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            io::copy(&mut source, &mut handle)?;
            handle.flush()?;
            Ok(0)
        }
        None => {
            eprintln!("tracefind: {}: not found", args.file);
            Ok(1)
        }
    }
}
