use anyhow::Context;
use clap::{Parser, ValueEnum};
use logo_turtle::{Interpreter, InterpreterConfig, Manual, RecordingRenderer, TurtleState};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    /// An SVG image of the finished drawing.
    Svg,
    /// The full, ordered log of renderer calls.
    Json,
}

/// Runs a turtle program and prints the resulting drawing.
#[derive(Parser)]
struct Args {
    /// Program to run.
    input: Option<PathBuf>,

    /// Canvas width.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 600)]
    height: u32,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Treat `/* ... */` as ordinary program text.
    #[arg(long)]
    keep_comments: bool,

    /// Print the command manual instead of running a program.
    #[arg(long)]
    list_commands: bool,

    /// JSON manual to print with --list-commands, instead of the built-in one.
    #[arg(long)]
    manual: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    if args.list_commands {
        let manual = match &args.manual {
            Some(path) => Manual::load(path)?,
            None => Manual::standard(),
        };
        for entry in &manual.commands {
            println!("• {}\n    {}\n    {}", entry.name, entry.code, entry.desc);
        }
        return Ok(());
    }

    let input = args
        .input
        .context("no input program given (pass a file, or --list-commands)")?;
    let code = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to open input file {}", input.display()))?;

    let interpreter = Interpreter::new(InterpreterConfig {
        ignore_comments: !args.keep_comments,
        ..Default::default()
    });
    let mut renderer = RecordingRenderer::new(args.width, args.height);
    let mut turtle = TurtleState::new((args.width, args.height));
    interpreter.run(&code, &mut turtle, &mut renderer);

    match args.format {
        Format::Svg => print!("{}", renderer.to_svg()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&renderer)?),
    }
    Ok(())
}
