//! Showdown Binary
//!
//! Compare one line, tally a file of lines, or compute a range LCM.
//!
//! Commands: compare, tally, lcm
use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use showdown::LCM_DEFAULT_UPTO;
use showdown::play::Showdown;
use showdown::play::Tally;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Raise log verbosity (-v debug, -vv trace)")]
    verbose: u8,
    #[arg(long, global = true, help = "Also write debug logs to this file")]
    log_file: Option<PathBuf>,
    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Compare the two hands on one line of ten cards",
        alias = "cmp"
    )]
    Compare {
        #[arg(required = true, num_args = 1.., help = "Ten card tokens, player 1 first")]
        cards: Vec<String>,
    },
    #[command(
        about = "Count player 1 wins over every line of a file (or stdin)",
        alias = "sum"
    )]
    Tally {
        file: Option<PathBuf>,
        #[arg(long, help = "Skip malformed lines instead of aborting")]
        lenient: bool,
    },
    #[command(about = "Smallest number divisible by every integer in 1..=N")]
    Lcm {
        #[arg(long, default_value_t = LCM_DEFAULT_UPTO)]
        upto: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    showdown::log(level, args.log_file.as_deref())?;
    match args.command {
        Command::Compare { cards } => compare(&cards.join(" "), args.json),
        Command::Tally { file, lenient } => tally(file, lenient, args.json),
        Command::Lcm { upto } => lcm(upto, args.json),
    }
}

fn compare(line: &str, json: bool) -> anyhow::Result<()> {
    let showdown = Showdown::try_from(line).with_context(|| format!("parsing {:?}", line))?;
    let verdict = showdown
        .verdict()
        .with_context(|| format!("comparing {}", showdown))?;
    if json {
        println!("{}", serde_json::to_string(&verdict)?);
    } else {
        println!("P1 {}  {}", showdown.p1(), verdict.p1);
        println!("P2 {}  {}", showdown.p2(), verdict.p2);
        println!("{}", verdict.outcome);
    }
    Ok(())
}

fn tally(file: Option<PathBuf>, lenient: bool, json: bool) -> anyhow::Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading stdin")?;
            text
        }
    };
    let lines = text.lines().collect::<Vec<&str>>();
    log::info!("resolving {} lines", lines.len());
    let tally = if lenient {
        Tally::lenient(&lines)
    } else {
        Tally::strict(&lines).context("tallying lines")?
    };
    log::info!("{}", tally);
    if json {
        println!("{}", serde_json::to_string(&tally)?);
    } else {
        println!("{}", tally.wins());
    }
    Ok(())
}

fn lcm(upto: u64, json: bool) -> anyhow::Result<()> {
    let value = showdown::lcm::lcm(1..=upto)?;
    if json {
        println!("{}", serde_json::json!({ "upto": upto, "lcm": value }));
    } else {
        println!("{}", value);
    }
    Ok(())
}
