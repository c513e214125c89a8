use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use subcandidates_engine::{ConversionService, IdentityConversion, TableConversion};
use subcandidates_im::config::Settings;
use subcandidates_im::logging::init_logging_with_default;
use subcandidates_im::{
    ClientId, CompositionController, ControllerConfig, ControllerResult, HostAction, HostEvent,
    KeyEvent, PreeditStyle,
};
use tracing::info;

/// Terminal host for the composition controller
#[derive(Parser, Debug)]
#[command(name = "subcandidates")]
#[command(about = "Convert readings and pick candidates in the terminal", long_about = None)]
struct Args {
    /// Conversion table (TSV: reading, then candidates). Without one, every
    /// reading converts to itself.
    #[arg(short, long)]
    table: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,
}

const CLIENT: ClientId = ClientId(1);

const HELP: &str = "\
Each line is typed key by key; space is the trigger.
Commands:
  :next :prev        select next/previous candidate
  :row N             select candidate row N (0-based)
  :sub-next :sub-prev
  :sub-row N         select sub-candidate row N (0-based)
  :page-next :page-prev
  :commit :cancel :bs
  :help :q";

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "subcandidates_im=debug,subcandidates_engine=debug,subcandidates=debug"
    } else {
        "warn"
    };
    init_logging_with_default(default_filter);

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::load()?,
    };

    let service: Arc<dyn ConversionService> = match &args.table {
        Some(path) => Arc::new(
            TableConversion::load(path)
                .with_context(|| format!("failed to load table from {}", path.display()))?,
        ),
        None => Arc::new(IdentityConversion),
    };
    info!("starting with table {:?}", args.table);

    let config = ControllerConfig::from(&settings);
    let mut controller = CompositionController::with_config(service, config);
    repl(&mut controller)
}

fn repl(controller: &mut CompositionController) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", HELP)?;

    loop {
        write!(out, "{:?}> ", controller.state())?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }

        if let Some(command) = line.strip_prefix(':') {
            match command.trim() {
                "q" | "quit" => break,
                "help" => writeln!(out, "{}", HELP)?,
                command => match parse_command(command) {
                    Some(event) => print_result(&mut out, &controller.handle_event(event))?,
                    None => writeln!(out, "unknown command :{} (try :help)", command)?,
                },
            }
            continue;
        }

        for ch in line.chars() {
            type_char(&mut out, controller, ch)?;
        }
    }
    Ok(())
}

/// Feed one character as a key press and print the outcome
fn type_char(
    out: &mut impl Write,
    controller: &mut CompositionController,
    ch: char,
) -> io::Result<()> {
    let idle = controller.state().is_idle();
    let result = controller.process_key(&KeyEvent::char(ch), CLIENT);
    if !result.consumed {
        if idle {
            // Nothing composed: the key goes straight to the document
            writeln!(out, "passthrough {:?}", ch)?;
        } else {
            writeln!(out, "dropped {:?}", ch)?;
        }
    }
    print_result(out, &result)
}

/// Map a `:` command to the host event it issues
fn parse_command(command: &str) -> Option<HostEvent> {
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim())),
        None => (command, None),
    };
    let row = || arg.and_then(|a| a.parse::<isize>().ok());

    let event = match name {
        "next" => HostEvent::SelectNext,
        "prev" => HostEvent::SelectPrevious,
        "row" => HostEvent::SelectByRowOffset(row()?),
        "sub-next" => HostEvent::SelectNextSub,
        "sub-prev" => HostEvent::SelectPreviousSub,
        "sub-row" => HostEvent::SelectSubByRowOffset(row()?),
        "page-next" => HostEvent::NextPage,
        "page-prev" => HostEvent::PreviousPage,
        "commit" => HostEvent::Commit,
        "cancel" => HostEvent::Cancel,
        "bs" => HostEvent::Backspace,
        _ => return None,
    };
    Some(event)
}

fn print_result(out: &mut impl Write, result: &ControllerResult) -> io::Result<()> {
    for action in &result.actions {
        match action {
            HostAction::ShowComposed(preedit) => {
                let marker = match preedit.style() {
                    PreeditStyle::Underline => "_",
                    PreeditStyle::Highlight => "*",
                };
                writeln!(
                    out,
                    "  composed {}{}{} (caret {})",
                    marker,
                    preedit.text(),
                    marker,
                    preedit.caret()
                )?
            }
            HostAction::ShowCandidates { items, selected } => {
                writeln!(out, "  candidates:")?;
                for (i, item) in items.iter().enumerate() {
                    let mark = if i == *selected { '>' } else { ' ' };
                    writeln!(out, "   {}{}. {}", mark, i, item)?;
                }
            }
            HostAction::ShowSubCandidates {
                items,
                anchor,
                selected,
            } => {
                let items: Vec<String> = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        if Some(i) == *selected {
                            format!("[{}]", item)
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                writeln!(out, "  sub-candidates @{}: {}", anchor, items.join(" | "))?
            }
            HostAction::HideSubCandidates => {}
            HostAction::HideCandidates => writeln!(out, "  (candidates hidden)")?,
            HostAction::Commit(text) => writeln!(out, "commit: {}", text)?,
            HostAction::Clear => {}
        }
    }
    Ok(())
}
