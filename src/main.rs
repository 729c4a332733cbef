//! Console harness for the pad instrument core.
//!
//! Drives the controller from stdin commands with a text renderer and a
//! logging audio backend, which is enough to exercise every state machine
//! without a graphical host.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use padkit::app::InstrumentController;
use padkit::config::{self, InstrumentConfig};
use padkit::model::{Letter, PadId};
use padkit::traits::{AudioDevice, Clock, InputEvent, Renderer, SystemClock};
use padkit::util::logging::init_logging;

#[derive(Parser)]
#[command(name = "padkit", about = "Keyboard/mouse pad instrument core")]
struct Args {
    /// Configuration file path (defaults to the per-user config location)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(long)]
    verbose: bool,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

/// Renders pad state as console lines.
struct ConsoleRenderer {
    pad_names: Vec<String>,
}

impl ConsoleRenderer {
    fn name(&self, pad: PadId) -> &str {
        self.pad_names
            .get(pad.index())
            .map(String::as_str)
            .unwrap_or("?")
    }
}

impl Renderer for ConsoleRenderer {
    fn show_pad_active(&mut self, pad: PadId) {
        println!("  [{}] ●", self.name(pad));
    }

    fn show_pad_inactive(&mut self, pad: PadId) {
        println!("  [{}] ○", self.name(pad));
    }

    fn set_key_label(&mut self, pad: PadId, letter: Letter) {
        println!("  [{}] key = {}", self.name(pad), letter);
    }

    fn show_conflict_notice(&mut self, letter: Letter, _duration: Duration) {
        println!("  ! key {letter} already used");
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        println!(
            "  sequence controls {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }
}

/// Logs restarts instead of playing samples; a not-yet-loaded sample is
/// simply reported, never an error.
struct ConsoleAudio {
    sample_refs: Vec<PathBuf>,
}

impl AudioDevice for ConsoleAudio {
    fn restart(&mut self, pad: PadId) -> Result<()> {
        match self.sample_refs.get(pad.index()) {
            Some(path) => info!(sample = %path.display(), "restart"),
            None => info!(%pad, "restart (sample not loaded)"),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_dir.as_deref(), args.verbose)?;

    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let config = InstrumentConfig::load_from(&config_path)?;
    info!(pads = config.pads.len(), path = %config_path.display(), "configuration loaded");

    let pad_ids: Vec<String> = config.pads.iter().map(|p| p.id.clone()).collect();
    let renderer = ConsoleRenderer {
        pad_names: config.pads.iter().map(|p| p.name.clone()).collect(),
    };
    let audio = ConsoleAudio {
        sample_refs: config
            .pads
            .iter()
            .map(|p| PathBuf::from(format!("{}{}", config.sound_path, p.file)))
            .collect(),
    };
    let mut controller = InstrumentController::new(&config, renderer, audio)?;
    let clock = SystemClock::new();

    println!("padkit console. Type 'help' for commands.");
    let stdin = std::io::stdin();
    let mut out = std::io::stdout();
    loop {
        print!("> ");
        out.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_help(),
            "pads" => {
                for pad in controller.pads() {
                    let key = controller
                        .bindings()
                        .letter_of(pad.id)
                        .map(|l| l.to_string())
                        .unwrap_or_default();
                    println!("  {} ({}) on {key}", pad.display_name, pad_ids[pad.id.index()]);
                }
            }
            "press" | "release" => match rest.chars().next().and_then(Letter::from_char) {
                Some(letter) => {
                    let code = letter.key_code();
                    let event = if cmd == "press" {
                        InputEvent::KeyDown(code)
                    } else {
                        InputEvent::KeyUp(code)
                    };
                    controller.handle_event(event, clock.now());
                }
                None => println!("  usage: {cmd} <letter>"),
            },
            "enter" => controller.handle_event(InputEvent::KeyDown("Enter".into()), clock.now()),
            "esc" => controller.handle_event(InputEvent::KeyDown("Escape".into()), clock.now()),
            "tap" | "down" | "up" | "leave" | "edit" => match lookup_pad(&pad_ids, rest) {
                Some(pad) => {
                    let now = clock.now();
                    match cmd {
                        "tap" => {
                            controller.handle_event(InputEvent::MouseDown(pad), now);
                            controller.handle_event(InputEvent::MouseUp(pad), now);
                        }
                        "down" => controller.handle_event(InputEvent::MouseDown(pad), now),
                        "up" => controller.handle_event(InputEvent::MouseUp(pad), now),
                        "leave" => controller.handle_event(InputEvent::MouseLeave(pad), now),
                        _ => controller.handle_event(InputEvent::EditRequested(pad), now),
                    }
                }
                None => println!("  unknown pad '{rest}'"),
            },
            "seq" => {
                let text = controller.sanitize_sequence_input(rest);
                controller.handle_event(InputEvent::SequenceSubmitted(text), clock.now());
                // stdin is line-oriented, so drain the run before the next
                // prompt instead of interleaving it with input.
                while controller.is_sequence_running() {
                    std::thread::sleep(Duration::from_millis(10));
                    controller.tick(clock.now());
                }
            }
            _ => println!("  unknown command '{cmd}', try 'help'"),
        }
    }

    Ok(())
}

fn lookup_pad(pad_ids: &[String], id: &str) -> Option<PadId> {
    pad_ids.iter().position(|p| p == id).map(PadId)
}

fn print_help() {
    println!("  press <letter>    key down");
    println!("  release <letter>  key up");
    println!("  tap <pad-id>      mouse press and release a pad");
    println!("  down/up/leave <pad-id>");
    println!("  edit <pad-id>     open rebinding, then press/enter/esc");
    println!("  seq <letters>     play a timed sequence");
    println!("  pads              list pads and bindings");
    println!("  quit");
}
