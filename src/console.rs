//! Console front end
//!
//! Stands in for the button bar: one command per input line, plots written
//! as JSON lines to the plot sink, messages and prompts to a separate
//! writer. `shift` reads the carrier frequency from the following line.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::adapters::LinePrompt;
use crate::commands::{config, pipeline, status};
use crate::pipeline::Stage;
use crate::ports::PlotSink;
use crate::state::AppState;

const HELP: &str = "\
commands:
  generate          generate the 1 Hz cosine
  noise             add Gaussian noise
  spectrum          show the noisy signal's spectrum
  shift             shift onto a carrier (frequency on the next line, empty cancels)
  demod             show the coherently demodulated spectrum
  lpf               low-pass and show the reconstruction
  status            print session status as JSON
  configs           list saved profiles
  save [name]       save the active profile, optionally under a new name
  load <name>       load and apply a saved profile
  delete <name>     delete a saved profile
  help              show this text
  quit              leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Press(Stage),
    Status,
    ListConfigs,
    Save(Option<String>),
    Load(String),
    Delete(String),
    Help,
    Quit,
}

impl ConsoleCommand {
    /// Parse a line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let word = word.to_ascii_lowercase();

        if let Some(stage) = Stage::ALL.iter().find(|s| s.label() == word) {
            return Ok(Some(ConsoleCommand::Press(*stage)));
        }

        let cmd = match word.as_str() {
            "status" => ConsoleCommand::Status,
            "configs" => ConsoleCommand::ListConfigs,
            "save" if rest.is_empty() => ConsoleCommand::Save(None),
            "save" => ConsoleCommand::Save(Some(rest.to_string())),
            "load" if !rest.is_empty() => ConsoleCommand::Load(rest.to_string()),
            "delete" if !rest.is_empty() => ConsoleCommand::Delete(rest.to_string()),
            "load" | "delete" => return Err(format!("'{word}' needs a profile name")),
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            _ => return Err(format!("unknown command '{word}' (try 'help')")),
        };
        Ok(Some(cmd))
    }
}

/// Run commands from `input` until `quit` or end of input
pub fn run_console<R: BufRead, W: Write>(
    state: &AppState,
    input: R,
    messages: W,
    plot: &mut dyn PlotSink,
    config_dir: &Path,
) -> Result<(), String> {
    let mut prompt = LinePrompt::new(input, messages);

    while let Some(line) = prompt.read_line() {
        let cmd = match ConsoleCommand::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                say(&mut prompt, &e);
                continue;
            }
        };

        let outcome = match cmd {
            ConsoleCommand::Quit => break,
            ConsoleCommand::Help => Ok(HELP.to_string()),
            ConsoleCommand::Press(stage) => {
                pipeline::press(state, stage, &mut prompt, plot).map(|drawn| {
                    if drawn {
                        String::new()
                    } else {
                        format!("{}: nothing to do", stage.label())
                    }
                })
            }
            ConsoleCommand::Status => status::get_session_status(state).and_then(|s| {
                serde_json::to_string_pretty(&s).map_err(|e| format!("Serialization error: {e}"))
            }),
            ConsoleCommand::ListConfigs => {
                config::list_configurations(config_dir).map(|names| names.join("\n"))
            }
            ConsoleCommand::Save(name) => save_active(state, config_dir, name),
            ConsoleCommand::Load(name) => config::load_configuration(config_dir, &name)
                .and_then(|c| config::apply_configuration(state, c))
                .map(|()| format!("loaded '{name}'")),
            ConsoleCommand::Delete(name) => {
                config::delete_configuration(config_dir, &name).map(|()| format!("deleted '{name}'"))
            }
        };

        match outcome {
            Ok(text) if text.is_empty() => {}
            Ok(text) => say(&mut prompt, &text),
            Err(e) => {
                log::warn!("{e}");
                say(&mut prompt, &format!("error: {e}"));
            }
        }
    }

    Ok(())
}

fn save_active(state: &AppState, config_dir: &Path, name: Option<String>) -> Result<String, String> {
    let mut active = state
        .config
        .lock()
        .map_err(|_| "Configuration state corrupted".to_string())?
        .clone();
    if let Some(name) = name {
        active.name = name;
    }
    config::save_configuration(config_dir, &active)?;
    Ok(format!("saved '{}'", active.name))
}

fn say<R: BufRead, W: Write>(prompt: &mut LinePrompt<R, W>, text: &str) {
    if let Err(e) = writeln!(prompt.output_mut(), "{text}") {
        log::debug!("failed to write console message: {e}");
    }
}
