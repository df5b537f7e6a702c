// Host-embedding engine: newline-delimited commands on stdin, updates
// on stdout. Stderr is reserved for logging so hosts can pipe stdout.
use log::{info, warn};
use sign_core::TranslatorEngine;
use std::io::{self, BufRead, Write};

const MANIFEST_PATH: &str = "assets/manifest.json";
const MAX_INPUT_CHARS: usize = 4000;

// X11 keysyms for the control keys hosts are expected to forward.
const KEYVAL_BACKSPACE: u32 = 65288;
const KEYVAL_ESCAPE: u32 = 65307;

fn main() -> io::Result<()> {
    env_logger::init();
    info!("sign engine starting");

    let engine = TranslatorEngine::from_manifest_or_default(MANIFEST_PATH);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut buffer = String::new();

    for line in stdin.lock().lines() {
        let input = line?;
        let (command, rest) = match input.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest),
            None => (input.as_str(), ""),
        };

        match command {
            "PROCESS_KEY_EVENT" => {
                let keyval: u32 = rest
                    .split_whitespace()
                    .next()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0);
                if apply_key_event(keyval, &mut buffer) {
                    emit_updates(&engine, &buffer, &mut stdout)?;
                }
            }
            "SET_TEXT" => {
                set_text(&mut buffer, rest);
                emit_updates(&engine, &buffer, &mut stdout)?;
            }
            "EXIT" => {
                info!("received EXIT");
                break;
            }
            other => {
                warn!("unknown command {other:?}");
            }
        }
    }

    info!("sign engine shutting down");
    Ok(())
}

/// Replaces the buffer wholesale, truncated to the input bound.
fn set_text(buffer: &mut String, text: &str) {
    buffer.clear();
    buffer.extend(text.chars().take(MAX_INPUT_CHARS));
}

/// Edits the text buffer for one key event. Returns false when the
/// event changed nothing and no update needs to be emitted.
fn apply_key_event(keyval: u32, buffer: &mut String) -> bool {
    match keyval {
        8 | KEYVAL_BACKSPACE => buffer.pop().is_some(),
        KEYVAL_ESCAPE => {
            let had_text = !buffer.is_empty();
            buffer.clear();
            had_text
        }
        _ => match char::from_u32(keyval) {
            Some(c) if !c.is_control() => {
                if buffer.chars().count() < MAX_INPUT_CHARS {
                    buffer.push(c);
                    true
                } else {
                    false
                }
            }
            _ => false,
        },
    }
}

fn emit_updates(
    engine: &TranslatorEngine,
    buffer: &str,
    stdout: &mut io::Stdout,
) -> io::Result<()> {
    let sheet = serde_json::to_string(&engine.render(buffer)).unwrap_or_else(|_| "{\"words\":[]}".to_string());
    writeln!(stdout, "UPDATE_TRANSLATION {sheet}")?;

    let active = serde_json::to_string(&engine.active_sign(buffer)).unwrap_or_else(|_| "null".to_string());
    writeln!(stdout, "UPDATE_ACTIVE {active}")?;

    stdout.flush()
}
