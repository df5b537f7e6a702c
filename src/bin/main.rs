use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use sign_core::core::types::{SignCard, SignSymbol};
use sign_core::TranslatorEngine;
use std::io::{self, Write};

const MANIFEST_PATH: &str = "assets/manifest.json";
const MAX_INPUT_CHARS: usize = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Home,
    Translator,
}

struct App {
    screen: Screen,
    input: String,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let engine = TranslatorEngine::from_manifest_or_default(MANIFEST_PATH);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &engine);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(w: &mut impl Write, engine: &TranslatorEngine) -> io::Result<()> {
    let mut app = App {
        screen: Screen::Home,
        input: String::new(),
    };

    loop {
        match app.screen {
            Screen::Home => draw_home(w, engine)?,
            Screen::Translator => draw_translator(w, engine, &app.input)?,
        }

        let ev = event::read()?;
        let key = match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            // Resize and everything else just triggers a redraw.
            _ => continue,
        };

        match app.screen {
            Screen::Home => match key.code {
                KeyCode::Enter => app.screen = Screen::Translator,
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            Screen::Translator => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.input.clear();
                }
                KeyCode::Esc => {
                    // Leaving the translator drops its state, like the
                    // original screen swap does.
                    app.input.clear();
                    app.screen = Screen::Home;
                }
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if app.input.chars().count() < MAX_INPUT_CHARS {
                        app.input.push(c);
                    }
                }
                _ => {}
            },
        }
    }
    Ok(())
}

fn draw_home(w: &mut impl Write, engine: &TranslatorEngine) -> io::Result<()> {
    queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;

    queue!(w, Print("\r\n\r\n"))?;
    match engine.app_icon() {
        Some(icon) => queue!(
            w,
            SetForegroundColor(Color::Blue),
            Print(format!("      [{icon}]\r\n\r\n")),
            ResetColor
        )?,
        // No bundled icon: draw the waving-hand glyph instead.
        None => queue!(
            w,
            SetForegroundColor(Color::Blue),
            Print("      (\\~/)\r\n\r\n"),
            ResetColor
        )?,
    }

    queue!(
        w,
        SetForegroundColor(Color::Blue),
        SetAttribute(Attribute::Bold),
        Print("      Gesturio\r\n"),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("      Real-time ASL translation at your fingertips.\r\n\r\n"),
        SetForegroundColor(Color::DarkGrey),
        Print("      [Enter] let's start    [q] quit\r\n"),
        ResetColor
    )?;
    w.flush()
}

fn draw_translator(w: &mut impl Write, engine: &TranslatorEngine, input: &str) -> io::Result<()> {
    queue!(w, Clear(ClearType::All), MoveTo(0, 0))?;

    queue!(
        w,
        SetForegroundColor(Color::Blue),
        SetAttribute(Attribute::Bold),
        Print("  Gesturio\r\n"),
        SetAttribute(Attribute::Reset),
        Print("  Real-time ASL Fingerspelling\r\n"),
        ResetColor,
        Print(format!("  > {input}_\r\n")),
        SetForegroundColor(Color::DarkGrey),
        Print("  [Esc] home   [Ctrl+U] clear   [Ctrl+C] quit\r\n\r\n"),
        ResetColor
    )?;

    if input.is_empty() {
        return draw_empty_state(w);
    }

    if let Some(card) = engine.active_sign(input) {
        draw_hero(w, &card)?;
    }

    let sheet = engine.render(input);
    for (index, cards) in sheet.words.iter().enumerate() {
        queue!(
            w,
            SetForegroundColor(Color::Blue),
            Print(format!("  Word {}\r\n", index + 1)),
            ResetColor,
            Print("   ")
        )?;
        for card in cards {
            draw_card_cell(w, card)?;
        }
        queue!(w, Print("\r\n\r\n"))?;
    }

    w.flush()
}

fn draw_empty_state(w: &mut impl Write) -> io::Result<()> {
    queue!(
        w,
        SetForegroundColor(Color::Blue),
        Print("\r\n      Bridge the Gap\r\n"),
        ResetColor,
        SetForegroundColor(Color::DarkGrey),
        Print("      Enter text to convert it into visual ASL signs instantly.\r\n"),
        ResetColor
    )?;
    w.flush()
}

fn draw_hero(w: &mut impl Write, card: &SignCard) -> io::Result<()> {
    let detail = match &card.symbol {
        SignSymbol::Image { asset } => asset.clone(),
        SignSymbol::Placeholder { .. } => "no sign image".to_string(),
    };
    queue!(
        w,
        SetForegroundColor(Color::DarkGrey),
        Print("  Current Sign\r\n"),
        ResetColor,
        Print("   ┌───┐\r\n"),
        Print(format!("   │ {} │  {detail}\r\n", card.label())),
        Print("   └───┘\r\n\r\n")
    )
}

fn draw_card_cell(w: &mut impl Write, card: &SignCard) -> io::Result<()> {
    match &card.symbol {
        SignSymbol::Image { .. } => queue!(
            w,
            SetForegroundColor(Color::Cyan),
            Print(format!("[{}]", card.label())),
            ResetColor
        ),
        SignSymbol::Placeholder { .. } => queue!(
            w,
            SetForegroundColor(Color::Yellow),
            Print(format!("[{}?]", card.label())),
            ResetColor
        ),
    }
}
