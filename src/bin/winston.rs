// Terminal front end for a Winston draft.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so the board on stdout stays clean)
// 2. Layer configuration: defaults < --config file < flags
// 3. Load the cube CSV and start the draft
// 4. Loop: clear and draw the board, read one key press in raw mode
// 5. Print the fully revealed summary

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::style::{self, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use serde::Deserialize;
use tracing::info;

use winston_draft::{
    load_cube_csv, Card, CardView, Color, ColorCategory, DraftAction, DraftConfig, DraftEngine,
    DraftRng, DraftSnapshot, PlayerId,
};

/// Winston draft against a weighted-random opponent
#[derive(Parser, Debug)]
#[command(name = "winston")]
#[command(about = "Two-player Winston draft from a CubeCobra CSV export", long_about = None)]
#[command(version)]
struct Cli {
    /// CubeCobra CSV export to draft from
    cube: PathBuf,

    /// TOML file with draft settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of cards dealt into the deck
    #[arg(short = 'n', long)]
    draft_size: Option<usize>,

    /// Random seed (a random one is chosen and logged if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Two human players sharing the terminal
    #[arg(long, conflicts_with = "ai_vs_ai")]
    no_ai: bool,

    /// Both seats automated
    #[arg(long)]
    ai_vs_ai: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

/// Settings accepted from a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    draft_size: Option<usize>,
    seed: Option<u64>,
    opponent_ai: Option<bool>,
    ai_vs_ai: Option<bool>,
}

impl FileConfig {
    fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let config = build_config(&cli)?;
    info!(
        draft_size = config.draft_size,
        seed = config.seed,
        "configuration resolved"
    );

    let cards = load_cube_csv(&cli.cube)
        .with_context(|| format!("failed to load cube {}", cli.cube.display()))?;
    info!("Loaded {} cards from {}", cards.len(), cli.cube.display());

    let mut engine = DraftEngine::new(config);
    engine.set_card_pool(cards).context("failed to load card pool")?;
    engine.start_draft().context("failed to start draft")?;

    let mut out = io::stdout().lock();

    while !engine.is_complete() {
        let player = engine.current_player();
        clear_screen(&mut out)?;
        writeln!(out, "Seed: {}", engine.config().seed)?;
        render_board(&mut out, &engine.snapshot(player))?;
        writeln!(out)?;
        writeln!(out, "{}", format!("Current player: {player}").bold())?;
        writeln!(out, "Press [Space] to skip, [Enter] to take, [q] to quit...")?;
        out.flush()?;

        match read_command()? {
            Command::Act(action) => engine.apply_action(action).context("action rejected")?,
            Command::Quit => return Ok(()),
        }
    }

    let summary = engine
        .revealed_snapshot(PlayerId::FIRST)
        .context("draft summary unavailable")?;
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &summary).context("failed to write summary")?;
        writeln!(out)?;
    } else {
        clear_screen(&mut out)?;
        writeln!(out, "Seed: {}", engine.config().seed)?;
        render_board(&mut out, &summary)?;
    }

    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<DraftConfig> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let mut config = DraftConfig::default();
    if let Some(size) = cli.draft_size.or(file.draft_size) {
        config = config.with_draft_size(size);
    }
    if config.draft_size == 0 {
        bail!("draft size must be positive");
    }

    let seed = match cli.seed.or(file.seed) {
        Some(seed) => seed,
        None => {
            let seed = DraftRng::from_entropy().seed();
            info!(seed, "no seed configured, using a random one");
            seed
        }
    };
    config = config.with_seed(seed);

    let ai_vs_ai = cli.ai_vs_ai || file.ai_vs_ai.unwrap_or(false);
    let opponent_ai = !cli.no_ai && file.opponent_ai.unwrap_or(true);
    config = if ai_vs_ai {
        config
            .with_automated(PlayerId::FIRST, true)
            .with_automated(PlayerId::SECOND, true)
    } else {
        config.with_automated_opponent(opponent_ai)
    };

    Ok(config)
}

/// What a key press asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Act(DraftAction),
    Quit,
}

/// Map a key event to a command. Release events and unbound keys map to
/// nothing.
fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(' ') => Some(Command::Act(DraftAction::Skip)),
        KeyCode::Enter => Some(Command::Act(DraftAction::TakePile)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Raw mode for the lifetime of the guard.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// Block until a bound key is pressed.
fn read_command() -> anyhow::Result<Command> {
    let _raw = RawMode::enable().context("failed to enable raw mode")?;
    loop {
        if let Event::Key(key) = event::read().context("failed to read key event")? {
            if let Some(command) = command_for_key(key) {
                return Ok(command);
            }
        }
    }
}

fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// Display color for a color category.
fn card_color(category: ColorCategory) -> style::Color {
    let (r, g, b) = match category {
        ColorCategory::Mono(Color::White) => (248, 231, 185),
        ColorCategory::Mono(Color::Blue) => (14, 104, 171),
        ColorCategory::Mono(Color::Black) => (166, 159, 157),
        ColorCategory::Mono(Color::Red) => (211, 32, 42),
        ColorCategory::Mono(Color::Green) => (0, 115, 62),
        ColorCategory::Multicolor => (255, 215, 0),
        ColorCategory::Colorless => (189, 183, 107),
    };
    style::Color::Rgb { r, g, b }
}

fn render_board(out: &mut impl Write, snapshot: &DraftSnapshot<'_>) -> io::Result<()> {
    writeln!(
        out,
        "Cards in cube: {}  Deck/used: {}/{}  Unused: {}",
        snapshot.pool_size, snapshot.deck_size, snapshot.cards_used, snapshot.unused_count
    )?;

    for (ix, pile) in snapshot.piles.iter().enumerate() {
        let heading = format!("Pile {} ({} cards)", ix + 1, pile.len());
        if !snapshot.is_complete() && ix == snapshot.current_pile.index() {
            writeln!(out, "{}", heading.bold())?;
        } else {
            writeln!(out, "{heading}")?;
        }
        render_cards(out, pile)?;
    }

    let hand_sizes = snapshot.hand_sizes();
    for player in PlayerId::all() {
        let heading = format!("{player} ({} cards)", hand_sizes[player]);
        if !snapshot.is_complete() && player == snapshot.current_player {
            writeln!(out, "{}", heading.bold())?;
        } else {
            writeln!(out, "{heading}")?;
        }
        render_cards(out, &snapshot.hands[player])?;
    }

    if snapshot.revealed {
        writeln!(out, "Unused ({} cards)", snapshot.unused.len())?;
        for card in &snapshot.unused {
            render_card(out, card)?;
        }
    }

    Ok(())
}

fn render_cards(out: &mut impl Write, cards: &[CardView<'_>]) -> io::Result<()> {
    for view in cards {
        match view.card() {
            Some(card) => render_card(out, card)?,
            None => writeln!(out, "  **hidden**")?,
        }
    }
    Ok(())
}

fn render_card(out: &mut impl Write, card: &Card) -> io::Result<()> {
    let label = format!("[{}] {}", card.color, card.name);
    writeln!(
        out,
        "  {} ({}) - {}",
        label.with(card_color(card.color)),
        card.mana_value,
        card.type_line
    )
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("winston_draft=warn,winston=warn")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(snapshot: &DraftSnapshot<'_>) -> String {
        let mut buf = Vec::new();
        render_board(&mut buf, snapshot).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn engine(draft_size: usize) -> DraftEngine {
        let cards = (0..12)
            .map(|i| Card::new(format!("Card {i}"), 2, "Instant", ["U", "RG", ""][i % 3]))
            .collect();
        let config = DraftConfig::default()
            .with_draft_size(draft_size)
            .with_seed(4)
            .human_only();
        let mut engine = DraftEngine::new(config);
        engine.set_card_pool(cards).unwrap();
        engine.start_draft().unwrap();
        engine
    }

    #[test]
    fn test_key_bindings() {
        let press = |code| command_for_key(KeyEvent::new(code, KeyModifiers::NONE));

        assert_eq!(press(KeyCode::Char(' ')), Some(Command::Act(DraftAction::Skip)));
        assert_eq!(press(KeyCode::Enter), Some(Command::Act(DraftAction::TakePile)));
        assert_eq!(press(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(press(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(command_for_key(release), None);
    }

    #[test]
    fn test_each_category_has_its_own_color() {
        let categories = [
            ColorCategory::Mono(Color::White),
            ColorCategory::Mono(Color::Blue),
            ColorCategory::Mono(Color::Black),
            ColorCategory::Mono(Color::Red),
            ColorCategory::Mono(Color::Green),
            ColorCategory::Multicolor,
            ColorCategory::Colorless,
        ];
        let colors: Vec<_> = categories.iter().map(|&c| card_color(c)).collect();

        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(
            card_color(ColorCategory::Mono(Color::Red)),
            style::Color::Rgb { r: 211, g: 32, b: 42 }
        );
    }

    #[test]
    fn test_board_masks_unseen_cards() {
        let engine = engine(9);
        let board = rendered(&engine.snapshot(PlayerId::FIRST));

        let first = engine.card(engine.pile(winston_draft::PileIndex::FIRST)[0]).unwrap();
        assert!(board.contains(&first.name));
        assert_eq!(board.matches("**hidden**").count(), 2);
        assert!(board.contains("Player 1 (0 cards)"));
        assert!(!board.contains("Unused ("));
    }

    #[test]
    fn test_summary_lists_unused() {
        let mut engine = engine(3);
        while !engine.is_complete() {
            if engine.pile(engine.current_pile()).is_empty()
                && engine.current_pile() != winston_draft::PileIndex::LAST
            {
                engine.skip().unwrap();
            } else {
                engine.take_pile().unwrap();
            }
        }

        let summary = engine.revealed_snapshot(PlayerId::FIRST).unwrap();
        let board = rendered(&summary);
        assert!(board.contains("Unused (9 cards)"));
        assert!(!board.contains("**hidden**"));
    }

    #[test]
    fn test_clear_screen_writes_escape_sequence() {
        let mut buf = Vec::new();
        clear_screen(&mut buf).unwrap();
        assert!(buf.starts_with(b"\x1b["));
    }
}
