mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bug_crossing::controls::{direction_for_key, is_quit_key, is_restart_key};
use bug_crossing::entities::{GameEvent, LIVES_MAX};
use bug_crossing::game::Game;

#[derive(Parser, Debug, Clone)]
#[command(name = "bug_crossing")]
#[command(about = "Cross the lanes, dodge the bugs, grab the gems", long_about = None)]
struct Args {
    /// RNG seed for a reproducible game (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Frame cap
    #[arg(long, default_value_t = 60)]
    fps: u64,

    /// Maximum lives (1-9)
    #[arg(long, default_value_t = LIVES_MAX)]
    lives: u32,
}

// ── Title screen ──────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size().context("reading terminal size")?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "≈▐██▶  BUG  CROSSING  ◀██▌≈";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Green))?;
    out.queue(Print(title))?;

    let lines: &[(&str, Color)] = &[
        ("Reach the water to finish a level (+100).", Color::White),
        ("Bugs cost a life. The rock can't be walked through.", Color::White),
        ("◆ gems: blue 150, green 200, orange 350.", Color::Cyan),
        ("", Color::White),
        ("ENTER : Start   ← → ↑ ↓ : Move   Q : Quit", Color::DarkGrey),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(
            cx.saturating_sub(text.chars().count() as u16 / 2),
            cy.saturating_sub(3) + i as u16,
        ))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*text))?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent { code, kind: KeyEventKind::Press, .. })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                c if is_quit_key(c) => return Ok(MenuResult::Quit),
                _ => {}
            },
            Ok(_) => {}
            // Input thread is gone; nothing more can arrive.
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn describe(event: &GameEvent) -> String {
    match event {
        GameEvent::LifeLost { lives_left } => format!("Squashed! {} lives left", lives_left),
        GameEvent::GameOver { score } => format!("Game over with {} points", score),
        GameEvent::LevelComplete { level } => format!("Made it across! On to level {}", level),
        GameEvent::GemCollected { points, .. } => format!("Gem +{}", points),
    }
}

/// Runs until the player quits and returns the last score.
///
/// Each key press is forwarded once (arrow keys move one cell per press);
/// `update` is driven with the real time elapsed since the previous frame.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game<StdRng>,
    rx: &mpsc::Receiver<Event>,
    frame: Duration,
) -> Result<u32> {
    let mut message = String::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();
        let mut events = Vec::new();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Press {
                continue;
            }
            if is_quit_key(code)
                || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
            {
                return Ok(game.score());
            }
            if is_restart_key(code) && game.is_over() {
                game.reset();
                message.clear();
                continue;
            }
            if let Some(direction) = direction_for_key(code) {
                events.extend(game.handle_input(direction));
            }
        }

        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();
        events.extend(game.update(dt));

        if let Some(latest) = events.last() {
            message = describe(latest);
        }

        display::render(out, game.state(), &message)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("entering alternate screen")?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, &args);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Ok(Some(score)) = &result {
        println!("Final score: {:07}", score);
    }
    result.map(|_| ())
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, args: &Args) -> Result<Option<u32>> {
    let (width, height) = terminal::size().context("reading terminal size")?;
    if width < display::SCREEN_W || height < display::SCREEN_H {
        anyhow::bail!(
            "terminal is {}x{}, need at least {}x{}",
            width,
            height,
            display::SCREEN_W,
            display::SCREEN_H
        );
    }

    match show_menu(out, rx)? {
        MenuResult::Quit => Ok(None),
        MenuResult::Start => {
            let rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut game = Game::new(args.lives.clamp(1, 9), rng);
            let frame = Duration::from_micros(1_000_000 / args.fps.max(1));
            game_loop(out, &mut game, rx, frame).map(Some)
        }
    }
}
