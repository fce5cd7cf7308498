/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; entity pixel positions from the
/// core are scaled onto a fixed character grid.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use bug_crossing::entities::{Enemy, GameState, GameStatus, Gem, GemKind, ScoreLabel};
use bug_crossing::geometry::{GridPosition, NUM_COLS, NUM_ROWS, SECTION_HEIGHT, SECTION_WIDTH};
use bug_crossing::rules::label_opacity;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Characters per grid cell.
const CELL_W: i32 = 12;
const CELL_H: i32 = 3;

const FIELD_LEFT: i32 = 1;
const FIELD_TOP: i32 = 3;
const FIELD_W: i32 = CELL_W * NUM_COLS;
const FIELD_H: i32 = CELL_H * NUM_ROWS;

/// Total terminal area the game needs, border and HUD included.
pub const SCREEN_W: u16 = (FIELD_W + 2) as u16;
pub const SCREEN_H: u16 = (FIELD_TOP + FIELD_H + 2) as u16;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_MESSAGE: Color = Color::White;
const C_WATER: Color = Color::DarkBlue;
const C_STONE: Color = Color::DarkGrey;
const C_GRASS: Color = Color::DarkGreen;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_ROCK: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.  `message` is the latest event text.
pub fn render<W: Write>(out: &mut W, state: &GameState, message: &str) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out)?;
    draw_lanes(out)?;
    draw_hud(out, state, message)?;

    if state.rock.visible {
        draw_rock(out, state.rock.pos)?;
    }
    for gem in &state.gems {
        draw_gem(out, gem)?;
    }
    draw_player(out, state)?;
    for enemy in &state.enemies {
        draw_enemy(out, enemy)?;
    }
    if let Some(label) = &state.label {
        draw_label(out, label)?;
    }

    draw_controls_hint(out)?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, SCREEN_H.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Terminal column for a pixel x.
fn term_x(x: f32) -> i32 {
    FIELD_LEFT + (x / SECTION_WIDTH * CELL_W as f32).round() as i32
}

/// Terminal row for a pixel y, on the middle line of its cell.
fn term_y(y: f32) -> i32 {
    FIELD_TOP + ((y / SECTION_HEIGHT + 0.5) * CELL_H as f32).round() as i32 + CELL_H / 2
}

/// Print `text` starting at `(x, y)`, dropping characters outside the field.
fn print_clipped<W: Write>(out: &mut W, x: i32, y: i32, text: &str) -> std::io::Result<()> {
    if y < FIELD_TOP || y >= FIELD_TOP + FIELD_H {
        return Ok(());
    }
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as i32;
        if cx >= FIELD_LEFT && cx < FIELD_LEFT + FIELD_W {
            out.queue(cursor::MoveTo(cx as u16, y as u16))?;
            out.queue(Print(ch))?;
        }
    }
    Ok(())
}

fn lane_colour(row: i32) -> Color {
    match row {
        0 => C_WATER,
        1..=3 => C_STONE,
        _ => C_GRASS,
    }
}

/// Left edge of a cell's sprite, centred for a sprite `width` chars wide.
fn cell_sprite_x(pos: GridPosition, width: i32) -> i32 {
    term_x(pos.pixel_x()) + (CELL_W - width) / 2
}

// ── Border & lanes ────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W) -> std::io::Result<()> {
    let w = FIELD_W as usize;
    let top = (FIELD_TOP - 1) as u16;
    let bottom = (FIELD_TOP + FIELD_H) as u16;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in (top + 1)..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo((FIELD_LEFT + FIELD_W) as u16, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_lanes<W: Write>(out: &mut W) -> std::io::Result<()> {
    let blank = " ".repeat(FIELD_W as usize);
    for row in 0..NUM_ROWS {
        out.queue(style::SetBackgroundColor(lane_colour(row)))?;
        for line in 0..CELL_H {
            out.queue(cursor::MoveTo(
                FIELD_LEFT as u16,
                (FIELD_TOP + row * CELL_H + line) as u16,
            ))?;
            out.queue(Print(&blank))?;
        }
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

// ── HUD (rows 0–1) ────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, message: &str) -> std::io::Result<()> {
    // Lives — left
    let p = &state.player;
    let hearts: String = (0..p.lives_max)
        .map(|i| if i < p.lives { '♥' } else { '♡' })
        .collect();
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(format!("Life: {}", hearts)))?;

    // Level — centre
    let level_str = format!("[ LEVEL {} ]", state.level);
    let lx = (SCREEN_W / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Score — right, zero-padded to seven digits
    let score_str = format!("Points: {:07}", state.score);
    let rx = SCREEN_W.saturating_sub(score_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_str))?;

    if !message.is_empty() {
        out.queue(cursor::MoveTo(1, 1))?;
        out.queue(style::SetForegroundColor(C_MESSAGE))?;
        out.queue(Print(message))?;
    }

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let sprite = "(◕‿◕)";
    let pos = state.player.pos;
    out.queue(style::SetBackgroundColor(lane_colour(pos.row)))?;
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    print_clipped(
        out,
        cell_sprite_x(pos, sprite.chars().count() as i32),
        term_y(state.player.y()),
        sprite,
    )?;
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Bugs are drawn from their x across one cell width, so they slide in
/// from the left border and out past the right one.
fn draw_enemy<W: Write>(out: &mut W, enemy: &Enemy) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(lane_colour(enemy.row)))?;
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    print_clipped(out, term_x(enemy.x) + 3, term_y(enemy.y()), "≈▐██▶")?;
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_rock<W: Write>(out: &mut W, pos: GridPosition) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(lane_colour(pos.row)))?;
    out.queue(style::SetForegroundColor(C_ROCK))?;
    print_clipped(out, cell_sprite_x(pos, 4), term_y(pos.pixel_y()), "▟██▙")?;
    out.queue(style::ResetColor)?;
    Ok(())
}

fn gem_colour(kind: GemKind) -> Color {
    match kind {
        GemKind::Blue => Color::Blue,
        GemKind::Green => Color::Green,
        GemKind::Orange => Color::DarkYellow,
    }
}

fn draw_gem<W: Write>(out: &mut W, gem: &Gem) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(lane_colour(gem.pos.row)))?;
    out.queue(style::SetForegroundColor(gem_colour(gem.kind)))?;
    print_clipped(out, cell_sprite_x(gem.pos, 1), term_y(gem.pos.pixel_y()) - 1, "◆")?;
    out.queue(style::ResetColor)?;
    Ok(())
}

/// Full brightness for the first half of its rise, dim afterwards.
fn draw_label<W: Write>(out: &mut W, label: &ScoreLabel) -> std::io::Result<()> {
    let colour = if label_opacity(label) > 0.5 {
        Color::White
    } else {
        Color::DarkGrey
    };
    let text = format!("+{}", label.points);
    let x = term_x(label.x) + (CELL_W - text.len() as i32) / 2;
    out.queue(style::SetForegroundColor(colour))?;
    print_clipped(out, x, term_y(label.y) - 1, &text)?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, SCREEN_H.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → ↑ ↓ : Move   R : Restart   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Your score: {}", state.score);
    let level_line = format!("Reached level {}", state.level);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = SCREEN_W / 2;
    let total_rows = lines.len() + 3; // 3 box lines + score + level + hint
    let start_row = (SCREEN_H / 2).saturating_sub(total_rows as u16 / 2);

    out.queue(style::SetBackgroundColor(Color::Black))?;
    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let trailer: [(&str, Color); 3] = [
        (score_line.as_str(), Color::Yellow),
        (level_line.as_str(), Color::Cyan),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    for (i, (msg, color)) in trailer.iter().enumerate() {
        let row = start_row + (lines.len() + i) as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    out.queue(style::ResetColor)?;

    Ok(())
}
