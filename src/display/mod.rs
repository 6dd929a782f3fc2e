//! Rendering layer - all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state. No game logic is performed; this module only translates
//! state into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use retro_pong::consts::*;
use retro_pong::sim::{Mode, Winner, World};
use retro_pong::Settings;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Yellow;
const C_TEXT: Color = Color::White;
const C_HINT: Color = Color::Grey;
const C_DIM: Color = Color::DarkGrey;
const C_MODE: Color = Color::Cyan;
const C_PAUSE_BG: Color = Color::DarkBlue;
const C_LOSS_BG: Color = Color::DarkRed;
const C_WIN_BG: Color = Color::DarkGreen;

/// Everything the HUD needs beyond the world itself
pub struct Hud<'a> {
    pub settings: &'a Settings,
    pub fps: u32,
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, world: &World, hud: &Hud) -> std::io::Result<()> {
    out.queue(style::ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = terminal::size()?;

    match world.mode {
        Mode::Title => draw_title(out, cols, rows, hud)?,
        Mode::SinglePlayer | Mode::TwoPlayer => draw_playfield(out, world, cols, rows, hud)?,
        Mode::Paused => draw_paused(out, cols, rows, hud)?,
        Mode::GameOver => draw_game_over(out, world, cols, rows, hud)?,
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Coordinate scaling ────────────────────────────────────────────────────────

/// Map a world X coordinate onto a terminal column
fn col_for(x: f32, cols: u16) -> u16 {
    let col = (x / SCREEN_WIDTH * cols as f32) as i32;
    col.clamp(0, cols as i32 - 1) as u16
}

/// Map a world Y coordinate onto a terminal row
fn row_for(y: f32, rows: u16) -> u16 {
    let row = (y / SCREEN_HEIGHT * rows as f32) as i32;
    row.clamp(0, rows as i32 - 1) as u16
}

fn print_centered<W: Write>(
    out: &mut W,
    cols: u16,
    row: u16,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    let col = cols.saturating_sub(text.chars().count() as u16) / 2;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Fill the whole screen with a background colour (no-op in high contrast)
fn fill_background<W: Write>(
    out: &mut W,
    cols: u16,
    rows: u16,
    color: Color,
    hud: &Hud,
) -> std::io::Result<()> {
    if hud.settings.high_contrast {
        return Ok(());
    }
    out.queue(style::SetBackgroundColor(color))?;
    for row in 0..rows {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print(" ".repeat(cols as usize)))?;
    }
    Ok(())
}

// ── Title screen ──────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, cols: u16, rows: u16, hud: &Hud) -> std::io::Result<()> {
    let cy = rows / 2;

    print_centered(out, cols, cy.saturating_sub(6), C_TITLE, "R E T R O   P O N G")?;
    print_centered(
        out,
        cols,
        cy.saturating_sub(4),
        C_HINT,
        "Press '1' for single player, and '2' for two players.",
    )?;

    print_centered(out, cols, cy.saturating_sub(2), C_TEXT, "- PADDLE MOVEMENT -")?;
    print_centered(
        out,
        cols,
        cy.saturating_sub(1),
        C_TEXT,
        "Player 1: Move with 'W' and 'S' keys.",
    )?;
    print_centered(
        out,
        cols,
        cy,
        C_TEXT,
        "Player 2: Move with up and down arrows.",
    )?;

    print_centered(out, cols, cy + 2, C_TEXT, "- WHILE PLAYING -")?;
    print_centered(
        out,
        cols,
        cy + 3,
        C_TEXT,
        "Press 'P' to pause, and 'ESC' to exit.",
    )?;

    let difficulty = format!("Computer difficulty: {}", hud.settings.difficulty.as_str());
    print_centered(out, cols, cy + 5, C_DIM, &difficulty)?;
    Ok(())
}

// ── Playfield ─────────────────────────────────────────────────────────────────

fn draw_playfield<W: Write>(
    out: &mut W,
    world: &World,
    cols: u16,
    rows: u16,
    hud: &Hud,
) -> std::io::Result<()> {
    // Center net, dashed
    out.queue(style::SetForegroundColor(C_DIM))?;
    let net_col = cols / 2;
    for row in (0..rows).step_by(2) {
        out.queue(cursor::MoveTo(net_col, row))?;
        out.queue(Print("|"))?;
    }

    draw_paddle(out, world.left_paddle.y, 0, rows)?;
    draw_paddle(out, world.right_paddle.y, cols.saturating_sub(1), rows)?;

    // Ball, drawn at its center
    let ball_col = col_for(world.ball.pos.x + BALL_SIZE / 2.0, cols);
    let ball_row = row_for(world.ball.pos.y + BALL_SIZE / 2.0, rows);
    out.queue(cursor::MoveTo(ball_col, ball_row))?;
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(Print("●"))?;

    // Scores flank the net
    out.queue(style::SetForegroundColor(C_TEXT))?;
    out.queue(cursor::MoveTo(net_col.saturating_sub(6), 1))?;
    out.queue(Print(format!("{:02}", world.score.left)))?;
    out.queue(cursor::MoveTo(net_col + 4, 1))?;
    out.queue(Print(format!("{:02}", world.score.right)))?;

    // Mode label, bottom left
    let mode_text = match world.mode {
        Mode::SinglePlayer => "MODE: SINGLE PLAYER",
        Mode::TwoPlayer => "MODE: TWO PLAYERS",
        Mode::Title | Mode::Paused | Mode::GameOver => {
            unreachable!("playfield drawn outside of play")
        }
    };
    out.queue(cursor::MoveTo(1, rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_MODE))?;
    out.queue(Print(mode_text))?;

    if hud.settings.show_fps {
        let fps = format!("{} fps", hud.fps);
        out.queue(cursor::MoveTo(
            cols.saturating_sub(fps.chars().count() as u16 + 2),
            0,
        ))?;
        out.queue(style::SetForegroundColor(C_DIM))?;
        out.queue(Print(fps))?;
    }
    Ok(())
}

fn draw_paddle<W: Write>(out: &mut W, y: f32, col: u16, rows: u16) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_TEXT))?;
    let top = row_for(y, rows);
    let bottom = row_for(y + PADDLE_HEIGHT, rows);
    for row in top..=bottom.min(rows.saturating_sub(1)) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("█"))?;
    }
    Ok(())
}

// ── Pause screen ──────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, cols: u16, rows: u16, hud: &Hud) -> std::io::Result<()> {
    fill_background(out, cols, rows, C_PAUSE_BG, hud)?;

    let cy = rows / 2;
    print_centered(out, cols, cy.saturating_sub(2), C_TITLE, "GAME PAUSED")?;
    print_centered(out, cols, cy + 1, C_TEXT, "PRESS 'P' TO RESUME")?;
    print_centered(out, cols, cy + 2, C_TEXT, "PRESS 'ESC' FOR MENU")?;
    Ok(())
}

// ── Game over screen ──────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    world: &World,
    cols: u16,
    rows: u16,
    hud: &Hud,
) -> std::io::Result<()> {
    let winner = world.winner.expect("game over without a winner");

    let bg = if winner == Winner::Computer {
        C_LOSS_BG
    } else {
        C_WIN_BG
    };
    fill_background(out, cols, rows, bg, hud)?;

    let cy = rows / 2;
    print_centered(
        out,
        cols,
        rows / 3,
        C_TITLE,
        &format!("{} WINS!", winner.label()),
    )?;
    print_centered(
        out,
        cols,
        rows / 3 + 1,
        C_TEXT,
        &format!(
            "{:02} - {:02}",
            world.score.left, world.score.right
        ),
    )?;
    print_centered(out, cols, cy + 1, C_TEXT, "PRESS SPACE TO RESTART")?;
    print_centered(out, cols, cy + 2, C_TEXT, "PRESS 'ESC' FOR MENU")?;
    Ok(())
}
