//! Retro Pong entry point
//!
//! Owns the terminal, the input thread and the frame loop; the simulation
//! itself lives in the library and never blocks.

mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use retro_pong::consts::MAX_DT;
use retro_pong::sim::{tick, FrameInput, TickFlow, World};
use retro_pong::Settings;

/// Frame duration for the 60 Hz limiter
const FRAME: Duration = Duration::from_micros(16_667);

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is >= 15 Hz, so the window is always refreshed
/// before expiry while the key is physically down.
const HOLD_WINDOW: u64 = 4;

// ── Input tracking ────────────────────────────────────────────────────────────

/// Maps key events onto the per-frame input snapshot the simulation wants.
///
/// Movement and select keys are level-sensitive and read straight from the
/// held-key map. Pause and escape must be single-shot per physical press, so
/// they go through a held-state edge detector: the snapshot reports them
/// only on the frame the key transitions to held.
struct InputTracker {
    /// Each held key, mapped to the frame it was last seen (press or repeat)
    key_frame: HashMap<KeyCode, u64>,
    quit: bool,
    pause_was_held: bool,
    escape_was_held: bool,
}

impl InputTracker {
    fn new() -> Self {
        Self {
            key_frame: HashMap::new(),
            quit: false,
            pause_was_held: false,
            escape_was_held: false,
        }
    }

    /// Fold one terminal event into the tracker
    fn record(&mut self, event: Event, frame: u64) {
        if let Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) = event
        {
            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        self.quit = true;
                    }
                    self.key_frame.insert(code, frame);
                }
                // Keyboard-enhancement terminals tell us about releases
                KeyEventKind::Release => {
                    self.key_frame.remove(&code);
                }
            }
        }
    }

    fn held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    fn held_any(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|&k| self.held(k, frame))
    }

    /// Build this frame's input snapshot
    fn snapshot(&mut self, frame: u64) -> FrameInput {
        let pause_held = self.held_any(&[KeyCode::Char('p'), KeyCode::Char('P')], frame);
        let escape_held = self.held(KeyCode::Esc, frame);

        let input = FrameInput {
            quit: self.quit,
            pause: pause_held && !self.pause_was_held,
            escape: escape_held && !self.escape_was_held,
            restart: self.held(KeyCode::Char(' '), frame),
            select_single: self.held(KeyCode::Char('1'), frame),
            select_versus: self.held(KeyCode::Char('2'), frame),
            p1_up: self.held_any(&[KeyCode::Char('w'), KeyCode::Char('W')], frame),
            p1_down: self.held_any(&[KeyCode::Char('s'), KeyCode::Char('S')], frame),
            p2_up: self.held(KeyCode::Up, frame),
            p2_down: self.held(KeyCode::Down, frame),
        };

        self.pause_was_held = pause_held;
        self.escape_was_held = escape_held;
        input
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn game_loop<W: Write>(
    out: &mut W,
    world: &mut World,
    settings: &Settings,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut tracker = InputTracker::new();
    let mut frame: u64 = 0;
    let mut last_tick = Instant::now();

    // FPS over a one second window
    let mut fps = 0u32;
    let mut fps_frames = 0u32;
    let mut fps_since = Instant::now();

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // Drain all pending input events (non-blocking)
        while let Ok(event) = rx.try_recv() {
            tracker.record(event, frame);
        }
        let input = tracker.snapshot(frame);

        let dt = last_tick.elapsed().as_secs_f32().min(MAX_DT);
        last_tick = Instant::now();

        match tick(world, &input, dt) {
            TickFlow::Exit => return Ok(()),
            TickFlow::Continue => {}
        }

        fps_frames += 1;
        if fps_since.elapsed() >= Duration::from_secs(1) {
            fps = fps_frames;
            fps_frames = 0;
            fps_since = Instant::now();
        }

        display::render(out, world, &display::Hud { settings, fps })?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

/// RNG seed: overridable for reproducible sessions, otherwise wall clock
fn pick_seed() -> u64 {
    if let Ok(seed) = std::env::var("RETRO_PONG_SEED") {
        if let Ok(seed) = seed.parse() {
            log::info!("using seed override {seed}");
            return seed;
        }
        log::warn!("ignoring unparseable RETRO_PONG_SEED");
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let settings = Settings::load();
    let seed = pick_seed();
    let mut world = World::new(seed);
    world.ai = settings.difficulty.profile();
    log::info!(
        "retro-pong starting (seed {seed}, difficulty {})",
        settings.difficulty.as_str()
    );

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release and key-repeat events where the terminal supports
    // them; others fall back to the hold-window heuristic.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the frame loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(event) => {
                if tx.send(event).is_err() {
                    break; // receiver dropped, program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = game_loop(&mut out, &mut world, &settings, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    settings.save();
    log::info!("goodbye");
    result
}
