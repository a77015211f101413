//! Terminal runner (default binary).
//!
//! Owns the timing loop: each pass it reports the elapsed milliseconds to the
//! engine, forwards key presses as intents and redraws.
//!
//! ```text
//! quadfall [--config <path>] [--seed <n>] [--uniform] [--level <n>]
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event};

use quadfall::core::{Engine, GameConfig, LockEvent, Randomizer};
use quadfall::input::{map_key, KeyCommand};
use quadfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use quadfall::types::TICK_MS;

const USAGE: &str = "usage: quadfall [--config <path>] [--seed <n>] [--uniform] [--level <n>]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Options {
    config: Option<PathBuf>,
    seed: Option<u64>,
    uniform: bool,
    level: Option<u32>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut options = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = args.next().context("--seed needs a number")?;
                options.seed = Some(value.parse().with_context(|| format!("invalid seed {value:?}"))?);
            }
            "--level" => {
                let value = args.next().context("--level needs a number")?;
                options.level = Some(value.parse().with_context(|| format!("invalid level {value:?}"))?);
            }
            "--uniform" => options.uniform = true,
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }
    Ok(options)
}

fn load_config(options: &Options) -> Result<GameConfig> {
    let mut config = match &options.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };
    if let Some(seed) = options.seed {
        config.seed = Some(seed);
    }
    if options.uniform {
        config.randomizer = Randomizer::Uniform;
    }
    if let Some(level) = options.level {
        config.start_level = level;
    }
    Ok(config)
}

fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        println!("{USAGE}");
        return Ok(());
    }
    let options = parse_args(std::env::args().skip(1))?;
    let config = load_config(&options)?;
    let engine = Engine::new(config).context("invalid game configuration")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Whole milliseconds from `*last` to `now`
///
/// `*last` moves forward by exactly the returned amount, so the sub-millisecond
/// remainder is carried into the next tick instead of being dropped.
fn take_elapsed_ms(last: &mut Instant, now: Instant) -> u32 {
    let ms = now
        .saturating_duration_since(*last)
        .as_millis()
        .min(u32::MAX as u128) as u32;
    *last += Duration::from_millis(ms as u64);
    ms
}

fn run(term: &mut TerminalRenderer, mut engine: Engine) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut last_clear: Option<LockEvent> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.snapshot(), last_clear.as_ref(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match map_key(key) {
                    Some(KeyCommand::Quit) => return Ok(()),
                    Some(KeyCommand::Restart) => {
                        engine.reset();
                        last_clear = None;
                    }
                    Some(KeyCommand::Intent(intent)) => {
                        engine.submit_intent(intent);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now.saturating_duration_since(last_tick) >= tick {
            engine.advance_time(take_elapsed_ms(&mut last_tick, now));
        }

        if let Some(event) = engine.take_last_event() {
            if event.lines_cleared() > 0 {
                last_clear = Some(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_overrides() {
        let options = parse_args(args(&["--seed", "7", "--uniform", "--level", "3"])).unwrap();
        assert_eq!(options.seed, Some(7));
        assert!(options.uniform);
        assert_eq!(options.level, Some(3));

        let config = load_config(&options).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.randomizer, Randomizer::Uniform);
        assert_eq!(config.start_level, 3);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(args(&["--seed"])).is_err());
        assert!(parse_args(args(&["--seed", "many"])).is_err());
        assert!(parse_args(args(&["--hold"])).is_err());
        assert_eq!(parse_args(args(&[])).unwrap(), Options::default());
    }

    #[test]
    fn test_elapsed_ms_carries_fractions() {
        let start = Instant::now();
        let mut last = start;
        let mut total = 0;
        for tick in 1..=300u64 {
            total += take_elapsed_ms(&mut last, start + Duration::from_micros(16_900 * tick));
        }
        assert_eq!(total, 5_070);
        assert_eq!(last, start + Duration::from_millis(5_070));
    }

    #[test]
    fn test_frame_loop_keeps_gravity_on_time() {
        use quadfall::core::{Grid, PieceGenerator};
        use quadfall::types::PieceKind;

        let mut engine = Engine::with_parts(
            GameConfig::default(),
            PieceGenerator::scripted(&[PieceKind::T]),
            Grid::new(10, 20),
        )
        .unwrap();
        let start = Instant::now();
        let mut last = start;
        for tick in 1..=300u64 {
            engine.advance_time(take_elapsed_ms(&mut last, start + Duration::from_micros(16_900 * tick)));
        }
        // 5.07 s at 1000 ms per row.
        assert_eq!(engine.active().unwrap().row, 5);
    }

    #[test]
    fn test_missing_config_file_reports_path() {
        let options = Options {
            config: Some(PathBuf::from("/nonexistent/quadfall.json")),
            ..Options::default()
        };
        let err = load_config(&options).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/quadfall.json"));
    }
}
