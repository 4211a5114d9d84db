//! Bucket Catch entry point
//!
//! Runs a headless session driven by a simple autopilot at the configured
//! frame rate, then prints the session summary as JSON.
//!
//! Usage: bucket-catch [easy|normal|hard] [--seed N] [--config PATH] [--ascii]

use std::path::PathBuf;
use std::process::ExitCode;

use bucket_catch::audio::AudioManager;
use bucket_catch::clock::{Collaborators, FrameStatus, GameClock};
use bucket_catch::renderer::TextRenderer;
use bucket_catch::sim::{MoveIntent, Session, SessionSummary};
use bucket_catch::ui::ToastQueue;
use bucket_catch::{Difficulty, GameError, GameResult, Settings};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bucket-catch")]
#[command(about = "Headless Bucket Catch session driven by an autopilot")]
struct Args {
    /// Difficulty preset (easy, normal, hard); overrides the settings file
    difficulty: Option<Difficulty>,
    /// Fixed RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the final ASCII frame before the summary
    #[arg(long)]
    ascii: bool,
}

/// Chase the lowest clean drop still above the bucket, dodging mud on the way
fn autopilot(session: &Session) -> Option<MoveIntent> {
    let player = &session.player;

    let danger = session.obstacles.iter().find(|o| {
        let c = o.center();
        (c.x - player.pos.x).abs() < player.size * 1.5 && c.y > player.pos.y - 150.0
    });
    if let Some(obstacle) = danger {
        return Some(if obstacle.center().x > player.pos.x {
            MoveIntent::Left
        } else {
            MoveIntent::Right
        });
    }

    let target = session
        .collectibles
        .iter()
        .filter(|c| !c.bad && c.pos.y < player.pos.y)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;

    let dx = target.pos.x - player.pos.x;
    if dx.abs() < player.size / 2.0 {
        None
    } else if dx < 0.0 {
        Some(MoveIntent::Left)
    } else {
        Some(MoveIntent::Right)
    }
}

fn run(args: Args) -> GameResult<(SessionSummary, Option<String>)> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(difficulty) = args.difficulty {
        settings.difficulty = difficulty;
        settings.custom = None;
    }
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!(
        "Bucket Catch (headless) starting: difficulty={} seed={}",
        settings.difficulty.as_str(),
        seed
    );

    let mut session = Session::new(seed);
    session.start_with(settings.effective_config())?;

    let mut clock = GameClock::new();
    let mut renderer = TextRenderer::new();
    let mut audio = AudioManager::new(settings.effective_volume());
    let mut toasts = ToastQueue::new(settings.notification_ms);

    let frame_ms = 1000.0 / settings.fps as f64;
    let mut time_ms = 0.0;
    let summary = loop {
        if let Some(intent) = autopilot(&session) {
            session.apply_input(intent);
        }

        let mut hooks = Collaborators {
            renderer: &mut renderer,
            audio: &mut audio,
            notifier: &mut toasts,
        };
        match clock.frame(&mut session, time_ms, &mut hooks) {
            FrameStatus::Running => {}
            FrameStatus::Finished(summary) => break summary,
            FrameStatus::Stopped => {
                return Err(GameError::InvalidTransition {
                    action: "drive a frame",
                    phase: session.phase(),
                });
            }
        }

        toasts.update(frame_ms.round() as u64);
        time_ms += frame_ms;
    };

    log::info!(
        "{} frames, {} collect cues played",
        clock.frames(),
        audio.played()
    );
    let frame = args.ascii.then(|| renderer.frame().to_string());
    Ok((summary, frame))
}

fn main() -> ExitCode {
    env_logger::init();

    let result = run(Args::parse()).and_then(|(summary, frame)| {
        if let Some(frame) = frame {
            print!("{}", frame);
        }
        println!("{}", serde_json::to_string_pretty(&summary)?);
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("bucket-catch").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["hard", "--seed", "42", "--ascii"]).unwrap();
        assert_eq!(parsed.difficulty, Some(Difficulty::Hard));
        assert_eq!(parsed.seed, Some(42));
        assert!(parsed.ascii);
        assert!(parsed.config.is_none());

        let parsed = args(&["--config", "settings.json"]).unwrap();
        assert_eq!(parsed.difficulty, None);
        assert_eq!(parsed.config, Some(PathBuf::from("settings.json")));
        assert!(!parsed.ascii);
    }

    #[test]
    fn test_parse_args_rejects_unknown() {
        fn kind(list: &[&str]) -> ErrorKind {
            args(list).unwrap_err().kind()
        }
        assert_eq!(kind(&["brutal"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--seed", "x"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["--fast"]), ErrorKind::UnknownArgument);
        assert!(args(&["--seed"]).is_err());
    }

    #[test]
    fn test_headless_run_finishes() {
        let (summary, frame) = run(args(&["hard", "--seed", "7", "--ascii"]).unwrap()).unwrap();
        assert!(summary.final_score % 10 == 0);
        assert!(frame.is_some_and(|f| f.starts_with("Score:")));
    }
}
