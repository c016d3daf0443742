use color_eyre::Result;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::Backend};
use std::time::{Duration, Instant};

use crate::audio::AudioManager;
use crate::config::Settings;
use crate::game::Game;
use crate::input::{InputAction, InputManager};
use crate::pacer::TickPacer;
use crate::renderer::{GameRenderer, RenderView};

/// Upper bound on how long the end screen waits for input before redrawing
const END_SCREEN_POLL: Duration = Duration::from_millis(250);

/// The main application: owns the round plus every terminal-facing collaborator
pub struct App {
    game: Game,
    rng: StdRng,
    settings: Settings,
    /// internal components
    input_manager: InputManager,
    renderer: GameRenderer,
    audio_manager: AudioManager,
    pacer: TickPacer,
}

impl App {
    pub fn new(settings: Settings, reports_releases: bool) -> Self {
        let rng = match settings.seed {
            Some(seed) => {
                info!("seeding rng with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };

        Self {
            game: Game::new(),
            rng,
            input_manager: InputManager::new(reports_releases),
            renderer: GameRenderer::new(),
            audio_manager: AudioManager::from_settings(&settings),
            pacer: TickPacer::new(settings.tick_duration()),
            settings,
        }
    }

    /// Run the round to completion, then hold the result screen.
    /// Returns early as soon as the player asks to quit.
    pub fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.game.state().is_over() {
            self.input_manager.poll_events()?;
            let actions = self.input_manager.take_actions();
            if actions.contains(&InputAction::Quit) {
                info!("quit during play at tick {}", self.game.tick_count());
                return Ok(());
            }

            let report = self.game.tick(&actions, &mut self.rng);
            for cue in report.cues {
                self.audio_manager.play(cue);
            }

            self.draw(terminal, None)?;
            self.pacer.wait();
        }

        self.hold_end_screen(terminal)
    }

    fn hold_end_screen<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let deadline = Instant::now() + self.settings.end_screen_hold();
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(());
            }
            self.draw(terminal, Some(remaining))?;

            if self
                .input_manager
                .wait_for_event(remaining.min(END_SCREEN_POLL))?
                && self.input_manager.take_actions().contains(&InputAction::Quit)
            {
                info!("quit from end screen");
                return Ok(());
            }
        }
    }

    fn draw<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        hold_remaining: Option<Duration>,
    ) -> Result<()> {
        terminal.draw(|frame| {
            let view = RenderView {
                ship: self.game.ship(),
                enemies: self.game.enemies(),
                projectiles: self.game.projectiles(),
                stars: self.game.stars(),
                overlay: self.game.overlay(),
                result: self.game.result(),
                hold_remaining,
                area: frame.area(),
            };
            self.renderer.render(frame, &view);
        })?;
        Ok(())
    }
}
