use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use crate::config::{FIRE_REPEAT_DELAY, FIRE_REPEAT_INTERVAL};

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    /// Fire key went down (or auto-repeated while held)
    Fire,
    /// Fire key came back up; the next press may shoot again
    FireReleased,
    Quit,
}

/// Fire key that is taken to be held down on a terminal without release events
#[derive(Debug, Clone, Copy)]
struct FireHold {
    last_press: Instant,
    /// Auto-repeat has kicked in, so the shorter repeat gap applies
    repeating: bool,
}

impl FireHold {
    fn expired(&self, now: Instant) -> bool {
        let window = if self.repeating {
            FIRE_REPEAT_INTERVAL
        } else {
            FIRE_REPEAT_DELAY
        };
        now.saturating_duration_since(self.last_press) > window
    }
}

/// Collects raw key events and translates them into game actions
pub struct InputManager {
    actions: Vec<InputAction>,
    /// Whether the terminal reports key releases. Without them, auto-repeated
    /// presses of the fire key are folded into one hold by timing.
    reports_releases: bool,
    fire_hold: Option<FireHold>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(false)
    }
}

impl InputManager {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            actions: Vec::new(),
            reports_releases,
            fire_hold: None,
        }
    }

    /// Drains every event that is already waiting, without blocking
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            self.handle_event(event);
        }
        self.release_stale_fire(Instant::now());
        Ok(())
    }

    /// Waits up to `timeout` for one event. Returns true if one arrived.
    pub fn wait_for_event(&mut self, timeout: Duration) -> color_eyre::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }
        let event = event::read()?;
        self.handle_event(event);
        Ok(true)
    }

    /// Returns the actions gathered since the last call
    pub fn take_actions(&mut self) -> Vec<InputAction> {
        std::mem::take(&mut self.actions)
    }

    pub fn handle_event(&mut self, event: Event) {
        self.handle_event_at(event, Instant::now());
    }

    /// Like [`Self::handle_event`], with the arrival time given explicitly
    pub fn handle_event_at(&mut self, event: Event, now: Instant) {
        if let Event::Key(key_event) = event {
            self.handle_key_event(key_event, now);
        }
    }

    /// Ends a fire hold once no press has arrived within the auto-repeat
    /// window. Only matters when the terminal does not report releases.
    pub fn release_stale_fire(&mut self, now: Instant) {
        if self.fire_hold.is_some_and(|hold| hold.expired(now)) {
            self.fire_hold = None;
            self.actions.push(InputAction::FireReleased);
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent, now: Instant) {
        match key_event.kind {
            KeyEventKind::Press => self.handle_key_press(key_event, now),
            KeyEventKind::Repeat => self.handle_key_repeat(key_event.code),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, now: Instant) {
        // Quit keys take priority over everything else
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.actions.push(InputAction::Quit);
            return;
        }

        if is_fire_key(key_event.code) && !self.reports_releases {
            self.press_fire_without_release(now);
            return;
        }
        self.handle_key_repeat(key_event.code);
    }

    /// Auto-repeat arrives as plain presses here, so a press inside the
    /// window continues the hold and only a fresh press re-arms the trigger
    fn press_fire_without_release(&mut self, now: Instant) {
        let repeating = match self.fire_hold {
            Some(hold) if !hold.expired(now) => true,
            _ => {
                self.actions.push(InputAction::FireReleased);
                false
            }
        };
        self.fire_hold = Some(FireHold {
            last_press: now,
            repeating,
        });
        self.actions.push(InputAction::Fire);
    }

    /// Movement follows key repeat; fire stays latched until release
    fn handle_key_repeat(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.actions.push(InputAction::MoveLeft);
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.actions.push(InputAction::MoveRight);
            }
            code if is_fire_key(code) => {
                self.actions.push(InputAction::Fire);
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        if is_fire_key(code) {
            self.actions.push(InputAction::FireReleased);
        }
    }
}

fn is_fire_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' '))
}
