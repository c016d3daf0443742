use std::time::Duration;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::entities::{Enemy, Overlay, Projectile, Rgb, RoundResult, Ship, Sprite, Star};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SPRITE_GLYPH: &str = "█";
const STAR_GLYPH: &str = "·";

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub ship: &'a Ship,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    pub stars: &'a [Star],
    pub overlay: Overlay,
    /// Set once the round is over
    pub result: Option<RoundResult>,
    /// Time left before the end screen closes
    pub hold_remaining: Option<Duration>,
    pub area: Rect,
}

/// Handles all rendering responsibilities for the game
#[derive(Debug, Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches on the round state
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        match view.result {
            None => self.render_game(frame, view),
            Some(result) => self.render_end_screen(frame, view, result),
        }
    }

    /// Renders the active gameplay screen
    fn render_game(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let block = Block::default()
            .borders(Borders::LEFT | Borders::RIGHT)
            .border_style(Style::default().fg(Color::DarkGray));
        let game_area = block.inner(area);
        frame.render_widget(block, area);

        let buffer = frame.buffer_mut();

        // Back to front: stars, ship, enemies, projectiles
        for star in view.stars {
            draw_sprite(buffer, game_area, star, STAR_GLYPH);
        }
        draw_sprite(buffer, game_area, view.ship, SPRITE_GLYPH);
        for enemy in view.enemies {
            draw_sprite(buffer, game_area, enemy, SPRITE_GLYPH);
        }
        for projectile in view.projectiles {
            draw_sprite(buffer, game_area, projectile, SPRITE_GLYPH);
        }

        let stats = Line::from(vec![Span::styled(
            view.overlay.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]);
        let stats_area = Rect {
            x: game_area.x,
            y: game_area.y,
            width: game_area.width,
            height: game_area.height.min(1),
        };
        frame.render_widget(Paragraph::new(stats), stats_area);

        let controls = Line::from(vec![Span::styled(
            "[A/D or Arrows: Move] [Space: Fire] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        let controls_area = Rect {
            x: area.x + 1,
            y: area.y + area.height.saturating_sub(1),
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
        };
        frame.render_widget(Paragraph::new(controls).centered(), controls_area);
    }

    /// Renders the win/loss screen
    fn render_end_screen(&self, frame: &mut Frame, view: &RenderView, result: RoundResult) {
        let headline = if result.won {
            Line::from(result.headline()).centered().green().bold()
        } else {
            Line::from(result.headline()).centered().red().bold()
        };

        let mut text = vec![
            Line::from(""),
            headline,
            Line::from(""),
            Line::from(format!("Final Score: {}", result.final_score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
        ];
        if let Some(remaining) = view.hold_remaining {
            text.push(
                Line::from(format!("Closing in {}s", remaining.as_secs_f32().ceil() as u64))
                    .centered()
                    .dark_gray(),
            );
        }
        text.push(Line::from("Press Q to quit").centered().white());

        frame.render_widget(
            Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            view.area,
        );
    }
}

fn draw_sprite(buffer: &mut Buffer, game_area: Rect, sprite: &impl Sprite, glyph: &str) {
    let Some(Rgb(r, g, b)) = sprite.fill() else {
        return;
    };
    let Some(cells) = project(sprite.bounds(), game_area) else {
        return;
    };
    let style = Style::default().fg(Color::Rgb(r, g, b));
    let row = glyph.repeat(cells.width as usize);
    for y in cells.top()..cells.bottom() {
        buffer.set_string(cells.x, y, &row, style);
    }
}

/// Maps a world rectangle onto terminal cells inside `area`, clipped to the
/// playfield. Anything visible covers at least one cell.
pub fn project(bounds: crate::entities::Rect, area: Rect) -> Option<Rect> {
    let left = bounds.x.max(0);
    let top = bounds.y.max(0);
    let right = bounds.right().min(SCREEN_WIDTH);
    let bottom = bounds.bottom().min(SCREEN_HEIGHT);
    if left >= right || top >= bottom || area.width == 0 || area.height == 0 {
        return None;
    }

    let cols = area.width as i32;
    let rows = area.height as i32;
    let x0 = left * cols / SCREEN_WIDTH;
    let y0 = top * rows / SCREEN_HEIGHT;
    let x1 = ((right * cols + SCREEN_WIDTH - 1) / SCREEN_WIDTH).clamp(x0 + 1, cols);
    let y1 = ((bottom * rows + SCREEN_HEIGHT - 1) / SCREEN_HEIGHT).clamp(y0 + 1, rows);

    Some(Rect {
        x: area.x + x0 as u16,
        y: area.y + y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}
