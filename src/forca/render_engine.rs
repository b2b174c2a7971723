use std::convert::From;
use std::io::{self, stdout, Stdout};

use crate::forca::game_model::GameModel;
use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{prelude::*, widgets::*};

use super::game_model::{GameState, MAX_WRONG_GUESSES};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug)]
pub struct RenderEngine {
    terminal: Tui,
}

impl RenderEngine {
    pub fn init_render_engine() -> Result<RenderEngine, io::Error> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()));
        match terminal {
            Ok(terminal) => Ok(RenderEngine { terminal }),
            Err(e) => Err(e),
        }
    }

    pub fn deinit_render_engine(self) -> io::Result<()> {
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn render<F>(&mut self, render_fn: F) -> io::Result<CompletedFrame>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(|frame| render_fn(frame))
    }
}

struct GallowsView;

impl GallowsView {
    const WIDTH: usize = 10;
    const HEIGHT: usize = 8;

    const BEAM: char = '━';
    const POLE: char = '┃';
    const POLE_CORNER: char = '┏';
    const BEAM_CORNER: char = '┓';
    const BASE_JOINT: char = '┻';
    const NOOSE: char = '╻';
    const HEAD: char = 'O';
    const BODY: char = '┃';

    // One drawing part per wrong guess, in the order base, pole, beam,
    // noose, head, body.
    fn draw(wrong_guesses: usize) -> String {
        let wrong_guesses = wrong_guesses.min(MAX_WRONG_GUESSES);
        let mut grid = vec![vec![' '; Self::WIDTH]; Self::HEIGHT];
        if wrong_guesses >= 1 {
            for x in 0..Self::WIDTH {
                grid[7][x] = Self::BEAM;
            }
        }
        if wrong_guesses >= 2 {
            for y in 0..7 {
                grid[y][1] = Self::POLE;
            }
            grid[7][1] = Self::BASE_JOINT;
        }
        if wrong_guesses >= 3 {
            grid[0][1] = Self::POLE_CORNER;
            for x in 2..9 {
                grid[0][x] = Self::BEAM;
            }
        }
        if wrong_guesses >= 4 {
            grid[0][8] = Self::BEAM_CORNER;
            grid[1][8] = Self::NOOSE;
        }
        if wrong_guesses >= 5 {
            grid[2][8] = Self::HEAD;
        }
        if wrong_guesses >= 6 {
            grid[3][8] = Self::BODY;
            grid[4][8] = Self::BODY;
        }
        let lines: Vec<String> = grid
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        lines.join("\n")
    }
}

impl From<&GameModel> for String {
    fn from(value: &GameModel) -> Self {
        let masked = value.masked_word();
        let mut word_display = String::new();
        for (i, letter) in masked.chars().enumerate() {
            if i > 0 {
                word_display.push(' ');
            }
            word_display.push(letter);
        }
        word_display
    }
}

impl WidgetRef for GameModel {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .border_style(Style::default().fg(Color::Blue))
            .borders(Borders::ALL)
            .title(Span::styled(
                "JOGO DA FORCA",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Rgb(255, 192, 203)),
            ))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let [gallows_area, info_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(inner);

        let gallows = GallowsView::draw(self.wrong_guesses());
        let mut gallows_text = Vec::new();
        for line in gallows.lines() {
            gallows_text.push(Line::from(line.to_string().white()));
        }
        let gallows_block = Block::default().borders(Borders::ALL).title(format!(
            "Erros: {}/{}",
            self.wrong_guesses(),
            MAX_WRONG_GUESSES
        ));
        Paragraph::new(gallows_text)
            .centered()
            .block(gallows_block)
            .render(gallows_area, buf);

        let [word_area, keyboard_area, letters_area, status_area] = Layout::vertical([
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(25),
        ])
        .areas(info_area);

        let word_display: String = self.into();
        Paragraph::new(Line::from(word_display.yellow().bold()))
            .centered()
            .block(Block::default().borders(Borders::ALL).title("Palavra"))
            .render(word_area, buf);

        let correct_letters = self.correct_letters();

        let mut keyboard_spans = Vec::new();
        for letter in 'A'..='Z' {
            let style = if !self.is_revealed(letter) {
                Style::default().fg(Color::Gray)
            } else if correct_letters.contains(&letter) {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            };
            keyboard_spans.push(Span::styled(format!("{letter} "), style));
        }
        Paragraph::new(Line::from(keyboard_spans))
            .centered()
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Teclado"))
            .render(keyboard_area, buf);

        // Guessed letters in the order they were entered.
        let mut used_spans = Vec::new();
        for letter in self.guessed_letters() {
            let style = if correct_letters.contains(letter) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            used_spans.push(Span::styled(format!("{letter} "), style));
        }
        Paragraph::new(Line::from(used_spans))
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Letras utilizadas"),
            )
            .render(letters_area, buf);

        let status_line = match self.state() {
            GameState::Playing => Line::from(format!(
                "Tentativas restantes: {}",
                self.remaining_attempts()
            )),
            GameState::Won => Line::from("PARABÉNS! Você adivinhou a palavra!".green().bold()),
            GameState::Lost => {
                let word = self.revealed_word().unwrap_or_default();
                Line::from(format!("GAME OVER! A palavra era: {word}").red().bold())
            }
        };
        let hint_line = Line::from("Enter: novo jogo | Esc: sair".dark_gray());
        Paragraph::new(vec![status_line, hint_line])
            .centered()
            .block(Block::default().borders(Borders::ALL))
            .render(status_area, buf);
    }
}

impl Widget for GameModel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_ref(area, buf)
    }
}
