use std::cmp::min;

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use tokio::sync::watch;

use crate::library::Library;
use crate::models::{Artist, Song};

use super::screens::{ArtistDetailScreen, ArtistsScreen, ExploreScreen};

/// Vertical space for the tab bar at the top of every screen.
const TAB_BAR_HEIGHT: u16 = 2;
/// Footer space reserved for key hints.
const FOOTER_HEIGHT: u16 = 3;
/// Height allocation per song card in list-style views.
const SONG_CARD_HEIGHT: u16 = 5;
/// Height allocation per artist card.
const ARTIST_CARD_HEIGHT: u16 = 4;
/// Palette cycled by song id to tint each song's avatar block, so neighboring
/// cards read apart at a glance.
const SONG_COLORS: &[Color] = &[
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
];

/// High-level navigation states. Keeping this explicit makes it easy to reason
/// about which rendering path runs and what keyboard shortcuts should do.
enum Screen {
    Explore(ExploreScreen),
    Artists(ArtistsScreen),
    ArtistDetail(ArtistDetailScreen),
}

/// Central application state shared across the TUI. The library publishes
/// fresh list snapshots through watch channels; [`App::refresh`] pulls them in
/// once per frame so the screens never read stale data for longer than a tick.
pub struct App {
    library: Library,
    songs_rx: watch::Receiver<Vec<Song>>,
    artists_rx: watch::Receiver<Vec<Artist>>,
    songs: Vec<Song>,
    artists: Vec<Artist>,
    screen: Screen,
}

impl App {
    pub fn new(library: Library) -> Self {
        let songs_rx = library.subscribe_songs();
        let artists_rx = library.subscribe_artists();
        let songs = library.songs();
        let artists = library.artists();
        let screen = Screen::Explore(ExploreScreen::new(songs.clone()));
        Self {
            library,
            songs_rx,
            artists_rx,
            songs,
            artists,
            screen,
        }
    }

    /// Pull any snapshots the library published since the last frame.
    pub(crate) fn refresh(&mut self) {
        if self.songs_rx.has_changed().unwrap_or(false) {
            let songs = self.songs_rx.borrow_and_update().clone();
            self.apply_songs(songs);
        }
        if self.artists_rx.has_changed().unwrap_or(false) {
            let artists = self.artists_rx.borrow_and_update().clone();
            self.apply_artists(artists);
        }
    }

    fn apply_songs(&mut self, songs: Vec<Song>) {
        self.songs = songs;
        match &mut self.screen {
            Screen::Explore(explore) => explore.set_songs(self.songs.clone()),
            Screen::ArtistDetail(detail) => detail.set_songs(&self.songs),
            Screen::Artists(_) => {}
        }
    }

    fn apply_artists(&mut self, artists: Vec<Artist>) {
        self.artists = artists;
        if let Screen::Artists(list) = &mut self.screen {
            list.set_artists(self.artists.clone());
        }
    }

    /// Process one key press. Returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let mut exit = false;
        let mut next_screen: Option<Screen> = None;

        match &mut self.screen {
            Screen::Explore(explore) => match code {
                KeyCode::Char('q') | KeyCode::Esc => exit = true,
                KeyCode::Up => explore.move_selection(-1),
                KeyCode::Down => explore.move_selection(1),
                KeyCode::PageUp => explore.move_selection(-5),
                KeyCode::PageDown => explore.move_selection(5),
                KeyCode::Home => explore.select_first(),
                KeyCode::End => explore.select_last(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(song) = explore.current_song() {
                        self.library.toggle_favorite(song);
                    }
                }
                KeyCode::Tab | KeyCode::Char('2') => {
                    next_screen = Some(Screen::Artists(ArtistsScreen::new(self.artists.clone())));
                }
                _ => {}
            },
            Screen::Artists(artists) => match code {
                KeyCode::Char('q') | KeyCode::Esc => exit = true,
                KeyCode::Up => artists.move_selection(-1),
                KeyCode::Down => artists.move_selection(1),
                KeyCode::PageUp => artists.move_selection(-5),
                KeyCode::PageDown => artists.move_selection(5),
                KeyCode::Home => artists.select_first(),
                KeyCode::End => artists.select_last(),
                KeyCode::Enter => {
                    if let Some(artist) = artists.current_artist().cloned() {
                        next_screen = Some(Screen::ArtistDetail(ArtistDetailScreen::new(
                            artist,
                            &self.songs,
                        )));
                    }
                }
                KeyCode::Tab | KeyCode::Char('1') => {
                    next_screen = Some(Screen::Explore(ExploreScreen::new(self.songs.clone())));
                }
                _ => {}
            },
            Screen::ArtistDetail(detail) => match code {
                KeyCode::Char('q') => exit = true,
                KeyCode::Esc => {
                    next_screen = Some(Screen::Artists(ArtistsScreen::new(self.artists.clone())));
                }
                KeyCode::Up => detail.move_selection(-1),
                KeyCode::Down => detail.move_selection(1),
                KeyCode::PageUp => detail.move_selection(-5),
                KeyCode::PageDown => detail.move_selection(5),
                KeyCode::Home => detail.select_first(),
                KeyCode::End => detail.select_last(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(song) = detail.current_song() {
                        self.library.toggle_favorite(song);
                    }
                }
                KeyCode::Tab | KeyCode::Char('1') => {
                    next_screen = Some(Screen::Explore(ExploreScreen::new(self.songs.clone())));
                }
                KeyCode::Char('2') => {
                    next_screen = Some(Screen::Artists(ArtistsScreen::new(self.artists.clone())));
                }
                _ => {}
            },
        }

        if let Some(screen) = next_screen {
            self.screen = screen;
        }
        exit
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.draw_tab_bar(frame, chunks[0]);

        match &self.screen {
            Screen::Explore(explore) => self.draw_explore(frame, chunks[1], explore),
            Screen::Artists(artists) => self.draw_artist_list(frame, chunks[1], artists),
            Screen::ArtistDetail(detail) => self.draw_artist_detail(frame, chunks[1], detail),
        }

        self.draw_footer(frame, chunks[2]);
    }

    fn draw_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let active = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let idle = Style::default().fg(Color::Gray);
        let (explore_style, artists_style) = match self.screen {
            Screen::Explore(_) => (active, idle),
            Screen::Artists(_) | Screen::ArtistDetail(_) => (idle, active),
        };

        let tabs = Line::from(vec![
            Span::styled(" [1] Explore ", explore_style),
            Span::raw("  "),
            Span::styled(" [2] Artists ", artists_style),
        ]);
        let paragraph = Paragraph::new(tabs).block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(paragraph, area);
    }

    fn draw_explore(&self, frame: &mut Frame, area: Rect, explore: &ExploreScreen) {
        if explore.songs.is_empty() {
            let message = Paragraph::new("No songs in the library yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        self.render_song_cards(frame, area, &explore.songs, explore.selected);
    }

    fn draw_artist_list(&self, frame: &mut Frame, area: Rect, artists: &ArtistsScreen) {
        if artists.artists.is_empty() {
            let message = Paragraph::new("No artists in the library yet.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::NONE));
            frame.render_widget(message, area);
            return;
        }

        self.render_artist_cards(frame, area, &artists.artists, artists.selected);
    }

    fn draw_artist_detail(&self, frame: &mut Frame, area: Rect, detail: &ArtistDetailScreen) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(area);

        let artist = &detail.artist;
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                artist.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(format!(
                "{} monthly listeners  •  {} albums",
                artist.monthly_listeners, artist.album_count
            ))),
        ])
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Artist"));
        frame.render_widget(header, chunks[0]);

        if detail.songs.is_empty() {
            let message = Paragraph::new("No songs by this artist.")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        self.render_song_cards(frame, chunks[1], &detail.songs, detail.selected);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let paragraph = Paragraph::new(self.footer_instructions()).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.screen {
            Screen::Explore(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Toggle Favorite   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Artists   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Screen::Artists(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open Artist   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Explore   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            Screen::ArtistDetail(_) => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Select   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Toggle Favorite   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Back   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn render_song_cards(&self, frame: &mut Frame, area: Rect, songs: &[Song], selected: usize) {
        if songs.is_empty() || area.height == 0 {
            return;
        }

        let card_height = SONG_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = songs.len();
        let mut start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(SONG_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let song_index = start + idx;
            if song_index >= len {
                break;
            }

            let song = &songs[song_index];
            let mut block = Block::default().borders(Borders::ALL);
            let mut paragraph_style = Style::default();
            if song_index == selected {
                block = block.style(Style::default().fg(Color::Yellow));
                paragraph_style = Style::default().fg(Color::Yellow);
            }

            let mut title_spans = vec![Span::styled(
                "■ ",
                Style::default().fg(song_color(song.id)),
            )];
            if song_index == selected {
                title_spans.push(Span::raw("▶ "));
            }
            title_spans.push(Span::styled(
                song.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            if song.is_favorite {
                title_spans.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
            }

            let lines = vec![
                Line::from(title_spans),
                Line::from(Span::styled(
                    format!("{}  •  {}", song.genre, song.duration_display()),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::raw(format!("Artist: {}", song.artist_id))),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left)
                .style(paragraph_style);

            frame.render_widget(paragraph, *chunk);
        }
    }

    fn render_artist_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        artists: &[Artist],
        selected: usize,
    ) {
        if artists.is_empty() || area.height == 0 {
            return;
        }

        let card_height = ARTIST_CARD_HEIGHT as usize;
        let capacity = ((area.height as usize) / card_height).max(1);
        let len = artists.len();
        let mut start = if selected >= capacity {
            selected + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(ARTIST_CARD_HEIGHT))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let artist_index = start + idx;
            if artist_index >= len {
                break;
            }

            let artist = &artists[artist_index];
            let mut block = Block::default().borders(Borders::ALL);
            let mut paragraph_style = Style::default();
            if artist_index == selected {
                block = block.style(Style::default().fg(Color::Yellow));
                paragraph_style = Style::default().fg(Color::Yellow);
            }

            let title = if artist_index == selected {
                format!("▶ {}", artist.name)
            } else {
                artist.name.clone()
            };
            let lines = vec![
                Line::from(Span::styled(
                    title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} monthly listeners", artist.monthly_listeners),
                    Style::default().fg(Color::Gray),
                )),
            ];

            let paragraph = Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left)
                .style(paragraph_style);

            frame.render_widget(paragraph, *chunk);
        }
    }
}

fn song_color(id: i64) -> Color {
    SONG_COLORS[id.rem_euclid(SONG_COLORS.len() as i64) as usize]
}
