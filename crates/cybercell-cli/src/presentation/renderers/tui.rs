//! Interactive browser.
//!
//! Owns the terminal and the runtime [`App`]. Input is translated into
//! [`UiEvent`]s; every frame is a fresh [`ScreenViewModel`] drawn by the
//! widgets in `views::tui`.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use cybercell_runtime::{App, AppEffect, UiEvent};

use crate::presentation::presenters::present_screen;
use crate::presentation::view_models::ScreenViewModel;
use crate::presentation::views::tui::{
    BackgroundView, CursorView, FooterView, MenuView, NavBarView, PageCanvasView, StatusBarView,
    ToastView, TooltipView, to_area,
};

const WHEEL_STEP: i32 = 3;

pub struct BrowserRenderer {
    app: App,
    tick: Duration,
    pointer: Option<(u16, u16)>,
    /// Address bar contents while `:` input is open
    input: Option<String>,
    should_quit: bool,
}

impl BrowserRenderer {
    pub fn new(app: App, tick: Duration) -> Self {
        Self {
            app,
            tick,
            pointer: None,
            input: None,
            should_quit: false,
        }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Restore the terminal if we are interrupted from outside
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        info!(address = %self.app.address(), "browser closed");
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            let screen = self.screen();
            terminal.draw(|f| draw_screen(f, &screen))?;

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    Event::Resize(width, height) => {
                        self.dispatch(UiEvent::Resize { width, height })
                    }
                    _ => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= self.tick {
                self.dispatch(UiEvent::Tick(elapsed));
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    fn screen(&self) -> ScreenViewModel {
        present_screen(&self.app, self.pointer, self.input.as_deref())
    }

    fn dispatch(&mut self, event: UiEvent) {
        for effect in self.app.handle(event) {
            match effect {
                AppEffect::Navigated { from, to, href } => {
                    debug!(%from, %to, %href, "page changed");
                }
                AppEffect::OpenExternal { url } => {
                    // The terminal has no second tab; the toast tells the user where it points
                    info!(%url, "external link activated");
                }
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(input) = self.input.as_mut() {
            match key.code {
                KeyCode::Enter => {
                    let address = input.trim().to_string();
                    self.input = None;
                    if !address.is_empty() {
                        self.dispatch(UiEvent::Navigate(address));
                    }
                }
                KeyCode::Esc => self.input = None,
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) => input.push(c),
                _ => {}
            }
            return;
        }

        let page_step = i32::from(self.app.geometry().viewport.height.saturating_sub(2).max(1));
        let event = match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.app.shell().nav().is_menu_open() {
                    UiEvent::ToggleMenu
                } else {
                    self.should_quit = true;
                    return;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => UiEvent::Scroll(1),
            KeyCode::Up | KeyCode::Char('k') => UiEvent::Scroll(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => UiEvent::Scroll(page_step),
            KeyCode::PageUp => UiEvent::Scroll(-page_step),
            KeyCode::Home | KeyCode::Char('g') => UiEvent::ScrollTop,
            KeyCode::End | KeyCode::Char('G') => UiEvent::ScrollBottom,
            KeyCode::Tab => UiEvent::FocusNext,
            KeyCode::BackTab => UiEvent::FocusPrev,
            KeyCode::Enter => UiEvent::Activate,
            KeyCode::Char(c @ '1'..='5') => UiEvent::SelectNav(c as usize - '1' as usize),
            KeyCode::Char('m') => UiEvent::ToggleMenu,
            KeyCode::Char('b') | KeyCode::Backspace => UiEvent::Back,
            KeyCode::Char('f') => UiEvent::Forward,
            KeyCode::Char(':') => {
                self.input = Some(String::new());
                return;
            }
            _ => return,
        };
        self.dispatch(event);
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some((x, y));
                self.dispatch(UiEvent::PointerMove { x, y });
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer = Some((x, y));
                self.dispatch(UiEvent::Click { x, y });
            }
            MouseEventKind::ScrollDown => self.dispatch(UiEvent::Scroll(WHEEL_STEP)),
            MouseEventKind::ScrollUp => self.dispatch(UiEvent::Scroll(-WHEEL_STEP)),
            _ => {}
        }
    }
}

/// Draw one frame. Layers go back to front: background, page, chrome,
/// overlays.
pub fn draw_screen(f: &mut Frame, screen: &ScreenViewModel) {
    let area = f.area();
    let clip = |rect| to_area(rect).intersection(area);

    let viewport = clip(screen.viewport);
    f.render_widget(BackgroundView::new(screen), viewport);
    f.render_widget(PageCanvasView::new(screen), viewport);

    f.render_widget(NavBarView::new(&screen.nav), clip(screen.nav.rect));
    if let Some(menu) = &screen.menu {
        f.render_widget(MenuView::new(menu), clip(menu.rect));
    }
    f.render_widget(FooterView::new(&screen.footer), clip(screen.footer_rect));
    f.render_widget(StatusBarView::new(&screen.status), clip(screen.status.rect));

    f.render_widget(ToastView::new(&screen.toasts), viewport);
    if let Some(tooltip) = &screen.tooltip {
        f.render_widget(TooltipView::new(tooltip), area);
    }
    if let Some(cursor) = &screen.cursor {
        f.render_widget(CursorView::new(cursor), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cybercell_runtime::Config;
    use cybercell_types::{Location, Route};
    use ratatui::backend::TestBackend;

    fn renderer(path: &str) -> BrowserRenderer {
        let app = App::new(&Config::default(), Location::new(path), 120, 40);
        BrowserRenderer::new(app, Duration::from_millis(33))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn frame_text(renderer: &BrowserRenderer) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let screen = renderer.screen();
        terminal.draw(|f| draw_screen(f, &screen)).unwrap();
        let buf = terminal.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_number_keys_select_nav() {
        let mut r = renderer("/");
        r.handle_key_event(press(KeyCode::Char('4')));
        assert_eq!(r.app.router().current_route(), Route::Mitigation);

        r.handle_key_event(press(KeyCode::Char('b')));
        assert_eq!(r.app.router().current_route(), Route::Home);

        r.handle_key_event(press(KeyCode::Char('f')));
        assert_eq!(r.app.router().current_route(), Route::Mitigation);
    }

    #[test]
    fn test_end_key_scrolls_to_bottom_from_offset() {
        let app = App::new(&Config::default(), Location::new("/references"), 100, 20);
        let mut r = BrowserRenderer::new(app, Duration::from_millis(33));
        r.handle_key_event(press(KeyCode::Char('j')));
        r.handle_key_event(press(KeyCode::Char('j')));
        assert_eq!(r.app.view().scroll(), 2);

        r.handle_key_event(press(KeyCode::End));
        assert_eq!(r.app.view().scroll(), r.app.view().max_scroll());

        r.handle_key_event(press(KeyCode::Char('g')));
        assert_eq!(r.app.view().scroll(), 0);
        r.handle_key_event(press(KeyCode::Char('G')));
        assert_eq!(r.app.view().scroll(), r.app.view().max_scroll());
    }

    #[test]
    fn test_address_input_navigates_on_enter() {
        let mut r = renderer("/");
        r.handle_key_event(press(KeyCode::Char(':')));
        for c in "/references".chars() {
            r.handle_key_event(press(KeyCode::Char(c)));
        }
        // While typing, letters do not act as shortcuts
        assert_eq!(r.app.router().current_route(), Route::Home);
        assert_eq!(r.screen().status.input.as_deref(), Some("/references"));

        r.handle_key_event(press(KeyCode::Enter));
        assert_eq!(r.app.router().current_route(), Route::References);
        assert!(r.input.is_none());
    }

    #[test]
    fn test_escape_cancels_input_then_quits() {
        let mut r = renderer("/");
        r.handle_key_event(press(KeyCode::Char(':')));
        r.handle_key_event(press(KeyCode::Esc));
        assert!(r.input.is_none());
        assert!(!r.should_quit);

        r.handle_key_event(press(KeyCode::Esc));
        assert!(r.should_quit);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut r = renderer("/");
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;
        r.handle_key_event(key);
        assert!(!r.should_quit);
    }

    #[test]
    fn test_mouse_move_tracks_pointer() {
        let mut r = renderer("/");
        r.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 12,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(r.pointer, Some((10, 12)));
        assert!(r.screen().cursor.is_some());
    }

    #[test]
    fn test_frame_shows_chrome_and_page() {
        let r = renderer("/mitigation");
        let text = frame_text(&r);
        assert!(text.contains("◆ Cyber Cell"));
        assert!(text.contains("[Mitigation]"));
        assert!(text.contains("Pynevera"));
        assert!(text.contains("/mitigation"));
    }
}
