use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use gridresize::{LayoutHost, ListenerKind, PointerEvent, ResizeConfig, ResizeController};
use log::{debug, info};

use crate::error::AppError;
use crate::grid::{Grid, GUIDE_ID, TABLE_ID};
use crate::terminal::Terminal;
use crate::theme::Theme;
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct App {
    grid: Grid,
    controller: ResizeController<LayoutHost>,
    /// Set by the controller's refresh callback after a drag closes.
    dirty: Rc<Cell<bool>>,
    theme: Theme,
    /// Header cell under the pointer.
    pointer_over: Option<String>,
}

impl App {
    pub fn new() -> Result<Self, AppError> {
        // One terminal cell is one unit, so the band and limits are small.
        let config = ResizeConfig::new()
            .activation_band(1.0)
            .default_min_width(4)
            .default_max_width(40);

        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let mut controller = ResizeController::with_config(
            LayoutHost::new(),
            Some(TABLE_ID.to_string()),
            config,
            move || flag.set(true),
        )?;
        controller.set_guide_anchor(Some(GUIDE_ID.to_string()));

        Ok(Self {
            grid: Grid::sample(),
            controller,
            dirty,
            theme: Theme::default(),
            pointer_over: None,
        })
    }

    pub fn run(&mut self, term: &mut Terminal) -> Result<(), AppError> {
        info!("[app] started");
        loop {
            if self.dirty.replace(false) {
                let size = term.size()?;
                self.grid.layout(self.controller.host_mut(), size);
                let canvas = view::render(
                    &self.grid,
                    &self.controller,
                    &self.theme,
                    self.pointer_over.as_deref(),
                    size,
                );
                term.draw(canvas)?;
            }

            for event in term.poll(POLL_INTERVAL)? {
                if self.handle_event(event) == Flow::Quit {
                    info!("[app] quit");
                    return Ok(());
                }
                self.dirty.set(true);
            }
        }
    }

    fn handle_event(&mut self, event: Event) -> Flow {
        match event {
            Event::Key(key) => return self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                if self.controller.cancel() {
                    debug!("[app] focus lost, drag cancelled");
                }
            }
            Event::Resize(w, h) => debug!("[app] resized to {}x{}", w, h),
            _ => {}
        }
        Flow::Continue
    }

    fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind != KeyEventKind::Press {
            return Flow::Continue;
        }
        match key.code {
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Flow::Quit,
            KeyCode::Esc => {
                self.controller.cancel();
                Flow::Continue
            }
            _ => Flow::Continue,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let dragging = |app: &Self, kind: ListenerKind| app.controller.host().has_listener(kind);

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if dragging(self, ListenerKind::MouseMove) {
                    let event = PointerEvent::from_mouse(mouse, None);
                    self.controller.on_document_mousemove(&event);
                } else {
                    self.hover(mouse);
                }
            }
            MouseEventKind::Down(_) => {
                // Some terminals only report presses, so hover first.
                if let Some((index, event)) = self.hover(mouse) {
                    if let Some((column, previous)) = self.grid.pair(index) {
                        let result = self.controller.on_column_mousedown(&event, column, previous);
                        if result.is_handled() {
                            debug!("[app] drag started on {}", event.target);
                        }
                    }
                }
            }
            MouseEventKind::Up(_) => {
                if dragging(self, ListenerKind::MouseUp) {
                    self.controller.on_document_mouseup(&mut self.grid.columns);
                }
            }
            _ => {}
        }
    }

    /// Deliver a move to the header cell under the pointer. Returns the
    /// column index and the targeted event when there is one.
    fn hover(&mut self, mouse: MouseEvent) -> Option<(usize, PointerEvent)> {
        let host = self.controller.host();
        let target = host
            .header_at(f64::from(mouse.column), f64::from(mouse.row))
            .map(str::to_string);
        self.pointer_over = target.clone();

        let target = target?;
        let index = host.header_index(&target)?;
        let (column, previous) = self.grid.pair(index)?;
        let event = PointerEvent::from_mouse(mouse, Some(target));
        self.controller.on_column_mouseover(&event, column, previous);
        Some((index, event))
    }
}
