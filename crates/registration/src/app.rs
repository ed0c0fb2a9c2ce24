use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    action::Action,
    components::{Component, registration::RegistrationComponent, status_bar::StatusBar},
    config::{Config, KeyContext},
    tui::{Event, Tui},
};

pub struct App {
    config: Config,
    tick_rate: f64,
    frame_rate: f64,
    components: Vec<Box<dyn Component>>,
    should_quit: bool,
    should_suspend: bool,
    key_context: KeyContext,
    last_tick_key_events: Vec<KeyEvent>,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

/// What the key-binding layer did with a key press.
#[derive(Debug, PartialEq, Eq)]
enum KeyOutcome {
    Bound(Action),
    /// Part of a longer binding, wait for the next key.
    Pending,
    Unbound,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        Self::with_config(Config::new()?, tick_rate, frame_rate)
    }

    pub fn with_config(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            components: vec![
                Box::new(RegistrationComponent::new()),
                Box::new(StatusBar::new()),
            ],
            should_quit: false,
            should_suspend: false,
            key_context: KeyContext::Editing,
            last_tick_key_events: Vec::new(),
            action_tx,
            action_rx,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            // .mouse(true) // uncomment this line to enable mouse support
            .paste(true)
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(self.action_tx.clone())?;
            component.register_config_handler(self.config.clone())?;
            component.init(tui.size()?)?;
        }
        info!(tick_rate = self.tick_rate, frame_rate = self.frame_rate, "Registration form started");

        let action_tx = self.action_tx.clone();
        loop {
            self.handle_events(&mut tui).await?;
            self.handle_actions(&mut tui)?;
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                action_tx.send(Action::ClearScreen)?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        info!("Registration form closed");
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            return Ok(());
        };
        let action_tx = self.action_tx.clone();
        match event {
            Event::Quit => action_tx.send(Action::Quit)?,
            Event::Tick => action_tx.send(Action::Tick)?,
            Event::Render => action_tx.send(Action::Render)?,
            Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            Event::Key(key) => {
                match self.map_key(key) {
                    KeyOutcome::Bound(action) => {
                        info!("Got action: {action:?}");
                        action_tx.send(action)?;
                        return Ok(());
                    }
                    KeyOutcome::Pending => return Ok(()),
                    KeyOutcome::Unbound => {}
                }
            }
            _ => {}
        }
        for component in self.components.iter_mut() {
            if let Some(action) = component.handle_events(Some(event.clone()))? {
                action_tx.send(action)?;
            }
        }
        Ok(())
    }

    /// Resolve a key against the bindings of the current view.
    ///
    /// Single keys are tried first; otherwise the key is appended to the
    /// keys of this tick and the whole sequence is tried.
    fn map_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let bindings = &self.config.keybindings;
        if let Some(action) = bindings.resolve(self.key_context, &[key]) {
            self.last_tick_key_events.clear();
            return KeyOutcome::Bound(action.clone());
        }

        self.last_tick_key_events.push(key);
        if let Some(action) = bindings.resolve(self.key_context, &self.last_tick_key_events) {
            let action = action.clone();
            self.last_tick_key_events.clear();
            return KeyOutcome::Bound(action);
        }
        if bindings.is_prefix(self.key_context, &self.last_tick_key_events) {
            return KeyOutcome::Pending;
        }
        self.last_tick_key_events.clear();
        KeyOutcome::Unbound
    }

    fn handle_actions(&mut self, tui: &mut Tui) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            if action != Action::Tick && action != Action::Render {
                debug!("{action:?}");
            }
            match &action {
                Action::Tick => self.last_tick_key_events.clear(),
                Action::Quit => self.should_quit = true,
                Action::Suspend => self.should_suspend = true,
                Action::Resume => self.should_suspend = false,
                Action::ClearScreen => tui.terminal.clear()?,
                Action::Resize(w, h) => self.handle_resize(tui, *w, *h)?,
                Action::Render => self.render(tui)?,
                Action::ViewChanged(view) => {
                    self.key_context = KeyContext::from(*view);
                    self.last_tick_key_events.clear();
                }
                _ => {}
            }
            for component in self.components.iter_mut() {
                if let Some(action) = component.update(action.clone())? {
                    self.action_tx.send(action)?
                };
            }
        }
        Ok(())
    }

    fn handle_resize(&mut self, tui: &mut Tui, w: u16, h: u16) -> Result<()> {
        tui.resize(Rect::new(0, 0, w, h))?;
        self.render(tui)?;
        Ok(())
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let action_tx = self.action_tx.clone();
        tui.draw(|frame| {
            for component in self.components.iter_mut() {
                if let Err(err) = component.draw(frame, frame.area()) {
                    let _ = action_tx.send(Action::Error(format!("Failed to draw: {:?}", err)));
                }
            }
        })?;
        Ok(())
    }
}
