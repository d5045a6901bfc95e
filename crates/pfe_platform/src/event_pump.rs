//! Pull-style event pumping over winit's callback-driven event loop.
//!
//! The frame loop asks for events once per iteration, so instead of handing
//! control to `EventLoop::run_app` the loop is pumped with a zero timeout and
//! the translated events are staged until the next `poll`.

use std::sync::Arc;
use std::time::Duration;

use pfe_core::{EngineError, PlatformEvent};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowId};

use crate::keymap::translate_window_event;
use crate::window::{create_window, PlatformConfig};

/// Upper bound on pumps while waiting for the platform to resume us.
const MAX_OPEN_PUMPS: usize = 64;

#[derive(Default)]
struct EventCollector {
    pending: Option<PlatformConfig>,
    window: Option<Arc<Window>>,
    create_error: Option<EngineError>,
    staged: Vec<PlatformEvent>,
}

impl ApplicationHandler for EventCollector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let Some(config) = self.pending.take() else {
            return;
        };
        match create_window(event_loop, &config) {
            Ok(window) => {
                log::info!(
                    "Window created: \"{}\" {}x{}",
                    config.title,
                    config.width,
                    config.height
                );
                self.window = Some(window);
            }
            Err(e) => self.create_error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if self.window.is_none() {
            return;
        }
        if let Some(event) = translate_window_event(&event) {
            self.staged.push(event);
        }
    }
}

pub struct WinitPlatform {
    event_loop: EventLoop<()>,
    collector: EventCollector,
}

impl WinitPlatform {
    pub fn new() -> Result<Self, EngineError> {
        let event_loop = EventLoop::new().map_err(|e| EngineError::Window(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        Ok(Self {
            event_loop,
            collector: EventCollector::default(),
        })
    }

    /// Create the window and pump until the platform has handed it over.
    pub fn open_window(&mut self, config: PlatformConfig) -> Result<Arc<Window>, EngineError> {
        if let Some(window) = &self.collector.window {
            return Ok(Arc::clone(window));
        }
        self.collector.pending = Some(config);

        for _ in 0..MAX_OPEN_PUMPS {
            let status = self
                .event_loop
                .pump_app_events(Some(Duration::ZERO), &mut self.collector);
            if let Some(err) = self.collector.create_error.take() {
                return Err(err);
            }
            if let Some(window) = &self.collector.window {
                return Ok(Arc::clone(window));
            }
            if let PumpStatus::Exit(code) = status {
                return Err(EngineError::Window(format!(
                    "event loop exited with code {code} before the window opened"
                )));
            }
        }

        self.collector.pending = None;
        Err(EngineError::Window(
            "platform never resumed the event loop".to_string(),
        ))
    }

    pub fn window(&self) -> Option<&Arc<Window>> {
        self.collector.window.as_ref()
    }

    /// Drain pending native events without blocking.
    pub fn pump(&mut self, events: &mut Vec<PlatformEvent>) {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.collector);
        events.append(&mut self.collector.staged);
        if let PumpStatus::Exit(code) = status {
            log::warn!("Event loop exited with code {}", code);
            events.push(PlatformEvent::CloseRequested);
        }
    }

    pub fn close_window(&mut self) {
        if self.collector.window.take().is_some() {
            log::info!("Window closed");
        }
        self.collector.staged.clear();
    }
}
