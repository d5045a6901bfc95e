//! The frame orchestrator.
//!
//! Lifecycle: `Constructed -> Running -> Stopping -> Destroyed`.
//!
//! Each `Running` iteration performs, strictly in order:
//!
//!   1. drain platform events into raw input, pointer and viewport state
//!   2. derive pressed/released/held for every key and button
//!   3. latch the pointer position for this frame
//!   4. call `on_update`
//!   5. present the default surface (always, even on the frame that stops)
//!
//! A close request or a failed `on_update` moves the loop to `Stopping` once
//! the iteration completes. `on_destroy` may decline; the loop then resumes.
//! A close request stays pending until `on_destroy` accepts, so every denial
//! buys exactly one more iteration before the application is asked again.

use crate::backend::{Frame, Platform, Presenter};
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::event::PlatformEvent;

/// Application hooks, called only from the frame loop and never concurrently
/// with each other or with the event drain.
pub trait Application {
    /// Called once after the window exists. `false` stops the engine.
    fn on_create(&mut self, _engine: &mut Engine) -> bool {
        true
    }

    /// Called once per frame. `false` stops the engine.
    fn on_update(&mut self, engine: &mut Engine) -> bool;

    /// Called when the engine wants to stop. `false` keeps it running.
    fn on_destroy(&mut self, _engine: &mut Engine) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Constructed,
    Running,
    Stopping,
    Destroyed,
}

pub struct FrameLoop<A: Application, P: Platform> {
    engine: Engine,
    app: A,
    platform: P,
    presenter: Option<P::Presenter>,
    state: LoopState,
    events: Vec<PlatformEvent>,
    close_requested: bool,
    stop_requested: bool,
}

impl<A: Application, P: Platform> FrameLoop<A, P> {
    /// Validate the config and build the engine context. No window is created
    /// until the loop starts.
    pub fn new(config: EngineConfig, app: A, platform: P) -> Result<Self, EngineError> {
        let engine = Engine::new(config)?;
        Ok(Self {
            engine,
            app,
            platform,
            presenter: None,
            state: LoopState::Constructed,
            events: Vec::new(),
            close_requested: false,
            stop_requested: false,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Drive the lifecycle until it reaches `Destroyed`. Fails only if the
    /// window or presentation backend cannot be acquired.
    pub fn run(&mut self) -> Result<(), EngineError> {
        while self.step()? != LoopState::Destroyed {}
        log::info!("Engine destroyed after {} frames", self.engine.frame_count());
        Ok(())
    }

    /// Advance one lifecycle step: start, one frame, or one shutdown attempt.
    pub fn step(&mut self) -> Result<LoopState, EngineError> {
        match self.state {
            LoopState::Constructed => self.start()?,
            LoopState::Running => self.frame(),
            LoopState::Stopping => self.try_stop(),
            LoopState::Destroyed => {}
        }
        Ok(self.state)
    }

    fn transition(&mut self, next: LoopState) {
        log::debug!("Frame loop {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn start(&mut self) -> Result<(), EngineError> {
        let presenter = self.platform.open(self.engine.config())?;
        self.presenter = Some(presenter);
        log::info!("Window '{}' opened", self.engine.config().window_title());

        self.transition(LoopState::Running);
        if !self.app.on_create(&mut self.engine) {
            log::info!("on_create signalled failure, stopping");
            self.transition(LoopState::Stopping);
        }
        Ok(())
    }

    fn frame(&mut self) {
        self.engine.begin_frame();

        self.events.clear();
        self.platform.poll_events(&mut self.events);
        for event in self.events.drain(..) {
            if event == PlatformEvent::CloseRequested {
                if !self.close_requested {
                    log::info!("Close requested");
                }
                self.close_requested = true;
            } else {
                self.engine.apply_event(&event);
            }
        }

        self.engine.begin_input_frame();

        if !self.app.on_update(&mut self.engine) {
            self.stop_requested = true;
        }

        self.present();

        if self.close_requested || self.stop_requested {
            self.transition(LoopState::Stopping);
        }
    }

    fn present(&mut self) {
        let Some(presenter) = self.presenter.as_mut() else {
            return;
        };
        let frame = Frame::new(self.engine.default_surface(), self.engine.viewport());
        if let Err(err) = presenter.present(&frame) {
            log::warn!("{err}");
        }
    }

    fn try_stop(&mut self) {
        if self.app.on_destroy(&mut self.engine) {
            self.presenter = None;
            self.platform.close();
            self.transition(LoopState::Destroyed);
        } else {
            log::info!("on_destroy declined shutdown, resuming");
            self.stop_requested = false;
            self.transition(LoopState::Running);
        }
    }
}
