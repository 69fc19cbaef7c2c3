use anyhow::Context;
use cgmath::{EuclideanSpace, Point3};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::{
    config::AppConfig,
    gfx::{rendering::render_engine::RenderEngine, scene::Scene},
    input::InputAction,
    scheduler::TickScheduler,
    simulation::{Control, SceneState},
};

pub struct OrreryApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    scene: Option<Scene>,
    state: SceneState,
    scheduler: Option<TickScheduler>,
    init_error: Option<anyhow::Error>,
}

impl OrreryApp {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("Failed to create event loop")?;
        let state = SceneState::new(&config);

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                scene: None,
                state,
                scheduler: None,
                init_error: None,
            },
        })
    }

    /// Run the application (consumes self and starts the event loop)
    ///
    /// Returns once the window closes or a quit key is pressed. A failure
    /// to set up the window or the GPU is returned as an error.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("Event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Wait);

        event_loop
            .run_app(&mut self.app_state)
            .context("Event loop terminated abnormally")?;

        if let Some(err) = self.app_state.init_error.take() {
            return Err(err);
        }

        log::info!(
            "Exiting at t = {:.2} after {} ticks",
            self.app_state.state.clock.time(),
            self.app_state.scheduler.map_or(0, |s| s.ticks())
        );
        Ok(())
    }
}

impl AppState {
    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                WindowAttributes::default()
                    .with_title(self.config.window.title.clone())
                    .with_inner_size(PhysicalSize::new(
                        self.config.window.width,
                        self.config.window.height,
                    )),
            )
            .context("Failed to create window")?;
        let window_handle = Arc::new(window);

        let (width, height) = window_handle.inner_size().into();
        log::info!("Window created: {}x{}", width, height);

        let window_clone = window_handle.clone();
        let clear_color = self.config.clear_color;
        let renderer = pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height, clear_color).await
        })?;

        let scene = Scene::new(
            renderer.device(),
            renderer.queue(),
            &self.config.assets,
            &self.state.system.bodies,
            renderer.object_bindings(),
            renderer.material_bindings(),
        );

        self.state.resize(width, height);
        self.window = Some(window_handle);
        self.render_engine = Some(renderer);
        self.scene = Some(scene);
        Ok(())
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state != ElementState::Pressed {
            return;
        }
        let Some(action) = InputAction::from_key(&event.logical_key, event.physical_key) else {
            return;
        };

        match self.state.apply(action) {
            Control::Exit => {
                log::info!("Quit requested");
                event_loop.exit();
            }
            Control::Redraw => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            Control::Continue => {}
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(render_engine), Some(scene)) = (self.render_engine.as_mut(), self.scene.as_mut())
        else {
            return;
        };

        let frame = self.state.frame();
        self.state.camera.update_view_proj();
        render_engine.update(
            &self.state.camera.uniform,
            Point3::from_vec(frame.light_position),
        );
        scene.update(render_engine.queue(), &frame);

        match render_engine.render_frame(scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost or outdated, reconfiguring");
                render_engine.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(err) => {
                log::warn!("Skipped frame: {err}");
            }
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(err) = self.init_graphics(event_loop) {
            log::error!("Initialisation failed: {err:#}");
            self.init_error = Some(err);
            event_loop.exit();
            return;
        }

        let scheduler = TickScheduler::new(self.config.timing.tick_period, Instant::now());
        event_loop.set_control_flow(ControlFlow::WaitUntil(scheduler.deadline()));
        self.scheduler = Some(scheduler);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if width == 0 || height == 0 {
                    return;
                }
                log::debug!("Resized to {}x{}", width, height);
                self.state.resize(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(scheduler) = self.scheduler.as_mut() else {
            return;
        };

        let now = Instant::now();
        if scheduler.is_due(now) {
            self.state.tick();
            scheduler.advance(now);
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(scheduler.deadline()));
    }
}
