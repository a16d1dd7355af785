//! Main application structure
//!
//! `TermoApp` implements `eframe::App`. `logic` feeds the frame's key events
//! to the session and `ui` draws the surface. Shell commands run inside
//! `logic`, so the window does not repaint until they finish.

mod input;

use eframe::egui;
use termo::config::Config;
use termo::execution::ShellExecutor;
use termo::terminal::{DispatchOutcome, Session, TextSurface};
use termo::ui::SurfaceViewport;
use tracing::{debug, info};

use input::ViewportControl;

/// Main termo application
pub struct TermoApp {
    /// Submission state machine, owns the pending line
    session: Session<ShellExecutor>,
    /// What the window shows
    surface: TextSurface,
    /// Surface renderer
    viewport: SurfaceViewport,
}

impl TermoApp {
    /// Create the application from configuration and a ready session
    pub fn new(config: &Config, session: Session<ShellExecutor>) -> Self {
        Self {
            session,
            surface: TextSurface::new(),
            viewport: SurfaceViewport::new(&config.ui),
        }
    }

    /// Feed this frame's key presses to the session
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let keys = ctx.input(|i| input::key_inputs(&i.events));
        if keys.is_empty() {
            return;
        }

        let mut window = ViewportControl::new(ctx);
        for key in keys {
            let Some(outcome) = self.session.handle_key(key, &mut self.surface, &mut window)
            else {
                continue;
            };

            match outcome {
                DispatchOutcome::Exited => {
                    info!("Closing window");
                    break;
                }
                DispatchOutcome::Replaced {
                    bytes, exit_code, ..
                } => {
                    debug!("Displayed {} bytes (exit code {:?})", bytes, exit_code);
                }
                DispatchOutcome::Cleared | DispatchOutcome::Failed(_) => {}
            }
        }
    }
}

impl eframe::App for TermoApp {
    fn logic(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
    }

    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        self.viewport.show(ui, &self.surface);
    }
}
