use std::time::Duration;

use eframe::{self, egui};
use egui::ViewportBuilder;

use crate::api::catalog::CatalogClient;
use crate::config::CatalogConfig;

use super::screens::DashboardScreen;
use super::state::DashboardState;

/// When the first fetch fires. Supplied by the hosting shell; the core
/// pipeline is identical under both policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Fetch once on launch, like a page-load refresh
    AutoOnLaunch,
    /// Wait for the Refresh button
    Manual,
}

pub struct GradingApp {
    state: DashboardState,
    policy: FetchPolicy,
    started: bool,
}

impl GradingApp {
    pub fn new(policy: FetchPolicy) -> Self {
        let client = CatalogClient::new(CatalogConfig::from_env());
        Self {
            state: DashboardState::new(client),
            policy,
            started: false,
        }
    }
}

impl eframe::App for GradingApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            if self.policy == FetchPolicy::AutoOnLaunch {
                self.state.trigger_fetch();
            }
        }

        self.state.poll_fetch_results();
        if self.state.in_flight {
            // Keep polling while a fetch is pending
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        DashboardScreen::show(ctx, &mut self.state);
    }
}

pub fn launch_gui(policy: FetchPolicy) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([1100.0, 700.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pokemon TCG Grading Opportunity Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(GradingApp::new(policy)))),
    )
}
