use std::sync::Arc;

use fridgevision_core::application::FridgeVisionService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FridgeVisionService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FridgeVisionService) -> Self {
        Self { args, service }
    }
}
