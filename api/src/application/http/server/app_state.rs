use std::sync::Arc;

use snapmacro_core::application::SnapMacroService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SnapMacroService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SnapMacroService) -> Self {
        Self { args, service }
    }
}
