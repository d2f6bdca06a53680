use std::sync::Arc;

use labelwise_core::application::LabelwiseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LabelwiseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LabelwiseService) -> Self {
        Self { args, service }
    }
}
