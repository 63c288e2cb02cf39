use std::sync::Arc;

use crate::application::ports::{FileLoader, TextSplitter};
use crate::application::services::GuardService;
use crate::infrastructure::storage::WorkingArea;
use crate::presentation::config::Settings;

pub struct AppState<F: ?Sized, T: ?Sized>
where
    F: FileLoader,
    T: TextSplitter,
{
    pub guard_service: Arc<GuardService<F, T>>,
    pub working_area: WorkingArea,
    pub settings: Settings,
}

impl<F: ?Sized, T: ?Sized> Clone for AppState<F, T>
where
    F: FileLoader,
    T: TextSplitter,
{
    fn clone(&self) -> Self {
        Self {
            guard_service: Arc::clone(&self.guard_service),
            working_area: self.working_area.clone(),
            settings: self.settings.clone(),
        }
    }
}
