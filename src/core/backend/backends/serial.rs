use crate::core::backend::escape_backend::EscapeBackend;
use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::backend::orbit_cell::OrbitCell;

#[derive(Debug, Default)]
pub struct SerialBackend {}

impl EscapeBackend for SerialBackend {
    fn kind(&self) -> EscapeBackendKind {
        EscapeBackendKind::Serial
    }

    fn advance(&self, cells: &mut [OrbitCell]) {
        cells.iter_mut().for_each(OrbitCell::advance);
    }
}

impl SerialBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
