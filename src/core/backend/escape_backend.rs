use crate::core::backend::kinds::EscapeBackendKind;
use crate::core::backend::orbit_cell::OrbitCell;
use std::fmt::Debug;

/// Bulk executor for one escape-time round over a batch of cells.
pub trait EscapeBackend: Debug + Send + Sync {
    fn kind(&self) -> EscapeBackendKind;

    /// Applies [`OrbitCell::advance`] to every cell in `cells` exactly once.
    fn advance(&self, cells: &mut [OrbitCell]);

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}
