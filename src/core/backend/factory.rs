use crate::core::backend::backends::parallel_rayon::RayonBackend;
use crate::core::backend::backends::serial::SerialBackend;
use crate::core::backend::escape_backend::EscapeBackend;
use crate::core::backend::kinds::EscapeBackendKind;

#[must_use]
pub fn escape_backend_factory(kind: EscapeBackendKind) -> Box<dyn EscapeBackend> {
    match kind {
        EscapeBackendKind::Serial => Box::new(SerialBackend::new()),
        EscapeBackendKind::Rayon => Box::new(RayonBackend::new()),
    }
}
