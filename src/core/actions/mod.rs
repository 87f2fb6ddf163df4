pub mod cancellation;
pub mod render_request;
pub mod zoom_animation;
