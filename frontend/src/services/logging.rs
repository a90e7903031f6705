use gloo::console;

/// Thin console logging facade so call sites carry a component tag.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(format!("[{}] {}", component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::log!(format!("[{}] {}", component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(format!("[{}] {}", component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(format!("[{}] {}", component, message));
    }
}
