use crate::ui::tui;

/// Leaves the alternate screen before the panic message is printed.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = tui::Tui::restore() {
            tracing::error!("failed to restore terminal: {e}");
        }
        tracing::error!("{panic_info}");
        hook(panic_info);
    }));
}
