use crate::ui::tui;

/// Leaves the alternate screen before the panic report is printed.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(err) = tui::Tui::restore() {
            tracing::error!("Failed to restore terminal: {}", err);
        }
        tracing::error!("{}", panic_info);
        hook(panic_info);
    }));
}
