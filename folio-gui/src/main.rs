mod app;
mod carousel;
mod sections;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // Default to info, override via RUST_LOG
            // Example: RUST_LOG=folio_core::firestore=debug,folio_gui=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_core=info,folio_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application(app::title, app::update, app::view)
        .subscription(app::subscription)
        .window_size((1280.0, 860.0))
        .run_with(app::initialize)
}
