use overlay_prompter::prompter::{platform, PrompterApp};
use overlay_prompter::settings::OverlaySettings;
use overlay_prompter::{help, logging};

fn main() -> anyhow::Result<()> {
    let settings = OverlaySettings::default();
    logging::init(settings.debug_logging);
    tracing::info!("starting overlay");
    help::print_shortcut_help();

    let native_options = platform::native_options(&settings);
    eframe::run_native(
        platform::APP_NAME,
        native_options,
        Box::new(move |cc| Box::new(PrompterApp::new(cc, &settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start overlay window: {e}"))
}
