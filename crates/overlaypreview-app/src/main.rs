//! `overlaypreview` binary.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting overlay position preview");

    let config = match overlaypreview_app::AppConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}\nusage: overlaypreview [--egui | --vello] [CONFIG.json]", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = pollster::block_on(overlaypreview_app::App::with_config(config).run()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    eprintln!("overlaypreview was built without the `native` feature");
    std::process::exit(1);
}
