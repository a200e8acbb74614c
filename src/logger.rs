use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

static INIT: OnceCell<()> = OnceCell::new();

/// Initializes the logging system from the default file `log4rs.yaml` in the
/// working directory, falling back to the programmatic configuration when the
/// file is absent.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    INIT.get_or_init(|| {
        if Path::new("log4rs.yaml").exists() {
            let _ = log4rs::init_file("log4rs.yaml", log4rs::config::Deserializers::default());
        } else {
            configure(None, None);
        }
    });
    Ok(())
}

/// Configure logging globally for the process. Subsequent calls are no-ops.
/// - dir: base directory for the log file; if None, the current directory.
/// - level: error|warn|info|debug|trace
pub fn configure_logging(dir: Option<&Path>, level: Option<&str>) {
    let dir = dir.map(Path::to_path_buf);
    let level = level.map(str::to_string);
    INIT.get_or_init(|| configure(dir.as_deref(), level.as_deref()));
}

/// Configure logging from environment variables if present:
/// - SEARCHDECK_LOG_DIR
/// - SEARCHDECK_LOG_LEVEL
pub fn configure_from_env() {
    let dir = std::env::var("SEARCHDECK_LOG_DIR").ok().map(PathBuf::from);
    let level = std::env::var("SEARCHDECK_LOG_LEVEL").ok();
    configure_logging(dir.as_deref(), level.as_deref());
}

fn configure(dir: Option<&Path>, level: Option<&str>) {
    use log::LevelFilter;
    use log4rs::append::file::FileAppender;
    use log4rs::config::{Appender, Config, Root};
    use log4rs::encode::pattern::PatternEncoder;

    let base = dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let lvl = match level.unwrap_or("info").to_ascii_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };

    let encoder = PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}");
    let Ok(appender) =
        FileAppender::builder().encoder(Box::new(encoder)).build(base.join("searchdeck.log"))
    else {
        return;
    };
    let Ok(config) = Config::builder()
        .appender(Appender::builder().build("app", Box::new(appender)))
        .build(Root::builder().appender("app").build(lvl))
    else {
        return;
    };
    let _ = log4rs::init_config(config);
}
