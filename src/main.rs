use anyhow::Context;
use todo_app::error::{self, handle_fatal_error, TodoError};
use todo_app::logging::{self, Logger};
use todo_app::options::AppOptions;
use todo_app::{App, CsvStore, TodoStore};

fn main() {
    error::setup_panic_handler();

    let options = match load_options() {
        Ok(options) => options,
        Err(e) => {
            println!("Failed to read options: {:#}", e);
            std::process::exit(1);
        }
    };

    let mut logger = Logger::new(options.resolve_log_level());
    if let Some(path) = &options.debug_log {
        logger = logger.with_file_output(path);
    }
    logging::init(logger);

    let store = CsvStore::new(options.resolve_store_path());
    log::debug!("using store {}", store.path().display());

    if let Err(e) = store.ensure_file() {
        handle_fatal_error(&TodoError::from(e), "Failed to ensure file exists");
    }

    let mut app = match App::with_stdio(store) {
        Ok(app) => app,
        Err(e) => handle_fatal_error(&e, "Failed to initialize app: failed to load initial data"),
    };

    if let Err(e) = app.run() {
        handle_fatal_error(&e, "Application error");
    }
}

fn load_options() -> anyhow::Result<AppOptions> {
    let from_env = AppOptions::from_env().context("invalid environment")?;
    let from_args =
        AppOptions::from_args(std::env::args().skip(1)).context("invalid arguments")?;
    Ok(from_env.merged_with(&from_args))
}
