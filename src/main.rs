use milemark::ui;

fn main() {
    if let Err(err) = milemark::cli::run() {
        ui::output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
