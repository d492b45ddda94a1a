use condsql::core::CondsqlApp;

fn main() {
    if let Err(e) = CondsqlApp::run() {
        eprintln!("\nError: {:#}\n", e);
        std::process::exit(1);
    }
}
