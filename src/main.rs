use moviedb::ui::output;

fn main() {
    if let Err(err) = moviedb::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
