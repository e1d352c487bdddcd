fn main() {
    if let Err(err) = ctrmount::run() {
        ctrmount::output::show_error(&err);
        std::process::exit(1);
    }
}
