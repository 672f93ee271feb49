fn main() {
    env_logger::init();
    if let Err(err) = json_lenient::cli::run() {
        eprintln!("jl: {}", err);
        std::process::exit(1);
    }
}
