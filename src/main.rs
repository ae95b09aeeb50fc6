fn main() {
    if let Err(error) = navfetch::run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}
