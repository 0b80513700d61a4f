fn main() {
    if let Err(err) = affectnet_clean::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
