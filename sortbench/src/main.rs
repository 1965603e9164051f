fn main() {
    if let Err(e) = sortbench::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
