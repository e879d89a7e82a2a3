fn main() {
    if let Err(err) = gene_matcher::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
