fn main() {
    listparse::cli::run();
}
