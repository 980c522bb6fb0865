fn main() {
    tinycurl::cli::run();
}
