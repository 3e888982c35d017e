mod console;

fn main() {
    console::run_from_stdin();
}
