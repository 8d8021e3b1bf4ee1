fn main() {
    if let Err(e) = am_workbench_lib::run() {
        eprintln!("am-workbench: {e}");
        std::process::exit(1);
    }
}
