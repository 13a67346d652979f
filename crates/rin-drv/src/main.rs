fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match rin_drv::run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
