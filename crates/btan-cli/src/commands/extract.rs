use super::input_loader::{Input, load_literal};

pub struct ExtractArgs {
    pub input: Input,
}

pub fn run(args: ExtractArgs) {
    match load_literal(&args.input) {
        Ok(literal) => println!("{}", literal),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}
