use clap::Parser;

#[derive(Parser)]
#[command(name = "greet")]
#[command(about = "Print only the greeting line")]
struct Args {
    /// Name to greet
    #[arg(default_value = "World")]
    name: String,
}

fn main() {
    let args = Args::parse();
    greet_calc::greet(&args.name);
}
