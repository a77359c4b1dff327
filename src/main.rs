use anyhow::Result;
use cloud_init_gen::cli::{App, GenerateArgs};

fn main() -> Result<()> {
    let args = GenerateArgs::parse_args();
    App::run_generate(args)
}
