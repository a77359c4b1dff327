use anyhow::Result;
use cloud_init_gen::cli::{App, InjectArgs};

fn main() -> Result<()> {
    let args = InjectArgs::parse_args();
    App::run_inject(args)
}
