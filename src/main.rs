use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = mediadir::cli::parse();
    app::run(args)
}
