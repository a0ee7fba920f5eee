use log::LevelFilter;
use simple_logger::SimpleLogger;
use starfill::Settings;

fn main() -> anyhow::Result<()> {
    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    starfill_app::run(Settings::default())?;
    Ok(())
}
