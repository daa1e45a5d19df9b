// The page ships a single dark theme; there is nothing to switch yet.
pub fn init() -> anyhow::Result<()> {
    log::info!("[theme] dark theme active");
    Ok(())
}
