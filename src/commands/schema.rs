pub fn run() -> anyhow::Result<()> {
    let schema = ghscm::shared::config::generate_schema();
    let json = serde_json::to_string_pretty(&schema)?;
    println!("{json}");
    Ok(())
}
