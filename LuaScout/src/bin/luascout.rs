fn main() -> anyhow::Result<()> {
    luascout::cli::run_cli()
}
