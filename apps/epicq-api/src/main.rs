use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = epicq_api::Args::parse();
	epicq_api::run(args).await
}
