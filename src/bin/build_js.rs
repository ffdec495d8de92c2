use asset_splitter::AssetKind;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    asset_splitter::app::run(AssetKind::Js).await
}
