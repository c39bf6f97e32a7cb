use ghscm::scm::github::{Github, Repository};

use super::ScmArgs;

#[tokio::main]
pub async fn run(args: &ScmArgs) -> anyhow::Result<()> {
    let github = args.build()?;
    let repository = resolve(&github).await?;
    println!("{}", serde_json::to_string_pretty(&repository)?);
    Ok(())
}

async fn resolve(github: &Github) -> anyhow::Result<Repository> {
    tracing::debug!(
        owner = %github.spec().owner,
        repository = %github.spec().repository,
        endpoint = %github.endpoint(),
        "resolving repository identity"
    );
    github.repository_identity().await
}
