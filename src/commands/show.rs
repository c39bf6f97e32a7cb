use ghscm::scm::github::{Github, Spec};
use serde::Serialize;

use super::ScmArgs;

/// Effective adapter settings, secrets masked.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput<'a> {
    pipeline_id: &'a str,
    directory: String,
    graphql_endpoint: &'a str,
    repository_url: String,
    spec: Spec,
}

pub fn run(args: &ScmArgs) -> anyhow::Result<()> {
    let github = args.build()?;
    print!("{}", render(&github)?);
    Ok(())
}

fn render(github: &Github) -> anyhow::Result<String> {
    let output = ShowOutput {
        pipeline_id: github.pipeline_id(),
        directory: github.directory().display().to_string(),
        graphql_endpoint: github.endpoint().as_str(),
        repository_url: github.repository_url(),
        spec: github.spec().redacted(),
    };
    Ok(serde_yaml::to_string(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn render_masks_token_and_shows_endpoint() {
        let dir = TempDir::new().unwrap();
        let spec = Spec {
            owner: "acme".to_string(),
            repository: "widgets".to_string(),
            token: "ghp_secret".to_string(),
            url: "ghe.example.com".to_string(),
            directory: dir.path().join("checkout").display().to_string(),
            ..Default::default()
        };
        let github = Github::new(spec, "run-1").unwrap();

        let yaml = render(&github).unwrap();

        assert!(!yaml.contains("ghp_secret"), "got: {yaml}");
        assert!(yaml.contains("pipelineId: run-1"), "got: {yaml}");
        assert!(
            yaml.contains("https://ghe.example.com/api/graphql"),
            "got: {yaml}"
        );
        assert!(
            yaml.contains("https://ghe.example.com/acme/widgets.git"),
            "got: {yaml}"
        );
        assert!(yaml.contains("branch: main"), "got: {yaml}");
    }
}
