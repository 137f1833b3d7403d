//! Write a starter nbkit.toml

use std::fs;

use nbkit::config::{Config, DEFAULT_FROM_FORMAT, DEFAULT_PROMPT_TEMPLATE};
use nbkit::output::{OperationResult, OutputMode};
use nbkit::paths;

/// Create `nbkit.toml` in the current directory
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let path = paths::project_config();

    if path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({} exists).\nUse --force to reinitialize.",
                path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let defaults = Config::default();
    let content = format!(
        r#"# nbkit configuration

[llm]
endpoint = "{endpoint}"
model = "{model}"
max_tokens = {max_tokens}
# Env var holding the API key
api_key_env = "{api_key_env}"
prompt_template = "{template}"

[notebook]
staging_dir = "{staging}"

[executor]
interpreter = "{interpreter}"
args = []

[publish]
# Local clone the notebooks are committed in
clone_dir = "{clone_dir}"
# GitHub account and repository notebooks are pushed to
owner = ""
repo = ""
branch = "{branch}"
# Env var holding the GitHub access token
token_env = "{token_env}"
force = {force_push}
# remote_url = "https://github.com/<owner>/<repo>.git"

[convert]
pandoc = "{pandoc}"
upload_dir = "{uploads}"
output_dir = "{outputs}"
from_format = "{from_format}"
# Word styles are taken from this document when set
# reference_doc = "reference.docx"
extra_args = []
"#,
        endpoint = defaults.llm.endpoint,
        model = defaults.llm.model,
        max_tokens = defaults.llm.max_tokens,
        api_key_env = defaults.llm.api_key_env,
        template = DEFAULT_PROMPT_TEMPLATE,
        staging = defaults.notebook.staging_dir.display(),
        interpreter = defaults.executor.interpreter,
        clone_dir = defaults.publish.clone_dir.display(),
        branch = defaults.publish.branch,
        token_env = defaults.publish.token_env,
        force_push = defaults.publish.force,
        pandoc = defaults.convert.pandoc,
        uploads = defaults.convert.upload_dir.display(),
        outputs = defaults.convert.output_dir.display(),
        from_format = DEFAULT_FROM_FORMAT,
    );

    // The template must stay loadable
    Config::parse(&content)?;
    fs::write(&path, content)?;

    OperationResult {
        success: true,
        message: format!(
            "Created {}\n\nNext steps:\n  set publish.owner and publish.repo\n  \
             export GITHUB_TOKEN and ANTHROPIC_API_KEY\n  nbkit run \"prints the first 10 primes\"",
            path.display()
        ),
    }
    .render(mode);
    Ok(())
}
