use crate::context::Context;
use crate::schema::Session;
use crate::template::ValuesRenderer;
use crate::wizard;
use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing::info;

const HELM_REPO: &str = "https://charts.v3.cnvrg.io";

/// Options for the `values` command
#[derive(Debug, Clone)]
pub struct ValuesOptions {
    /// Where the rendered document is written
    pub output: PathBuf,
    /// Template overriding the embedded one
    pub template: Option<PathBuf>,
    /// YAML overlay applied on top of the documented defaults
    pub defaults: Option<PathBuf>,
    /// Echo the rendered document to stdout
    pub print: bool,
}

impl Default for ValuesOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from("values.yaml"),
            template: None,
            defaults: None,
            print: true,
        }
    }
}

/// Handles the 'values' command - runs the wizard and writes the Helm values file
pub struct ValuesCommand;

impl ValuesCommand {
    /// Execute the values command
    pub fn execute(ctx: &Context, options: &ValuesOptions) -> Result<()> {
        // Fail on a broken template before asking anything
        let renderer = Self::renderer(ctx, options)?;
        let session = Self::starting_session(ctx, options)?;

        let session = wizard::run(ctx, session)?;

        ctx.output.subsection("Summary");
        ctx.output
            .key_value("Cluster domain", &session.cluster_domain.cluster_domain);
        ctx.output
            .key_value("Internal domain", &session.cluster_internal_domain.domain);
        ctx.output
            .key_value("Output file", &options.output.display().to_string());

        let rendered = renderer.render(&session)?;
        if options.print {
            ctx.output.blank();
            ctx.output.document(&rendered);
        }

        ctx.fs
            .write(&options.output, &rendered)
            .with_context(|| format!("Failed to write {}", options.output.display()))?;
        info!(path = %options.output.display(), bytes = rendered.len(), "values file written");

        ctx.output.blank();
        ctx.output.success(&format!(
            "Values file written to {}",
            options.output.display()
        ));
        Self::print_install_instructions(ctx, options);

        Ok(())
    }

    fn renderer(ctx: &Context, options: &ValuesOptions) -> Result<ValuesRenderer> {
        match &options.template {
            Some(path) => {
                let source = ctx
                    .fs
                    .read_to_string(path)
                    .with_context(|| format!("Failed to read template {}", path.display()))?;
                info!(path = %path.display(), "using custom values template");
                ValuesRenderer::with_template(&source)
            }
            None => ValuesRenderer::new(),
        }
    }

    fn starting_session(ctx: &Context, options: &ValuesOptions) -> Result<Session> {
        match &options.defaults {
            Some(path) => {
                let source = ctx
                    .fs
                    .read_to_string(path)
                    .with_context(|| format!("Failed to read defaults {}", path.display()))?;
                info!(path = %path.display(), "applying defaults overlay");
                Session::from_yaml(&source)
            }
            None => Ok(Session::default()),
        }
    }

    fn print_install_instructions(ctx: &Context, options: &ValuesOptions) {
        ctx.output.subsection("Install cnvrg with Helm");
        ctx.output
            .command(&format!("helm repo add cnvrgv3 {}", HELM_REPO));
        ctx.output.command("helm repo update");
        ctx.output.command("helm search repo cnvrgv3/cnvrg -l");
        ctx.output.command(&format!(
            "helm install cnvrg cnvrgv3/cnvrg --create-namespace -n cnvrg --timeout 1500s --wait --values {}",
            options.output.display()
        ));
    }
}
