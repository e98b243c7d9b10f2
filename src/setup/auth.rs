use anyhow::Result;

use crate::layout::{Artifact, ProjectLayout};
use crate::process::{self, CommandStep};
use crate::providers;
use crate::selection::Selection;

/// Install NextAuth, the Prisma adapter, and the icon library the generated
/// pages use.
pub fn install_dependencies() -> Result<()> {
    process::run_steps(&dependency_plan())
}

fn dependency_plan() -> Vec<CommandStep> {
    vec![
        CommandStep::new(
            "install next-auth + prisma adapter",
            &["npm", "install", "next-auth@beta", "@auth/prisma-adapter"],
        ),
        CommandStep::new("install lucide-react", &["npm", "install", "lucide-react"]),
    ]
}

/// Write the generated auth configuration and the static auth plumbing.
pub fn write_artifacts(selection: &Selection, layout: &ProjectLayout) -> Result<()> {
    let config = providers::render_auth_config(&selection.providers);
    super::write_artifact(&config, &layout.path(Artifact::AuthConfig))?;

    super::install_artifact("auth.ts", &layout.path(Artifact::AuthEntry))?;
    super::install_artifact("auth-actions.ts", &layout.path(Artifact::AuthActions))?;
    super::install_artifact("auth-route.ts", &layout.path(Artifact::AuthRoute))?;
    super::install_artifact("middleware.ts", &layout.path(Artifact::Middleware))
}
