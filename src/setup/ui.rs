use anyhow::Result;

use crate::layout::{Artifact, ProjectLayout};

/// Write the root layout/page, the dashboard page, and the setup guide.
pub fn write_artifacts(layout: &ProjectLayout) -> Result<()> {
    super::install_artifact("layout.tsx", &layout.path(Artifact::RootLayout))?;
    super::install_artifact("page.tsx", &layout.path(Artifact::RootPage))?;
    super::install_artifact("dashboard.tsx", &layout.path(Artifact::DashboardPage))?;
    super::install_artifact("setup-guide.txt", &layout.path(Artifact::SetupGuide))
}
