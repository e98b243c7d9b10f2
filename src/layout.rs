use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};

/// Logical artifacts the tool writes into the target project.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Artifact {
    Schema,
    DbClient,
    PrismaConfig,
    EnvFile,
    AuthConfig,
    AuthEntry,
    AuthActions,
    AuthRoute,
    Middleware,
    RootLayout,
    RootPage,
    DashboardPage,
    SetupGuide,
}

impl Artifact {
    pub fn all() -> [Artifact; 13] {
        [
            Artifact::Schema,
            Artifact::DbClient,
            Artifact::PrismaConfig,
            Artifact::EnvFile,
            Artifact::AuthConfig,
            Artifact::AuthEntry,
            Artifact::AuthActions,
            Artifact::AuthRoute,
            Artifact::Middleware,
            Artifact::RootLayout,
            Artifact::RootPage,
            Artifact::DashboardPage,
            Artifact::SetupGuide,
        ]
    }

    /// Path relative to the app code root.
    fn relative(&self) -> &'static str {
        match self {
            Artifact::Schema => "prisma/schema.prisma",
            Artifact::DbClient => "lib/db.ts",
            Artifact::PrismaConfig => "prisma.config.ts",
            Artifact::EnvFile => ".env",
            Artifact::AuthConfig => "auth.config.ts",
            Artifact::AuthEntry => "auth.ts",
            Artifact::AuthActions => "actions/auth/index.ts",
            Artifact::AuthRoute => "app/api/auth/[...nextauth]/route.ts",
            Artifact::Middleware => "middleware.ts",
            Artifact::RootLayout => "app/layout.tsx",
            Artifact::RootPage => "app/page.tsx",
            Artifact::DashboardPage => "app/dashboard/page.tsx",
            Artifact::SetupGuide => "SETUP_GUIDE.txt",
        }
    }

    /// Artifacts that live at the project root no matter where app code
    /// sits: the ORM owns `prisma/` and `prisma.config.ts`, and `.env` plus
    /// the guide belong next to `package.json`.
    fn root_pinned(&self) -> bool {
        matches!(
            self,
            Artifact::Schema | Artifact::PrismaConfig | Artifact::EnvFile | Artifact::SetupGuide
        )
    }
}

/// Destination paths for every artifact, resolved once at startup from the
/// target project's layout convention. Placement is all-or-nothing: every
/// app artifact goes under `src/`, or none does.
#[derive(Clone, Debug)]
pub struct ProjectLayout {
    root: Utf8PathBuf,
    uses_src_dir: bool,
}

impl ProjectLayout {
    pub fn new(root: &Utf8Path, uses_src_dir: bool) -> Self {
        Self {
            root: root.to_owned(),
            uses_src_dir,
        }
    }

    /// Detect whether the project keeps application code under `src/`.
    pub fn detect(root: &Utf8Path) -> Self {
        let uses_src_dir = root.join("src").is_dir();
        tracing::debug!(uses_src_dir, "resolved project layout");
        Self::new(root, uses_src_dir)
    }

    pub fn uses_src_dir(&self) -> bool {
        self.uses_src_dir
    }

    pub fn path(&self, artifact: Artifact) -> Utf8PathBuf {
        if self.uses_src_dir && !artifact.root_pinned() {
            self.root.join("src").join(artifact.relative())
        } else {
            self.root.join(artifact.relative())
        }
    }
}

pub fn current_dir() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("current directory is not valid UTF-8"))
}
