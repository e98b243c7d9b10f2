/// One OAuth provider the scaffolded project can authenticate against.
///
/// `name` is the identifier NextAuth exports, `module` the path fragment
/// under `next-auth/providers/`. Environment keys derive from the
/// upper-cased name.
#[derive(Debug, Eq, PartialEq)]
pub struct Provider {
    pub name: &'static str,
    pub module: &'static str,
}

/// Fixed provider catalog, in prompt order.
pub static CATALOG: [Provider; 8] = [
    Provider { name: "Google", module: "google" },
    Provider { name: "GitHub", module: "github" },
    Provider { name: "Facebook", module: "facebook" },
    Provider { name: "Discord", module: "discord" },
    Provider { name: "LinkedIn", module: "linkedin" },
    Provider { name: "Reddit", module: "reddit" },
    Provider { name: "Twitter", module: "twitter" },
    Provider { name: "Twitch", module: "twitch" },
];

impl Provider {
    /// Stem of the `<NAME>_CLIENT_ID` / `<NAME>_CLIENT_SECRET` keys.
    pub fn env_prefix(&self) -> String {
        self.name.to_uppercase()
    }

    fn import_line(&self) -> String {
        format!(
            "import {} from \"next-auth/providers/{}\";",
            self.name, self.module
        )
    }

    fn constructor_block(&self) -> String {
        let prefix = self.env_prefix();
        format!(
            "    {}({{\n      clientId: process.env.{}_CLIENT_ID!,\n      clientSecret: process.env.{}_CLIENT_SECRET!,\n    }})",
            self.name, prefix, prefix
        )
    }
}

/// Render the complete `auth.config.ts` for the selected providers: one
/// import line and one constructor block each, nothing for the rest.
pub fn render_auth_config(selected: &[&Provider]) -> String {
    let mut out = String::new();
    for provider in selected {
        out.push_str(&provider.import_line());
        out.push('\n');
    }
    out.push_str("import type { NextAuthConfig } from \"next-auth\";\n\n");
    out.push_str("export default {\n  providers: [\n");
    let blocks: Vec<String> = selected.iter().map(|p| p.constructor_block()).collect();
    out.push_str(&blocks.join(",\n"));
    if !blocks.is_empty() {
        out.push('\n');
    }
    out.push_str("  ],\n} satisfies NextAuthConfig;\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> &'static Provider {
        CATALOG.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn catalog_modules_are_lowercase() {
        for provider in &CATALOG {
            assert_eq!(provider.module, provider.module.to_lowercase());
            assert_eq!(provider.env_prefix(), provider.name.to_uppercase());
        }
    }

    #[test]
    fn selected_providers_render_one_import_and_one_block_each() {
        let selected = [by_name("Google"), by_name("GitHub")];
        let config = render_auth_config(&selected);

        assert!(config.contains("import Google from \"next-auth/providers/google\";"));
        assert!(config.contains("import GitHub from \"next-auth/providers/github\";"));
        assert!(config.contains("process.env.GOOGLE_CLIENT_ID!"));
        assert!(config.contains("process.env.GITHUB_CLIENT_SECRET!"));
        assert_eq!(config.matches("import ").count(), 3); // two providers + the type import
        assert_eq!(config.matches("clientId:").count(), 2);
    }

    #[test]
    fn unselected_providers_do_not_appear() {
        let selected = [by_name("Discord")];
        let config = render_auth_config(&selected);

        for provider in &CATALOG {
            let present = config.contains(&format!("process.env.{}_CLIENT_ID", provider.env_prefix()));
            assert_eq!(present, provider.name == "Discord", "{}", provider.name);
        }
    }

    #[test]
    fn empty_selection_renders_an_empty_provider_list() {
        let config = render_auth_config(&[]);

        assert!(config.starts_with("import type { NextAuthConfig }"));
        assert!(config.contains("providers: [\n  ]"));
        assert!(!config.contains("process.env."));
        assert!(config.ends_with("} satisfies NextAuthConfig;\n"));
    }

    #[test]
    fn every_catalog_entry_renders_with_its_own_env_keys() {
        for provider in &CATALOG {
            let config = render_auth_config(&[provider]);
            let prefix = provider.env_prefix();
            assert!(config.contains(&format!("process.env.{prefix}_CLIENT_ID!")));
            assert!(config.contains(&format!("process.env.{prefix}_CLIENT_SECRET!")));
            assert!(config.contains(&format!("next-auth/providers/{}", provider.module)));
        }
    }
}
