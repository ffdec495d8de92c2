use crate::config::command::Command;
use crate::config::{AssetConfig, AssetKind};
#[cfg(feature = "watch")]
use crate::core::watcher::watch_modules;
use crate::core::AssetPipeline;
use crate::domain::model::{BuildReport, SplitReport};
use crate::utils::console::{
    kilobytes, print_error, print_header, print_info, print_rule, print_success, print_warning,
    RULE_WIDTH,
};
use crate::utils::error::AssetError;
use std::fmt::Write;

/// Runs commands against a pipeline and reports the outcome on the console.
///
/// Command results are booleans: failures are printed and never escalate
/// past this type.
pub struct AssetEngine<P: AssetPipeline> {
    pipeline: P,
    config: AssetConfig,
}

impl<P: AssetPipeline> AssetEngine<P> {
    pub fn new(pipeline: P, config: AssetConfig) -> Self {
        Self { pipeline, config }
    }

    pub async fn dispatch(&self, command: &Command) {
        match command {
            Command::Default => {
                self.run_default().await;
            }
            Command::Split => {
                self.split().await;
            }
            Command::Build => {
                self.build().await;
            }
            Command::Watch => self.watch().await,
            Command::List => self.list(),
            Command::Help => self.help(),
            Command::Invalid(raw) => self.invalid(raw),
        }
    }

    pub async fn run_default(&self) -> bool {
        print_header(&format!(
            "🚀 {} BUILD SYSTEM - {}",
            self.config.kind.label().to_uppercase(),
            self.config.brand
        ));
        print_info("Mode: automatic (split + build)\n");

        if !self.split().await {
            return false;
        }
        let built = self.build().await;

        let bin = self.config.kind.binary_name();
        println!("\n{}", "=".repeat(70));
        println!("  🎉 DONE!");
        println!("{}", "=".repeat(70));
        println!("\n💡 Next time just run:");
        println!("   • {} build  (rebuild)", bin);
        println!("   • {} watch  (auto build)", bin);
        if self.config.kind == AssetKind::Js {
            println!("   • {} list   (module details)", bin);
        }
        println!();

        built
    }

    pub async fn split(&self) -> bool {
        let icon = match self.config.kind {
            AssetKind::Css => "🎨",
            AssetKind::Js => "🎯",
        };
        print_header(&format!(
            "{} SPLITTING {} INTO MODULES",
            icon,
            self.config.kind.label().to_uppercase()
        ));

        match self.pipeline.split().await {
            Ok(report) => {
                self.print_split_report(&report);
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    pub async fn build(&self) -> bool {
        print_header(&format!(
            "🔨 BUILD {}",
            self.config.output_name().to_uppercase()
        ));

        match self.pipeline.build().await {
            Ok(report) => {
                self.print_build_report(&report);
                true
            }
            Err(e) => {
                self.report_error(&e);
                false
            }
        }
    }

    #[cfg(feature = "watch")]
    pub async fn watch(&self) {
        print_header("👀 WATCH MODE - rebuild automatically on change");
        print_info(&format!("Watching: {}", self.config.modules_dir.display()));
        print_info("Press Ctrl+C to stop...\n");

        let result = watch_modules(&self.pipeline, &self.config, |path, outcome| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            println!("\n🔄 Change detected: {}", name);
            match outcome {
                Ok(report) => self.print_build_report(&report),
                Err(e) => self.report_error(&e),
            }
        })
        .await;

        match result {
            Ok(()) => {
                println!();
                print_info("Watch mode stopped");
            }
            Err(e) => self.report_error(&e),
        }
    }

    #[cfg(not(feature = "watch"))]
    pub async fn watch(&self) {
        print_error("Watch mode is not available in this build!");
        print_info(&format!(
            "Reinstall {} with the `watch` feature enabled",
            self.config.kind.binary_name()
        ));
    }

    pub fn list(&self) {
        print_header(&format!(
            "📋 {} MODULES IN DETAIL",
            self.config.kind.label().to_uppercase()
        ));
        print!("{}", self.module_listing());
    }

    /// Body of the `list` command: every module with its usage notes.
    pub fn module_listing(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();
        let _ = writeln!(out, "Total modules: {}\n", self.config.modules.len());

        for (i, module) in self.config.modules.iter().enumerate() {
            let _ = writeln!(out, "\n{}", rule);
            let _ = writeln!(out, "📦 MODULE #{:02}: {}", i + 1, module.filename);
            let _ = writeln!(out, "{}", rule);
            let _ = writeln!(out, "📌 Name: {}", module.description);
            if let Some(details) = &module.details {
                let _ = writeln!(out, "{}", details.trim_end());
            }
        }

        let _ = writeln!(out, "\n{}", rule);
        let _ = writeln!(
            out,
            "💡 The code of each module lives in: {}",
            self.config.modules_dir.display()
        );
        let _ = writeln!(out, "{}\n", rule);
        out
    }

    pub fn help(&self) {
        print_header(&format!(
            "📖 {} BUILD SYSTEM USAGE",
            self.config.kind.label().to_uppercase()
        ));
        print!("{}", self.usage());
    }

    /// Body of the `help` command: commands, directory layout, workflow and
    /// the template tag for the artifact.
    pub fn usage(&self) -> String {
        let kind = self.config.kind;
        let bin = kind.binary_name();
        let input = self.config.input_name();
        let output = self.config.output_name();
        let mut out = String::new();

        let _ = writeln!(out, "🔧 Available commands:\n");

        let mut commands = vec![
            (bin.to_string(), "Split + build (default)", "First run"),
            (
                format!("{} split", bin),
                "Split only",
                "Slice the source file into modules",
            ),
            (
                format!("{} build", bin),
                "Build only",
                "Merge the modules into the minified bundle",
            ),
            (
                format!("{} watch", bin),
                "Watch mode",
                "Rebuild automatically when a module changes",
            ),
        ];
        if kind == AssetKind::Js {
            commands.push((
                format!("{} list", bin),
                "List modules",
                "Show the details of every module",
            ));
        }
        commands.push((format!("{} help", bin), "Show help", "This screen"));

        for (cmd, desc, note) in &commands {
            let _ = writeln!(out, "  {:30}", cmd);
            let _ = writeln!(out, "    └─ {}", desc);
            let _ = writeln!(out, "       💡 {}\n", note);
        }

        let modules_dir = self
            .config
            .modules_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(out, "📁 Directory layout:\n");
        let _ = writeln!(out, "  {}/", self.config.base_dir.display());
        let _ = writeln!(out, "  ├── {}/", modules_dir);
        for name in self.config.build_order().iter().take(2) {
            let _ = writeln!(out, "  │   ├── {}", name);
        }
        let _ = writeln!(out, "  │   └── ...");
        let _ = writeln!(out, "  ├── {:24} ← source file", input);
        let _ = writeln!(out, "  └── {:24} ← build output (deploy this)\n", output);

        let _ = writeln!(out, "⚡ Recommended workflow:\n");
        let _ = writeln!(out, "  1. First run:   {}", bin);
        let _ = writeln!(out, "  2. Development: {} watch", bin);
        let _ = writeln!(out, "  3. Production:  deploy only {}\n", output);

        let asset_dir = self
            .config
            .base_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(out, "🔗 Template tag:\n");
        let _ = match kind {
            AssetKind::Css => writeln!(
                out,
                "  <link rel=\"stylesheet\" href=\"{{{{ url_for('static', filename='{}/{}') }}}}\">\n",
                asset_dir, output
            ),
            AssetKind::Js => writeln!(
                out,
                "  <script src=\"{{{{ url_for('static', filename='{}/{}') }}}}\" defer></script>\n",
                asset_dir, output
            ),
        };
        out
    }

    pub fn invalid(&self, raw: &str) {
        print_error(&format!("Invalid command: {}", raw));
        print_info(&format!(
            "Run '{} help' to see the available commands",
            self.config.kind.binary_name()
        ));
    }

    fn print_split_report(&self, report: &SplitReport) {
        print_info(&format!("Read file: {}", self.config.input_file.display()));
        print_success(&format!("Module directory: {}", report.modules_dir.display()));
        println!("\n📦 Splitting into {} modules...\n", self.config.modules.len());

        for module in &self.config.modules {
            if let Some(stat) = report.written.iter().find(|s| s.filename == module.filename) {
                println!(
                    "  {:32} | {:5} lines | {:7.1} KB | {}",
                    stat.filename,
                    stat.lines,
                    kilobytes(stat.bytes),
                    stat.description
                );
            } else {
                print_warning(&format!("{:32} | No content found", module.filename));
            }
        }

        println!();
        print_rule();
        println!(
            "  Total: {} files | {:5} lines | {:7.1} KB",
            report.written.len(),
            report.total_lines(),
            kilobytes(report.total_bytes())
        );
        print_rule();
        print_success(&format!(
            "Done! Modules saved to: {}",
            report.modules_dir.display()
        ));
    }

    fn print_build_report(&self, report: &BuildReport) {
        println!("📦 Merging modules...\n");

        for filename in self.config.build_order() {
            if let Some(module) = report.bundled.iter().find(|m| m.filename == filename) {
                println!("  ✓ {:32} | {:7.1} KB", module.filename, kilobytes(module.bytes));
            } else if report.missing.iter().any(|m| m == filename) {
                print_warning(&format!("Not found: {}", filename));
            }
        }

        let saved_kb = report.saved_bytes() as f64 / 1024.0;
        println!();
        print_rule();
        println!("  📊 Build statistics:");
        println!("     • Modules:        {:8}", report.module_count());
        println!("     • Original size:  {:8.1} KB", kilobytes(report.original_bytes));
        println!("     • Minified size:  {:8.1} KB", kilobytes(report.minified_bytes));
        println!(
            "     • Saved:          {:8.1} KB ({:.1}%)",
            saved_kb,
            report.saved_percent()
        );
        print_rule();
        print_success(&format!("Build succeeded: {}", report.output_file.display()));
    }

    fn report_error(&self, e: &AssetError) {
        tracing::error!(
            "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
            self.config.kind.label(),
            e,
            e.category(),
            e.severity()
        );
        print_error(&e.user_friendly_message());
        print_info(&e.recovery_suggestion());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::config::profile::ProfileConfig;
    use crate::core::pipeline::ModulePipeline;
    use tempfile::TempDir;

    fn engine(temp_dir: &TempDir, kind: AssetKind) -> AssetEngine<ModulePipeline<LocalStorage>> {
        let config = ProfileConfig::builtin(kind).unwrap().asset_config();
        let pipeline = ModulePipeline::new(LocalStorage::new(temp_dir.path()), config.clone()).unwrap();
        AssetEngine::new(pipeline, config)
    }

    #[test]
    fn test_module_listing_prints_details() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir, AssetKind::Js);

        let listing = engine.module_listing();
        assert!(listing.starts_with("Total modules: 13\n"));
        assert!(listing.contains("📦 MODULE #01: 01-floating-buttons.js"));
        assert!(listing.contains("12-chatbot.js"));
        assert!(listing.contains("POST /chatbot/send"));
        assert!(listing.contains("app/static/js/modules"));
    }

    #[test]
    fn test_usage_matches_asset_kind() {
        let temp_dir = TempDir::new().unwrap();

        let css = engine(&temp_dir, AssetKind::Css).usage();
        assert!(css.contains("build-css watch"));
        assert!(!css.contains("build-css list"));
        assert!(css.contains("│   ├── 01-reset.css"));
        assert!(css.contains("<link rel=\"stylesheet\" href=\"{{ url_for('static', filename='css/main.min.css') }}\">"));

        let js = engine(&temp_dir, AssetKind::Js).usage();
        assert!(js.contains("build-js list"));
        assert!(js.contains("deploy only main.min.js"));
        assert!(js.contains("filename='js/main.min.js') }}\" defer></script>"));
    }

    #[tokio::test]
    async fn test_default_run_stops_when_input_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir, AssetKind::Css);

        assert!(!engine.run_default().await);
        assert!(!temp_dir.path().join("app/static/css/main.min.css").exists());
    }

    #[tokio::test]
    async fn test_build_without_split_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir, AssetKind::Js);

        assert!(!engine.build().await);
    }

    #[tokio::test]
    async fn test_default_run_splits_and_builds() {
        let temp_dir = TempDir::new().unwrap();
        let engine = engine(&temp_dir, AssetKind::Js);

        let source = "// ==================== FLOATING BUTTONS ====================\nshowButtons(); // always\n// ==================== MOBILE PRODUCT CAROUSEL ====================\ninitCarousel();\n";
        std::fs::create_dir_all(temp_dir.path().join("app/static/js")).unwrap();
        std::fs::write(temp_dir.path().join("app/static/js/main.js"), source).unwrap();

        assert!(engine.run_default().await);

        let artifact =
            std::fs::read_to_string(temp_dir.path().join("app/static/js/main.min.js")).unwrap();
        assert!(artifact.contains("\"use strict\";"));
        assert!(artifact.contains("showButtons();"));
        assert!(artifact.contains("initCarousel();"));
        assert!(!artifact.contains("// always"));
    }
}
