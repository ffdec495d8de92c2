use crate::config::AssetKind;
use crate::domain::model::ModuleDescriptor;
use chrono::{DateTime, Local};

const BANNER_RULE: &str = "====================";
const WIDE_RULE: &str =
    "============================================================================";

/// Banner written at the top of every split module file.
pub fn module_banner(
    kind: AssetKind,
    module: &ModuleDescriptor,
    source_name: &str,
    generated_at: DateTime<Local>,
) -> String {
    let date = generated_at.format(kind.timestamp_format());

    match kind {
        AssetKind::Css => format!(
            "/* {rule} {title} {rule}\n * File: {file}\n * Auto-generated from {source}\n * Date: {date}\n * {wide} */\n\n",
            rule = BANNER_RULE,
            title = module.description.to_uppercase(),
            file = module.filename,
            source = source_name,
            date = date,
            wide = WIDE_RULE,
        ),
        AssetKind::Js => {
            let details = module
                .details
                .as_deref()
                .map(|d| d.trim_end())
                .filter(|d| !d.is_empty())
                .map(|d| format!(" *\n{}\n", d))
                .unwrap_or_default();

            format!(
                "/**\n * {rule} {title} {rule}\n * File: {file}\n * Auto-generated from {source}\n * Date: {date}\n * {wide}\n{details} * {wide}\n */\n\n",
                rule = BANNER_RULE,
                title = module.description,
                file = module.filename,
                source = source_name,
                date = date,
                wide = WIDE_RULE,
                details = details,
            )
        }
    }
}

/// Banner that opens the minified artifact. It is the first block comment of
/// the minifier input, so the minifier keeps it as the artifact header.
pub fn build_banner(
    kind: AssetKind,
    brand: &str,
    module_count: usize,
    generated_at: DateTime<Local>,
) -> String {
    let description = match kind {
        AssetKind::Css => "Auto-generated minified CSS",
        AssetKind::Js => "Auto-generated optimized JavaScript",
    };

    let mut banner = format!(
        "/*!\n * {wide}\n * {brand} - Main {label} Build\n * {wide}\n * Generated: {date}\n * Modules: {count} files\n * Description: {description}\n * DO NOT EDIT THIS FILE DIRECTLY - Edit individual modules instead\n * {wide}\n */\n\n",
        wide = WIDE_RULE,
        brand = brand,
        label = kind.label(),
        date = generated_at.format(kind.timestamp_format()),
        count = module_count,
        description = description,
    );

    if kind == AssetKind::Js {
        banner.push_str("\"use strict\";\n\n");
    }

    banner
}

/// Removes a leading generated module banner, if any.
pub fn strip_module_banner(content: &str) -> &str {
    let trimmed = content.trim_start();
    let opens_banner = (trimmed.starts_with("/* ") || trimmed.starts_with("/**\n"))
        && trimmed.contains(" * File: ");

    if !opens_banner {
        return content;
    }

    match trimmed.find("*/") {
        Some(end) => trimmed[end + 2..].trim_start_matches('\n'),
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn module(details: Option<&str>) -> ModuleDescriptor {
        ModuleDescriptor {
            filename: "02-navbar.css".to_string(),
            start_marker: "/* NAVBAR */".to_string(),
            end_marker: None,
            description: "Navigation Bar Styles".to_string(),
            details: details.map(str::to_string),
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_css_module_banner() {
        let banner = module_banner(AssetKind::Css, &module(None), "style.css", fixed_time());
        assert!(banner.starts_with("/* ==================== NAVIGATION BAR STYLES"));
        assert!(banner.contains(" * File: 02-navbar.css\n"));
        assert!(banner.contains(" * Auto-generated from style.css\n"));
        assert!(banner.contains(" * Date: 2026-03-04 05:06:07\n"));
        assert!(banner.ends_with("*/\n\n"));
    }

    #[test]
    fn test_js_module_banner_embeds_details() {
        let mut js = module(Some(" * Purpose: toggles the menu\n"));
        js.filename = "02-navbar.js".to_string();
        let banner = module_banner(AssetKind::Js, &js, "main.js", fixed_time());
        assert!(banner.starts_with("/**\n"));
        assert!(banner.contains(" * Date: 04/03/2026 05:06:07\n"));
        assert!(banner.contains(" * Purpose: toggles the menu\n"));
        assert_eq!(banner.matches("*/").count(), 1);
    }

    #[test]
    fn test_build_banner() {
        let css = build_banner(AssetKind::Css, "ACME", 3, fixed_time());
        assert!(css.starts_with("/*!\n"));
        assert!(css.contains("ACME - Main CSS Build"));
        assert!(css.contains(" * Modules: 3 files\n"));
        assert!(!css.contains("use strict"));

        let js = build_banner(AssetKind::Js, "ACME", 2, fixed_time());
        assert!(js.contains("ACME - Main JavaScript Build"));
        assert!(js.ends_with("\"use strict\";\n\n"));
    }

    #[test]
    fn test_strip_module_banner() {
        let banner = module_banner(AssetKind::Css, &module(None), "style.css", fixed_time());
        let body = "/* NAVBAR */\nnav{}\n";
        assert_eq!(strip_module_banner(&format!("{}{}", banner, body)), body);
        assert_eq!(strip_module_banner(body), body);
    }
}
