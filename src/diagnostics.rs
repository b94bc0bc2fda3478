use dept_lookup::{LoadReport, WarningKind};

pub fn summarize(report: &LoadReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("Mapping: {}\n", report.path.display()));
    output.push_str(&format!("Records: {}\n", report.mapping.len()));

    output.push_str("Units:\n");
    if report.mapping.is_empty() {
        output.push_str("  (none)\n");
    } else {
        for record in report.mapping.records() {
            output.push_str(&format!(
                "  - {} (ext {}): {}\n",
                record.unit_display(),
                record.ext_display(),
                if record.keywords.is_empty() {
                    "(no keywords)".to_string()
                } else {
                    record.keywords.join(", ")
                }
            ));
        }
    }

    output.push_str(&format!("Warnings: {}\n", report.warnings.len()));
    for warning in &report.warnings {
        output.push_str(&format!(
            "  - [{}] {}\n",
            format_kind(&warning.kind),
            warning.message
        ));
    }

    output.trim_end().to_string()
}

fn format_kind(kind: &WarningKind) -> &'static str {
    match kind {
        WarningKind::MissingFile => "missing_file",
        WarningKind::Unreadable => "unreadable",
        WarningKind::Malformed => "malformed",
        WarningKind::MissingColumn => "missing_column",
        WarningKind::EmptyKeywords => "empty_keywords",
        WarningKind::EmptyUnit => "empty_unit",
        WarningKind::ShadowedKeyword => "shadowed_keyword",
    }
}
