use crate::domain::model::Dependency;

/// Leading line of every report, printed even when nothing was found.
pub const SEPARATOR: &str =
    "**********************************************************************";

/// Inline marker appended to a field line whose value still contains an
/// unresolved `${...}` build-time placeholder.
const PLACEHOLDER_MARKER: &str =
    "     ************************************************************** ";

const PLACEHOLDER_TOKEN: &str = "${";

/// Sorts by (group, artifact), both plain byte-wise string comparison.
/// The sort is stable, so entries equal on both keys keep scan order.
pub fn sort_dependencies(deps: &mut [Dependency]) {
    deps.sort_by(|a, b| {
        a.group
            .cmp(&b.group)
            .then_with(|| a.artifact.cmp(&b.artifact))
    });
}

fn annotate(value: &str, bundle_path: &str) -> String {
    if value.contains(PLACEHOLDER_TOKEN) {
        format!("{}{}", PLACEHOLDER_MARKER, bundle_path)
    } else {
        String::new()
    }
}

/// Renders one `<dependency>` block in the fixed output format. The block
/// ends with a newline; the report adds a blank line after each block.
pub fn render_dependency(dep: &Dependency) -> String {
    let mut out = String::from("<dependency>\n");
    out.push_str(&format!("    <groupId>{}</groupId>\n", dep.group));
    out.push_str(&format!(
        "    <artifactId>{}</artifactId>{}\n",
        dep.artifact,
        annotate(&dep.artifact, &dep.bundle_path)
    ));
    out.push_str(&format!(
        "    <version>{}</version>{}\n",
        dep.version,
        annotate(&dep.version, &dep.bundle_path)
    ));
    out.push_str("    <scope>provided</scope>\n");
    out.push_str("</dependency>\n");
    out
}

/// Full report body: separator line, then every block in sorted order.
pub fn render_report(deps: &[Dependency]) -> String {
    let mut out = String::with_capacity(SEPARATOR.len() + 1 + deps.len() * 160);
    out.push_str(SEPARATOR);
    out.push('\n');
    for dep in deps {
        out.push_str(&render_dependency(dep));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dep(group: &str, artifact: &str, version: &str, path: &str) -> Dependency {
        Dependency {
            group: group.to_string(),
            artifact: artifact.to_string(),
            version: version.to_string(),
            bundle_path: path.to_string(),
        }
    }

    #[test]
    fn test_sort_by_group_then_artifact() {
        let mut deps = vec![
            dep("org.b", "zeta", "1", "/p1"),
            dep("org.a", "beta", "1", "/p2"),
            dep("org.b", "alpha", "1", "/p3"),
            dep("org.a", "alpha", "1", "/p4"),
        ];
        sort_dependencies(&mut deps);

        let order: Vec<(&str, &str)> = deps
            .iter()
            .map(|d| (d.group.as_str(), d.artifact.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("org.a", "alpha"),
                ("org.a", "beta"),
                ("org.b", "alpha"),
                ("org.b", "zeta"),
            ]
        );
    }

    #[test]
    fn test_sort_is_stable_on_full_ties() {
        let mut deps = vec![
            dep("org.a", "core", "2.0", "/first"),
            dep("org.a", "core", "1.0", "/second"),
        ];
        sort_dependencies(&mut deps);
        assert_eq!(deps[0].bundle_path, "/first");
        assert_eq!(deps[1].bundle_path, "/second");
    }

    #[test]
    fn test_render_plain_block() {
        let rendered = render_dependency(&dep("org.x", "core", "1.0", "/tmp/a/bundle.jar"));
        assert_eq!(
            rendered,
            "<dependency>\n\
             \x20   <groupId>org.x</groupId>\n\
             \x20   <artifactId>core</artifactId>\n\
             \x20   <version>1.0</version>\n\
             \x20   <scope>provided</scope>\n\
             </dependency>\n"
        );
    }

    #[test]
    fn test_placeholder_version_gets_marker_and_path() {
        let rendered = render_dependency(&dep("org.x", "core", "${revision}", "/tmp/a/bundle.jar"));
        let version_line = rendered
            .lines()
            .find(|l| l.contains("<version>"))
            .unwrap();
        assert!(version_line.contains("<version>${revision}</version>"));
        assert!(version_line.contains("**************************************************************"));
        assert!(version_line.ends_with("/tmp/a/bundle.jar"));

        let artifact_line = rendered
            .lines()
            .find(|l| l.contains("<artifactId>"))
            .unwrap();
        assert!(!artifact_line.contains('*'));
    }

    #[test]
    fn test_placeholder_artifact_gets_marker_independently() {
        let rendered = render_dependency(&dep("org.x", "${module}", "1.0", "/tmp/b/bundle.jar"));
        let artifact_line = rendered
            .lines()
            .find(|l| l.contains("<artifactId>"))
            .unwrap();
        assert!(artifact_line.contains("<artifactId>${module}</artifactId>"));
        assert!(artifact_line.ends_with("/tmp/b/bundle.jar"));

        let version_line = rendered
            .lines()
            .find(|l| l.contains("<version>"))
            .unwrap();
        assert!(!version_line.contains('*'));
    }

    #[test]
    fn test_empty_report_is_separator_only() {
        assert_eq!(render_report(&[]), format!("{}\n", SEPARATOR));
    }

    #[test]
    fn test_report_blocks_separated_by_blank_line() {
        let report = render_report(&[
            dep("org.a", "alpha", "1", "/p1"),
            dep("org.b", "beta", "2", "/p2"),
        ]);
        assert!(report.starts_with(&format!("{}\n<dependency>\n", SEPARATOR)));
        assert!(report.contains("</dependency>\n\n<dependency>\n"));
        assert!(report.ends_with("</dependency>\n\n"));
    }

    #[test]
    fn test_separator_is_seventy_asterisks() {
        assert_eq!(SEPARATOR.len(), 70);
        assert!(SEPARATOR.chars().all(|c| c == '*'));
    }
}
