use crate::application::read_models::{
    BeanGraphReadModel, InstanceGroupView, InstanceGroupsReadModel, ViewMetadata,
};
use crate::bean_graph::domain::{Bean, Edge};
use crate::ports::outbound::ViewFormatter;
use crate::shared::Result;
use std::collections::HashMap;

/// Markdown table header for beans
const BEAN_TABLE_HEADER: &str = "| Bean | Type | Scope | Dependencies |\n";

/// Markdown table separator line for beans
const BEAN_TABLE_SEPARATOR: &str = "|------|------|-------|--------------|\n";

/// Markdown table header for edges
const EDGE_TABLE_HEADER: &str = "| Source | Target |\n";

/// Markdown table separator line for edges
const EDGE_TABLE_SEPARATOR: &str = "|--------|--------|\n";

/// Markdown table header for instances
const INSTANCE_TABLE_HEADER: &str =
    "| Instance | Application | Status | Group | Build Version | Service URL |\n";

/// Markdown table separator line for instances
const INSTANCE_TABLE_SEPARATOR: &str =
    "|----------|-------------|--------|-------|---------------|-------------|\n";

/// MarkdownFormatter adapter for human-readable views
///
/// Bean graphs get bean and edge tables plus a Mermaid `graph LR` diagram;
/// instance lists get one table per group.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Keeps heading text on a single line
    fn escape_markdown_heading(text: &str) -> String {
        text.replace("\r\n", " ").replace(['\r', '\n'], " ")
    }

    /// Escapes a label for use inside a quoted Mermaid node label
    fn escape_mermaid_label(text: &str) -> String {
        text.replace('"', "#quot;").replace('\n', " ")
    }

    fn or_dash(value: Option<&str>) -> String {
        value
            .map(Self::escape_markdown_table_cell)
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering bean graph sections
impl MarkdownFormatter {
    fn render_metadata(&self, output: &mut String, metadata: &ViewMetadata) {
        output.push_str(&format!(
            "*Generated by {} {} at {} ({})*\n\n",
            metadata.tool_name, metadata.tool_version, metadata.generated_at, metadata.view_id
        ));
    }

    fn render_graph_summary(&self, output: &mut String, model: &BeanGraphReadModel) {
        output.push_str("## Summary\n\n");

        let selection = if model.selection.is_empty() {
            "all beans".to_string()
        } else {
            model
                .selection
                .iter()
                .map(|pattern| format!("`{}`", pattern))
                .collect::<Vec<_>>()
                .join(", ")
        };
        output.push_str(&format!("Selection: {}\n\n", selection));

        let summary = &model.summary;
        output.push_str("| Metric | Count |\n|--------|-------|\n");
        output.push_str(&format!("| Beans in snapshot | {} |\n", summary.total_beans));
        output.push_str(&format!("| Matched beans | {} |\n", summary.matched_beans));
        output.push_str(&format!("| Included beans | {} |\n", summary.included_beans));
        output.push_str(&format!("| Edges | {} |\n\n", summary.edges));
    }

    fn render_beans(&self, output: &mut String, beans: &[&Bean]) {
        output.push_str("## Beans\n\n");

        if beans.is_empty() {
            output.push_str("*No beans selected*\n\n");
            return;
        }

        output.push_str(BEAN_TABLE_HEADER);
        output.push_str(BEAN_TABLE_SEPARATOR);
        for bean in beans {
            let dependencies = if bean.dependencies().is_empty() {
                "-".to_string()
            } else {
                Self::escape_markdown_table_cell(&bean.dependencies().join(", "))
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(bean.name()),
                Self::or_dash(bean.type_name()),
                Self::or_dash(bean.scope()),
                dependencies
            ));
        }
        output.push('\n');
    }

    fn render_edges(&self, output: &mut String, edges: &[&Edge]) {
        output.push_str("## Dependencies\n\n");

        if edges.is_empty() {
            output.push_str("*No dependencies between the selected beans*\n\n");
            return;
        }

        output.push_str(EDGE_TABLE_HEADER);
        output.push_str(EDGE_TABLE_SEPARATOR);
        for edge in edges {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(edge.source()),
                Self::escape_markdown_table_cell(edge.target())
            ));
        }
        output.push('\n');
    }

    /// Mermaid ids are positional; bean names only appear as quoted labels
    fn render_diagram(&self, output: &mut String, beans: &[&Bean], edges: &[&Edge]) {
        if beans.is_empty() {
            return;
        }

        let ids: HashMap<&str, String> = beans
            .iter()
            .enumerate()
            .map(|(index, bean)| (bean.name(), format!("n{}", index)))
            .collect();

        output.push_str("## Diagram\n\n```mermaid\ngraph LR\n");
        for bean in beans {
            if let Some(id) = ids.get(bean.name()) {
                output.push_str(&format!(
                    "    {}[\"{}\"]\n",
                    id,
                    Self::escape_mermaid_label(bean.name())
                ));
            }
        }
        for edge in edges {
            if let (Some(source), Some(target)) = (ids.get(edge.source()), ids.get(edge.target())) {
                output.push_str(&format!("    {} --> {}\n", source, target));
            }
        }
        output.push_str("```\n");
    }
}

/// Helper methods for rendering instance list sections
impl MarkdownFormatter {
    fn render_group(&self, output: &mut String, group: &InstanceGroupView) {
        let mut heading = format!("## {}", Self::escape_markdown_heading(&group.name));
        if let Some(status) = group.status {
            heading.push_str(&format!(" ({})", status));
        }
        if let Some(build_version) = &group.build_version {
            heading.push_str(&format!(
                " - build {}",
                Self::escape_markdown_heading(build_version)
            ));
        }
        output.push_str(&heading);
        output.push_str("\n\n");

        output.push_str(INSTANCE_TABLE_HEADER);
        output.push_str(INSTANCE_TABLE_SEPARATOR);
        for instance in &group.instances {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&instance.id),
                Self::escape_markdown_table_cell(&instance.name),
                instance.status,
                Self::or_dash(instance.group.as_deref()),
                Self::or_dash(instance.build_version.as_deref()),
                Self::or_dash(instance.service_url.as_deref())
            ));
        }
        output.push('\n');
    }
}

impl ViewFormatter for MarkdownFormatter {
    fn format_bean_graph(&self, model: &BeanGraphReadModel) -> Result<String> {
        let beans: Vec<&Bean> = model.nodes().collect();
        let edges: Vec<&Edge> = model.edges().collect();

        let mut output = String::new();
        output.push_str("# Bean Dependency Graph\n\n");
        self.render_metadata(&mut output, &model.metadata);
        self.render_graph_summary(&mut output, model);
        self.render_beans(&mut output, &beans);
        self.render_edges(&mut output, &edges);
        self.render_diagram(&mut output, &beans, &edges);

        Ok(output)
    }

    fn format_instance_groups(&self, model: &InstanceGroupsReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str("# Instances\n\n");
        self.render_metadata(&mut output, &model.metadata);

        if model.groups.is_empty() {
            output.push_str("*No instances registered*\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "{} instances in {} groups, grouped by {}.\n\n",
            model.instance_count(),
            model.groups.len(),
            model.grouping
        ));
        for group in &model.groups {
            self.render_group(&mut output, group);
        }

        Ok(output)
    }
}
