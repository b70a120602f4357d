//! opreg CLI library - report building and rendering shared by the binary
//! and its tests.

use anyhow::{Context, Result};
use opreg_core::{AttrKind, AttrValue, Catalog, Category, OpDescriptor, Visibility};
use serde::Serialize;
use std::fmt::Write;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// One row of `opreg list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorSummary {
    pub name: String,
    pub category: Category,
    pub visibility: Visibility,
}

impl From<&OpDescriptor> for OperatorSummary {
    fn from(descriptor: &OpDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            category: descriptor.category(),
            visibility: descriptor.visibility(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttrReport {
    pub name: String,
    pub kind: AttrKind,
    /// `None` for required attributes.
    pub default: Option<AttrValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

/// Full description of one operator, for `opreg show`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatorReport {
    pub name: String,
    pub category: Category,
    pub visibility: Visibility,
    pub exported: bool,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub attributes: Vec<AttrReport>,
}

/// Result of `opreg check`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub registered: usize,
    pub exported: usize,
    pub internal: usize,
    pub per_category: Vec<(Category, usize)>,
}

/// Operators to list, sorted by name.
///
/// Without `all`, only exported names are listed. `category` restricts the
/// listing to one group.
pub fn list_operators(
    catalog: &Catalog,
    category: Option<Category>,
    all: bool,
) -> Vec<OperatorSummary> {
    let mut rows: Vec<OperatorSummary> = catalog
        .registry()
        .iter()
        .filter(|d| all || catalog.is_exported(d.name()))
        .filter(|d| category.is_none_or(|c| d.category() == c))
        .map(OperatorSummary::from)
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}

/// Describe one operator by name.
pub fn describe(catalog: &Catalog, name: &str) -> Result<OperatorReport> {
    let descriptor = catalog
        .lookup(name)
        .with_context(|| format!("Cannot describe '{name}'"))?;
    let schema = descriptor.schema();

    Ok(OperatorReport {
        name: descriptor.name().to_string(),
        category: descriptor.category(),
        visibility: descriptor.visibility(),
        exported: catalog.is_exported(name),
        inputs: schema.inputs.iter().map(ToString::to_string).collect(),
        outputs: schema.outputs.iter().map(ToString::to_string).collect(),
        attributes: schema
            .attrs
            .iter()
            .map(|spec| AttrReport {
                name: spec.name.to_string(),
                kind: spec.kind,
                default: spec.default.to_value(),
                choices: spec.choices.iter().map(ToString::to_string).collect(),
            })
            .collect(),
    })
}

/// Verify the catalog and summarize it.
pub fn check(catalog: &Catalog) -> Result<CheckReport> {
    catalog
        .verify()
        .context("Catalog manifest does not resolve")?;

    let registry = catalog.registry();
    let per_category = Category::ALL
        .into_iter()
        .map(|category| (category, registry.by_category(category).len()))
        .collect();

    Ok(CheckReport {
        registered: registry.len(),
        exported: catalog.manifest().len(),
        internal: registry.iter().filter(|d| !d.is_public()).count(),
        per_category,
    })
}

pub fn render_list(rows: &[OperatorSummary], format: Format) -> Result<String> {
    match format {
        Format::Json => to_json(rows),
        Format::Text => {
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            let mut out = String::new();
            for row in rows {
                let marker = match row.visibility {
                    Visibility::Public => "",
                    Visibility::Internal => "  (internal)",
                };
                writeln!(out, "{:<width$}  {}{}", row.name, row.category, marker)?;
            }
            Ok(out)
        }
    }
}

pub fn render_report(report: &OperatorReport, format: Format) -> Result<String> {
    if format == Format::Json {
        return to_json(report);
    }

    let mut out = String::new();
    writeln!(out, "Operator: {} ({})", report.name, report.category)?;
    writeln!(
        out,
        "  Visibility: {:?}{}",
        report.visibility,
        if report.exported { ", exported" } else { "" }
    )?;
    writeln!(out, "  Inputs: {}", list_or_none(&report.inputs))?;
    writeln!(out, "  Outputs: {}", list_or_none(&report.outputs))?;

    if report.attributes.is_empty() {
        writeln!(out, "  Attributes: (none)")?;
    } else {
        writeln!(out, "  Attributes:")?;
        for attr in &report.attributes {
            let default = match &attr.default {
                Some(value) => format!(" = {value}"),
                None => " (required)".to_string(),
            };
            write!(out, "    {}: {}{}", attr.name, attr.kind, default)?;
            if !attr.choices.is_empty() {
                write!(out, " [{}]", attr.choices.join("|"))?;
            }
            writeln!(out)?;
        }
    }
    Ok(out)
}

pub fn render_check(report: &CheckReport, format: Format) -> Result<String> {
    if format == Format::Json {
        return to_json(report);
    }

    let mut out = String::new();
    writeln!(
        out,
        "OK: {} operators registered, {} exported, {} internal",
        report.registered, report.exported, report.internal
    )?;
    for (category, count) in &report.per_category {
        writeln!(out, "  {category:<8} {count}")?;
    }
    Ok(out)
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize report")?;
    json.push('\n');
    Ok(json)
}
