//! Report rendering shared by `process` and `batch`.
//!
//! Amounts always go through `format_brl_with_prefix`; an absent description
//! renders as an empty cell.

use serde::Serialize;

use irpf_core::declaration::rules::{format_brl_with_prefix, format_cpf};
use irpf_core::models::config::ExportConfig;
use irpf_core::models::reference::group_name;
use irpf_core::{AggregatedRecord, DeclarantInfo, DeclarationReport, ExtractedRecord, YearHeaders};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for written reports.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_report(
    report: &DeclarationReport,
    format: OutputFormat,
    export: &ExportConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => format_json(report, export),
        OutputFormat::Csv => format_csv(report, export),
        OutputFormat::Text => Ok(format_text(report, export)),
    }
}

/// JSON view of a report, with amounts already rendered.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    declarant: Option<JsonDeclarant<'a>>,
    years: &'a YearHeaders,
    records: Vec<JsonItem<'a>>,
    summary: JsonSummary<'a>,
    warnings: &'a [String],
    processing_time_ms: u64,
}

#[derive(Serialize)]
struct JsonDeclarant<'a> {
    name: &'a str,
    cpf: &'a str,
    birth_date: &'a str,
}

#[derive(Serialize)]
struct JsonItem<'a> {
    group: &'a str,
    code: &'a str,
    prior_value: String,
    current_value: String,
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    rows: Vec<JsonRow<'a>>,
    total: JsonRow<'a>,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    group: &'a str,
    code: &'a str,
    description: &'a str,
    prior_value: String,
    current_value: String,
}

impl<'a> From<&'a DeclarantInfo> for JsonDeclarant<'a> {
    fn from(declarant: &'a DeclarantInfo) -> Self {
        Self {
            name: declarant.name.as_deref().unwrap_or(""),
            cpf: declarant.cpf.as_deref().unwrap_or(""),
            birth_date: declarant.birth_date.as_deref().unwrap_or(""),
        }
    }
}

impl<'a> JsonItem<'a> {
    fn new(record: &'a ExtractedRecord, prefix: &str) -> Self {
        Self {
            group: &record.group,
            code: &record.code,
            prior_value: format_brl_with_prefix(record.prior_value, prefix),
            current_value: format_brl_with_prefix(record.current_value, prefix),
        }
    }
}

impl<'a> JsonRow<'a> {
    fn new(row: &'a AggregatedRecord, prefix: &str) -> Self {
        Self {
            group: &row.group,
            code: &row.code,
            description: row.description.as_deref().unwrap_or(""),
            prior_value: format_brl_with_prefix(row.prior_value, prefix),
            current_value: format_brl_with_prefix(row.current_value, prefix),
        }
    }
}

fn format_json(report: &DeclarationReport, export: &ExportConfig) -> anyhow::Result<String> {
    let prefix = export.currency_prefix.as_str();
    let view = JsonReport {
        declarant: export
            .include_declarant
            .then(|| JsonDeclarant::from(&report.declarant)),
        years: &report.years,
        records: report.records.iter().map(|r| JsonItem::new(r, prefix)).collect(),
        summary: JsonSummary {
            rows: report.summary.rows().iter().map(|r| JsonRow::new(r, prefix)).collect(),
            total: JsonRow::new(report.summary.total(), prefix),
        },
        warnings: &report.warnings,
        processing_time_ms: report.processing_time_ms,
    };

    Ok(serde_json::to_string_pretty(&view)?)
}

fn format_csv(report: &DeclarationReport, export: &ExportConfig) -> anyhow::Result<String> {
    let mut sections = Vec::new();

    if export.include_declarant {
        sections.push(format_declarant_csv(&report.declarant)?);
    }

    let (prior_col, current_col) = report.years.column_names();
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["grupo", "codigo", "descricao", prior_col.as_str(), current_col.as_str()])?;

    for row in report.summary.iter() {
        wtr.write_record([
            row.group.as_str(),
            row.code.as_str(),
            row.description.as_deref().unwrap_or(""),
            &format_brl_with_prefix(row.prior_value, &export.currency_prefix),
            &format_brl_with_prefix(row.current_value, &export.currency_prefix),
        ])?;
    }

    sections.push(String::from_utf8(wtr.into_inner()?)?);
    Ok(sections.join("\n"))
}

fn format_declarant_csv(declarant: &DeclarantInfo) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["nome", "cpf", "data_nascimento"])?;
    wtr.write_record([
        declarant.name.as_deref().unwrap_or(""),
        declarant.cpf.as_deref().unwrap_or(""),
        declarant.birth_date.as_deref().unwrap_or(""),
    ])?;

    Ok(String::from_utf8(wtr.into_inner()?)?)
}

fn format_text(report: &DeclarationReport, export: &ExportConfig) -> String {
    let mut output = String::new();
    let money = |v| format_brl_with_prefix(v, &export.currency_prefix);

    if export.include_declarant {
        let declarant = &report.declarant;
        output.push_str("Declarant:\n");
        output.push_str(&format!("  Name:       {}\n", declarant.name.as_deref().unwrap_or("-")));
        output.push_str(&format!(
            "  CPF:        {}\n",
            declarant.cpf.as_deref().map(format_cpf).as_deref().unwrap_or("-")
        ));
        output.push_str(&format!(
            "  Birth date: {}\n",
            declarant.birth_date.as_deref().unwrap_or("-")
        ));
        output.push('\n');
    }

    if report.summary.is_empty() {
        output.push_str("No assets found.\n");
        return output;
    }

    output.push_str(&format!(
        "Assets by (group, code)  [{} -> {}]\n",
        report.years.prior, report.years.current
    ));

    for row in report.summary.rows() {
        output.push_str(&format!(
            "  {} {}  {:<48} {:>20} {:>20}\n",
            row.group,
            row.code,
            truncate(row.description.as_deref().unwrap_or(""), 48),
            money(row.prior_value),
            money(row.current_value),
        ));
        if let Some(name) = group_name(&row.group) {
            output.push_str(&format!("         ({})\n", name));
        }
    }

    let total = report.summary.total();
    output.push_str(&format!(
        "  {:<54} {:>20} {:>20}\n",
        total.description.as_deref().unwrap_or(""),
        money(total.prior_value),
        money(total.current_value),
    ));

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(3)).collect();
        cut.push_str("...");
        cut
    }
}
